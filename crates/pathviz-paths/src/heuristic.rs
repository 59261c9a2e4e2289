use std::fmt;
use std::str::FromStr;

use pathviz_core::{ParseKindError, Point};

use crate::distance::{chebyshev, euclidean, manhattan};

/// Estimate of the remaining distance between two cells.
///
/// All four are admissible on a 4-connected unit-cost grid, so A* stays
/// optimal whichever one is selected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Heuristic {
    /// `|dx| + |dy|`.
    #[default]
    Manhattan,
    /// `sqrt(dx² + dy²)`.
    Euclidean,
    /// Chebyshev distance, `max(|dx|, |dy|)`.
    Diagonal,
    /// Always zero: A* degrades to uniform-cost search.
    Dijkstra,
}

impl Heuristic {
    pub const ALL: [Heuristic; 4] = [
        Self::Manhattan,
        Self::Euclidean,
        Self::Diagonal,
        Self::Dijkstra,
    ];

    /// Estimated distance from `a` to `b`. Never negative.
    #[inline]
    pub fn estimate(self, a: Point, b: Point) -> f64 {
        match self {
            Self::Manhattan => f64::from(manhattan(a, b)),
            Self::Euclidean => euclidean(a, b),
            Self::Diagonal => f64::from(chebyshev(a, b)),
            Self::Dijkstra => 0.0,
        }
    }

    /// Label shown to the operator.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "Manhattan",
            Self::Euclidean => "Euclidean",
            Self::Diagonal => "Diagonal",
            Self::Dijkstra => "Dijkstra",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Self::Manhattan),
            "euclidean" => Ok(Self::Euclidean),
            "diagonal" | "chebyshev" => Ok(Self::Diagonal),
            "dijkstra" | "none" => Ok(Self::Dijkstra),
            _ => Err(ParseKindError::new("heuristic", s)),
        }
    }
}
