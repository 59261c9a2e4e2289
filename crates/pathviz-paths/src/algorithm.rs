use std::fmt;
use std::str::FromStr;

use pathviz_core::ParseKindError;

use crate::astar::AStar;
use crate::bidir::BidirectionalAStar;
use crate::gbfs::GreedyBestFirst;
use crate::heuristic::Heuristic;
use crate::jps::JumpPointSearch;
use crate::traits::PathfindingAlgorithm;
use crate::uninformed::{Bfs, Dfs};

/// The selectable search algorithms.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "astar"))]
    AStar,
    #[cfg_attr(feature = "serde", serde(rename = "bi-astar"))]
    BidirectionalAStar,
    #[cfg_attr(feature = "serde", serde(rename = "bfs"))]
    Bfs,
    #[cfg_attr(feature = "serde", serde(rename = "dfs"))]
    Dfs,
    #[cfg_attr(feature = "serde", serde(rename = "gbfs"))]
    GreedyBestFirst,
    #[cfg_attr(feature = "serde", serde(rename = "jps"))]
    JumpPointSearch,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Self::AStar,
        Self::BidirectionalAStar,
        Self::Bfs,
        Self::Dfs,
        Self::GreedyBestFirst,
        Self::JumpPointSearch,
    ];

    /// Short label shown to the operator.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "A*",
            Self::BidirectionalAStar => "Bi-A*",
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::GreedyBestFirst => "GBFS",
            Self::JumpPointSearch => "JPS",
        }
    }

    /// Name accepted by [`FromStr`] and used in config files.
    pub const fn key(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::BidirectionalAStar => "bi-astar",
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::GreedyBestFirst => "gbfs",
            Self::JumpPointSearch => "jps",
        }
    }

    /// Whether the heuristic affects this algorithm.
    pub const fn uses_heuristic(self) -> bool {
        !matches!(self, Self::Bfs | Self::Dfs)
    }

    /// Build the algorithm. BFS and DFS ignore `heuristic`.
    pub fn build(self, heuristic: Heuristic) -> Box<dyn PathfindingAlgorithm> {
        match self {
            Self::AStar => Box::new(AStar::new(heuristic)),
            Self::BidirectionalAStar => Box::new(BidirectionalAStar::new(heuristic)),
            Self::Bfs => Box::new(Bfs),
            Self::Dfs => Box::new(Dfs),
            Self::GreedyBestFirst => Box::new(GreedyBestFirst::new(heuristic)),
            Self::JumpPointSearch => Box::new(JumpPointSearch::new(heuristic)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseKindError;

    /// Accepts either the key (`"bi-astar"`) or the label (`"Bi-A*"`),
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.key().eq_ignore_ascii_case(t) || a.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| ParseKindError::new("algorithm", s))
    }
}
