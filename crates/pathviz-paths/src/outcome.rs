//! Search results and failures.

use std::fmt;

use pathviz_core::Point;

/// Summary of a finished search.
///
/// `path_length == 0` means the frontier ran dry without reaching the goal;
/// that is a normal outcome, not an error.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub nodes_visited: usize,
    /// Number of moves from Start to End.
    pub path_length: usize,
    /// Straight segments between consecutive jump points (Jump Point Search
    /// only, zero otherwise).
    pub jumps: usize,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.path_length > 0
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.found() {
            write!(
                f,
                "Nodes Visited: {} Path Length: {}",
                self.nodes_visited, self.path_length
            )
        } else {
            write!(f, "No path found! Nodes Visited: {}", self.nodes_visited)
        }
    }
}

/// Which end of a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
        })
    }
}

/// Reasons a search refuses to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// Start or End has not been placed.
    MissingEndpoint(Endpoint),
    /// An endpoint lies outside the grid.
    OutOfBounds(Point),
    /// An endpoint sits on a barrier.
    BlockedEndpoint(Point),
    /// Start and End are the same cell.
    CoincidentEndpoints(Point),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEndpoint(e) => write!(f, "no {e} cell has been placed"),
            Self::OutOfBounds(p) => write!(f, "endpoint {p} is outside the grid"),
            Self::BlockedEndpoint(p) => write!(f, "endpoint {p} is a barrier"),
            Self::CoincidentEndpoints(p) => write!(f, "start and end are both {p}"),
        }
    }
}

impl std::error::Error for SearchError {}
