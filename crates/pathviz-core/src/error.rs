//! Error types for grid edits and name parsing.

use std::fmt;

use crate::geom::Point;

/// Errors arising from editing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The coordinate lies outside the grid.
    OutOfBounds(Point),
    /// The cell already holds the other endpoint (or an endpoint would be
    /// overwritten by a barrier).
    EndpointOccupied(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "cell {p} is outside the grid"),
            Self::EndpointOccupied(p) => write!(f, "cell {p} already holds an endpoint"),
        }
    }
}

impl std::error::Error for GridError {}

/// A name that does not match any known algorithm, heuristic or maze kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    /// What was being parsed ("algorithm", "heuristic", ...).
    pub kind: &'static str,
    pub input: String,
}

impl ParseKindError {
    pub fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_owned(),
        }
    }
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} `{}`", self.kind, self.input)
    }
}

impl std::error::Error for ParseKindError {}
