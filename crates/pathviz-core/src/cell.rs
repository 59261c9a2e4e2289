//! The [`Cell`] type: one grid position and its role tag.

use std::fmt;

use crate::geom::Point;

/// The role of a cell. Exactly one tag applies at a time, so a cell can never
/// be both a barrier and an endpoint, or both open and closed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Barrier,
    Start,
    End,
    /// Discovered by a search, waiting in its frontier.
    Open,
    /// Expanded by a search.
    Closed,
    /// Part of a reconstructed path.
    Path,
    /// Jump point on a Jump Point Search path.
    Jump,
}

impl CellState {
    /// Whether a search may step onto a cell with this tag.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Barrier)
    }

    /// Start or End.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }

    /// Tags written by a search run (cleared by a path clear).
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Open | Self::Closed | Self::Path | Self::Jump)
    }

    /// Single-character glyph used by the text renderer.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Barrier => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Open => 'o',
            Self::Closed => 'x',
            Self::Path => '*',
            Self::Jump => '+',
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A single grid cell.
///
/// The neighbour list is a snapshot taken by
/// [`Grid::update_neighbors`](crate::Grid::update_neighbors); it goes stale as
/// soon as any barrier changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Point,
    state: CellState,
    neighbors: Vec<Point>,
}

impl Cell {
    /// Create an empty cell at `pos`.
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            state: CellState::Empty,
            neighbors: Vec::with_capacity(4),
        }
    }

    /// Position of the cell (`x` = column, `y` = row).
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.y
    }

    /// Current role tag.
    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Materialised walkable cardinal neighbours.
    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: impl IntoIterator<Item = Point>) {
        self.neighbors.clear();
        self.neighbors.extend(neighbors);
    }
}
