//! The [`Grid`] type: a fixed-size square board of [`Cell`]s.
//!
//! The grid is the exclusive owner of its cells and keeps track of where the
//! Start and End cells are, so that at most one of each exists at any time.
//! Searches and maze generators mutate it in place; callers must not run two
//! of them against the same grid at once.

use std::fmt;

use crate::cell::{Cell, CellState};
use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::layout::GridLayout;

/// Side length of the grid used by the visualizer.
pub const DEFAULT_SIZE: i32 = 33;

/// A square `size × size` grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Option<Point>,
    end: Option<Point>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl Grid {
    /// Create a grid of empty cells. Negative sizes produce an empty grid.
    pub fn new(size: i32) -> Self {
        let size = size.max(0);
        let bounds = Range::new(0, 0, size, size);
        Self {
            cells: bounds.iter().map(Cell::new).collect(),
            bounds,
            start: None,
            end: None,
        }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> i32 {
        self.bounds.width()
    }

    /// The bounding range `[0, size)²`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.size() as usize + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.size().max(1) as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// The cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// The role tag at `p`, or `None` outside the grid.
    #[inline]
    pub fn state(&self, p: Point) -> Option<CellState> {
        self.cell(p).map(Cell::state)
    }

    /// Whether `p` is inside the grid and not a barrier.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.state(p).is_some_and(CellState::is_walkable)
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Number of cells carrying `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Resolve a pixel position to the cell under it.
    pub fn clicked_cell(&self, layout: &GridLayout, pixel: Point) -> Option<Point> {
        layout.cell_at(pixel, self.bounds)
    }

    // -----------------------------------------------------------------------
    // Single-cell edits
    // -----------------------------------------------------------------------

    /// Make `p` the Start cell, moving Start if one already exists.
    pub fn set_start(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.idx(p).ok_or(GridError::OutOfBounds(p))?;
        if self.end == Some(p) {
            return Err(GridError::EndpointOccupied(p));
        }
        if let Some(old) = self.start.take() {
            self.write(old, CellState::Empty);
        }
        self.cells[i].set_state(CellState::Start);
        self.start = Some(p);
        Ok(())
    }

    /// Make `p` the End cell, moving End if one already exists.
    pub fn set_end(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.idx(p).ok_or(GridError::OutOfBounds(p))?;
        if self.start == Some(p) {
            return Err(GridError::EndpointOccupied(p));
        }
        if let Some(old) = self.end.take() {
            self.write(old, CellState::Empty);
        }
        self.cells[i].set_state(CellState::End);
        self.end = Some(p);
        Ok(())
    }

    /// Turn `p` into a barrier. Endpoints are refused.
    pub fn set_barrier(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.idx(p).ok_or(GridError::OutOfBounds(p))?;
        if self.cells[i].state().is_endpoint() {
            return Err(GridError::EndpointOccupied(p));
        }
        self.cells[i].set_state(CellState::Barrier);
        Ok(())
    }

    /// Reset `p` to Empty, forgetting Start/End if it held one.
    pub fn erase(&mut self, p: Point) -> Result<(), GridError> {
        if !self.contains(p) {
            return Err(GridError::OutOfBounds(p));
        }
        self.write(p, CellState::Empty);
        Ok(())
    }

    /// Carve `p` open (maze generation). Out-of-range points are ignored.
    pub fn carve(&mut self, p: Point) {
        self.write(p, CellState::Empty);
    }

    /// Tag `p` with a search mark (Open, Closed, Path, Jump).
    ///
    /// Endpoints and barriers keep their tag, so searches can mark freely.
    pub fn mark(&mut self, p: Point, state: CellState) {
        debug_assert!(state.is_search_mark(), "{state:?} is not a search mark");
        if let Some(i) = self.idx(p) {
            let c = &mut self.cells[i];
            if c.state().is_walkable() && !c.state().is_endpoint() {
                c.set_state(state);
            }
        }
    }

    fn write(&mut self, p: Point, state: CellState) {
        let Some(i) = self.idx(p) else {
            return;
        };
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }
        self.cells[i].set_state(state);
    }

    // -----------------------------------------------------------------------
    // Neighbours
    // -----------------------------------------------------------------------

    /// Recompute every cell's neighbour list: in-bounds cardinal neighbours
    /// that are not barriers.
    pub fn update_neighbors(&mut self) {
        for i in 0..self.cells.len() {
            let p = self.cells[i].pos();
            let nbs: Vec<Point> = self.walkable_neighbors(p).collect();
            self.cells[i].set_neighbors(nbs);
        }
    }

    /// The neighbour list materialised by the last
    /// [`update_neighbors`](Self::update_neighbors) call.
    pub fn neighbors_of(&self, p: Point) -> &[Point] {
        self.cell(p).map(Cell::neighbors).unwrap_or_default()
    }

    /// Walkable cardinal neighbours of `p`, computed from current state.
    pub fn walkable_neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4()
            .into_iter()
            .filter(move |&n| self.is_walkable(n))
    }

    // -----------------------------------------------------------------------
    // Bulk edits
    // -----------------------------------------------------------------------

    /// Fill the whole grid with barriers (the blank canvas of a maze).
    /// Start and End are forgotten.
    pub fn mark_barrier_all(&mut self) {
        self.fill(CellState::Barrier);
    }

    /// Reset every cell to Empty. Start and End are forgotten.
    pub fn reset_to_empty(&mut self) {
        self.fill(CellState::Empty);
    }

    /// Wipe search marks, keeping Start, End and barriers.
    pub fn clear_non_endpoints(&mut self) {
        for c in self.cells.iter_mut() {
            if c.state().is_search_mark() {
                c.set_state(CellState::Empty);
            }
        }
    }

    fn fill(&mut self, state: CellState) {
        for c in self.cells.iter_mut() {
            c.set_state(state);
        }
        self.start = None;
        self.end = None;
    }
}

impl fmt::Display for Grid {
    /// One line per row, one glyph per cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.size().max(1) as usize;
        for row in self.cells.chunks(w) {
            for c in row {
                write!(f, "{}", c.state())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
