//! **pathviz-core**: the grid substrate of the pathfinding visualizer.
//!
//! This crate provides geometry primitives, the [`CellState`] role tags, and
//! the [`Grid`] that every search and maze generator reads and mutates. The
//! grid is the only channel through which algorithms report visual progress:
//! a renderer simply draws each cell's tag.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;

pub use cell::{Cell, CellState};
pub use error::{GridError, ParseKindError};
pub use geom::{CARDINALS, Point, Range};
pub use grid::{DEFAULT_SIZE, Grid};
pub use layout::GridLayout;
