//! Maze generators that carve a barrier-filled [`pathviz_core::Grid`] into a
//! perfect maze on the odd-index room lattice.

pub mod kind;
pub mod mazegen;

pub use kind::MazeKind;
pub use mazegen::MazeGen;
