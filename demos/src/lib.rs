//! Operator-side model of the pathfinding visualizer, shared by the
//! headless `pathviz` binary and any graphical front end.
//!
//! Demonstrates: loading selections from JSON, the click policy for placing
//! endpoints and barriers, maze generation followed by a search, and the
//! status line reported after each run.

pub mod config;
pub mod session;

pub use config::{ConfigError, VisualizerConfig};
pub use session::{Button, INTRO, Session, Status};
