//! Stepwise search algorithms over a [`pathviz_core::Grid`].
//!
//! Every algorithm implements [`PathfindingAlgorithm`] and works in place:
//! it tags cells `Open`/`Closed` while exploring and `Path`/`Jump` along the
//! route it finds, calling an observer after each step so a renderer can
//! animate the run.
//!
//! | Algorithm | Frontier | Shortest path |
//! |---|---|---|
//! | [`AStar`] | heap on `g + h` | yes |
//! | [`BidirectionalAStar`] | two heaps, one per end | not guaranteed |
//! | [`Bfs`] | FIFO queue | yes |
//! | [`Dfs`] | LIFO stack | no |
//! | [`GreedyBestFirst`] | heap on `h` | no |
//! | [`JumpPointSearch`] | heap on `g + h`, jump points only | yes |
//!
//! Moves are 4-connected and cost 1.

mod algorithm;
mod astar;
mod bidir;
mod distance;
mod gbfs;
mod heuristic;
mod jps;
mod outcome;
mod state;
mod traits;
mod uninformed;

pub use algorithm::Algorithm;
pub use astar::AStar;
pub use bidir::BidirectionalAStar;
pub use distance::{chebyshev, euclidean, manhattan};
pub use gbfs::GreedyBestFirst;
pub use heuristic::Heuristic;
pub use jps::JumpPointSearch;
pub use outcome::{Endpoint, SearchError, SearchOutcome};
pub use traits::PathfindingAlgorithm;
pub use uninformed::{Bfs, Dfs};
