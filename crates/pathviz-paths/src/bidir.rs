use pathviz_core::{CellState, Grid, Point};

use crate::astar::expand;
use crate::heuristic::Heuristic;
use crate::outcome::{SearchError, SearchOutcome};
use crate::state::{SearchState, finish, prepare, trace_path};
use crate::traits::PathfindingAlgorithm;

/// Bidirectional A*: one frontier grows from Start towards End, another from
/// End towards Start, one expansion each per round.
///
/// The search stops at the first cell one side pops that the other side has
/// already reached. That meeting cell is not always on a shortest path, so
/// the reported length can exceed the optimum.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BidirectionalAStar {
    pub heuristic: Heuristic,
}

impl BidirectionalAStar {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }
}

impl PathfindingAlgorithm for BidirectionalAStar {
    fn name(&self) -> &'static str {
        "Bi-A*"
    }

    /// `nodes_visited` counts rounds, each of which pops at most one cell
    /// per side.
    fn find_path(
        &self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        on_step: &mut dyn FnMut(&Grid),
    ) -> Result<SearchOutcome, SearchError> {
        let (si, ei) = prepare(self.name(), grid, start, end)?;
        let h = self.heuristic;
        let mut fwd = SearchState::new(grid.len());
        let mut bwd = SearchState::new(grid.len());
        fwd.seed(si, h.estimate(start, end));
        bwd.seed(ei, h.estimate(end, start));

        let mut rounds = 0;
        let meet = loop {
            let Some(a) = fwd.pop() else {
                break None;
            };
            rounds += 1;
            if bwd.reached(a) {
                break Some(a);
            }
            expand(grid, &mut fwd, a, end, h);

            let Some(b) = bwd.pop() else {
                break None;
            };
            if fwd.reached(b) {
                break Some(b);
            }
            expand(grid, &mut bwd, b, start, h);

            on_step(grid);
            for c in [a, b] {
                let p = grid.point(c);
                grid.mark(p, CellState::Closed);
            }
        };

        let Some(mi) = meet else {
            return Ok(finish(
                self.name(),
                SearchOutcome {
                    nodes_visited: rounds,
                    ..Default::default()
                },
            ));
        };

        let mut path_length = trace_path(grid, &fwd.parent, mi, on_step);
        let mp = grid.point(mi);
        grid.mark(mp, CellState::Path);
        on_step(grid);
        path_length += trace_path(grid, &bwd.parent, mi, on_step);
        Ok(finish(
            self.name(),
            SearchOutcome {
                nodes_visited: rounds,
                path_length,
                jumps: 0,
            },
        ))
    }
}
