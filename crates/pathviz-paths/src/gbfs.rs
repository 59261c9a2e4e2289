use pathviz_core::{CellState, Grid, Point};

use crate::heuristic::Heuristic;
use crate::outcome::{SearchError, SearchOutcome};
use crate::state::{SearchState, finish, prepare, trace_path};
use crate::traits::PathfindingAlgorithm;

/// Greedy best-first search: always expands the queued cell that looks
/// closest to the goal, ignoring the distance already travelled.
///
/// Expanded cells are never reopened, so the path found is often longer
/// than the shortest one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GreedyBestFirst {
    pub heuristic: Heuristic,
}

impl GreedyBestFirst {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }
}

impl PathfindingAlgorithm for GreedyBestFirst {
    fn name(&self) -> &'static str {
        "GBFS"
    }

    fn find_path(
        &self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        on_step: &mut dyn FnMut(&Grid),
    ) -> Result<SearchOutcome, SearchError> {
        let (si, ei) = prepare(self.name(), grid, start, end)?;
        let mut st = SearchState::new(grid.len());
        let mut closed = vec![false; grid.len()];
        st.seed(si, 0.0);

        let mut nodes_visited = 0;
        while let Some(ci) = st.pop() {
            nodes_visited += 1;
            if ci == ei {
                let path_length = trace_path(grid, &st.parent, ei, on_step);
                return Ok(finish(
                    self.name(),
                    SearchOutcome {
                        nodes_visited,
                        path_length,
                        jumps: 0,
                    },
                ));
            }
            closed[ci] = true;

            let cp = grid.point(ci);
            let mut nbuf = std::mem::take(&mut st.nbuf);
            nbuf.clear();
            nbuf.extend_from_slice(grid.neighbors_of(cp));
            for &np in nbuf.iter() {
                let Some(ni) = grid.idx(np) else {
                    continue;
                };
                if st.is_open(ni) || closed[ni] {
                    continue;
                }
                st.parent[ni] = ci;
                st.push(ni, self.heuristic.estimate(np, end));
                grid.mark(np, CellState::Open);
            }
            st.nbuf = nbuf;

            on_step(grid);
            grid.mark(cp, CellState::Closed);
        }

        Ok(finish(
            self.name(),
            SearchOutcome {
                nodes_visited,
                ..Default::default()
            },
        ))
    }
}
