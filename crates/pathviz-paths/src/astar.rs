use pathviz_core::{CellState, Grid, Point};

use crate::heuristic::Heuristic;
use crate::outcome::{SearchError, SearchOutcome};
use crate::state::{SearchState, finish, prepare, trace_path};
use crate::traits::PathfindingAlgorithm;

/// A* search: cells are expanded in order of `f = g + h`, ties going to the
/// cell queued first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AStar {
    pub heuristic: Heuristic,
}

impl AStar {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }
}

impl PathfindingAlgorithm for AStar {
    fn name(&self) -> &'static str {
        "A*"
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
        st.seed(si, self.heuristic.estimate(start, end));

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
            expand(grid, &mut st, ci, end, self.heuristic);
            on_step(grid);
            let p = grid.point(ci);
            grid.mark(p, CellState::Closed);
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

/// Relax every neighbour of `ci` at unit cost, queueing those whose g
/// improves and tagging them `Open`.
pub(crate) fn expand(
    grid: &mut Grid,
    st: &mut SearchState,
    ci: usize,
    goal: Point,
    heuristic: Heuristic,
) {
    let mut nbuf = std::mem::take(&mut st.nbuf);
    nbuf.clear();
    nbuf.extend_from_slice(grid.neighbors_of(grid.point(ci)));

    let tentative_g = st.g[ci] + 1.0;
    for &np in nbuf.iter() {
        let Some(ni) = grid.idx(np) else {
            continue;
        };
        if tentative_g >= st.g[ni] {
            continue;
        }
        st.g[ni] = tentative_g;
        st.parent[ni] = ci;
        st.push(ni, tentative_g + heuristic.estimate(np, goal));
        grid.mark(np, CellState::Open);
    }

    st.nbuf = nbuf;
}
