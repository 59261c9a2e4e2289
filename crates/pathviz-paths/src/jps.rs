use pathviz_core::{CARDINALS, CellState, Grid, Point};

use crate::heuristic::Heuristic;
use crate::outcome::{SearchError, SearchOutcome};
use crate::state::{NO_PARENT, SearchState, finish, prepare};
use crate::traits::PathfindingAlgorithm;

/// Jump Point Search on a 4-connected grid.
///
/// Straight runs are skipped in one go; only cells where the search might
/// have to turn (jump points) enter the open heap. g is the number of cells
/// jumped, so the result is as short as A*'s.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct JumpPointSearch {
    pub heuristic: Heuristic,
}

impl JumpPointSearch {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }
}

impl PathfindingAlgorithm for JumpPointSearch {
    fn name(&self) -> &'static str {
        "JPS"
    }

    /// `nodes_visited` counts expanded jump points; `jumps` the straight
    /// segments of the path.
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
                let (path_length, jumps) = trace_jumps(grid, &st.parent, ei, on_step);
                return Ok(finish(
                    self.name(),
                    SearchOutcome {
                        nodes_visited,
                        path_length,
                        jumps,
                    },
                ));
            }

            let cp = grid.point(ci);
            for dir in CARDINALS {
                let Some((jp, dist)) = jump(grid, cp, dir, end) else {
                    continue;
                };
                let Some(ji) = grid.idx(jp) else {
                    continue;
                };
                let tentative_g = st.g[ci] + f64::from(dist);
                if tentative_g >= st.g[ji] {
                    continue;
                }
                st.g[ji] = tentative_g;
                st.parent[ji] = ci;
                st.push(ji, tentative_g + self.heuristic.estimate(jp, end));
                grid.mark(jp, CellState::Open);
            }

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

/// Walk from `from` in direction `dir` until reaching the goal or a jump
/// point. Returns the cell and how many steps it took, or `None` when the
/// run hits a barrier or the grid edge first.
///
/// A horizontal step is a jump point when a cell above or below it is open
/// while the one diagonally behind is blocked. A vertical step is one under
/// the mirrored rule, or when a horizontal jump from it finds something.
fn jump(grid: &Grid, from: Point, dir: Point, goal: Point) -> Option<(Point, i32)> {
    let sides = if dir.x != 0 {
        [Point::new(0, -1), Point::new(0, 1)]
    } else {
        [Point::new(-1, 0), Point::new(1, 0)]
    };

    let mut cur = from;
    let mut dist = 0;
    loop {
        let n = cur + dir;
        if !grid.is_walkable(n) {
            return None;
        }
        dist += 1;
        if n == goal {
            return Some((n, dist));
        }
        let forced = sides
            .iter()
            .any(|&s| grid.is_walkable(n + s) && !grid.is_walkable(cur + s));
        if forced {
            return Some((n, dist));
        }
        if dir.y != 0 && sides.iter().any(|&s| jump(grid, n, s, goal).is_some()) {
            return Some((n, dist));
        }
        cur = n;
    }
}

/// Tag the path cell by cell: jump points `Jump`, the cells between them
/// `Path`. Returns (cells walked, segments).
fn trace_jumps(
    grid: &mut Grid,
    parent: &[usize],
    goal: usize,
    on_step: &mut dyn FnMut(&Grid),
) -> (usize, usize) {
    let mut points = vec![grid.point(goal)];
    let mut cur = goal;
    while parent[cur] != NO_PARENT {
        cur = parent[cur];
        points.push(grid.point(cur));
    }
    points.reverse();

    let mut length = 0;
    for seg in points.windows(2) {
        let (a, b) = (seg[0], seg[1]);
        let step = (b - a).signum();
        let mut p = a;
        while p != b {
            p = p + step;
            let tag = if p == b { CellState::Jump } else { CellState::Path };
            grid.mark(p, tag);
            length += 1;
            on_step(grid);
        }
    }
    (length, points.len() - 1)
}
