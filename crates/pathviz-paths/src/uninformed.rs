//! Breadth-first and depth-first search. Both share one loop and differ
//! only in frontier discipline.

use std::collections::VecDeque;

use pathviz_core::{CellState, Grid, Point};

use crate::outcome::{SearchError, SearchOutcome};
use crate::state::{NO_PARENT, finish, prepare, trace_path};
use crate::traits::PathfindingAlgorithm;

trait Frontier: Default {
    fn put(&mut self, idx: usize);
    fn take(&mut self) -> Option<usize>;
}

impl Frontier for VecDeque<usize> {
    fn put(&mut self, idx: usize) {
        self.push_back(idx);
    }
    fn take(&mut self) -> Option<usize> {
        self.pop_front()
    }
}

impl Frontier for Vec<usize> {
    fn put(&mut self, idx: usize) {
        self.push(idx);
    }
    fn take(&mut self) -> Option<usize> {
        self.pop()
    }
}

/// Breadth-first search. Finds a shortest path on a unit-cost grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Bfs;

/// Depth-first search. Finds some path, usually a long one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Dfs;

impl PathfindingAlgorithm for Bfs {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn find_path(
        &self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        on_step: &mut dyn FnMut(&Grid),
    ) -> Result<SearchOutcome, SearchError> {
        search::<VecDeque<usize>>(self.name(), grid, start, end, on_step)
    }
}

impl PathfindingAlgorithm for Dfs {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn find_path(
        &self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        on_step: &mut dyn FnMut(&Grid),
    ) -> Result<SearchOutcome, SearchError> {
        search::<Vec<usize>>(self.name(), grid, start, end, on_step)
    }
}

fn search<F: Frontier>(
    name: &str,
    grid: &mut Grid,
    start: Point,
    end: Point,
    on_step: &mut dyn FnMut(&Grid),
) -> Result<SearchOutcome, SearchError> {
    let (si, ei) = prepare(name, grid, start, end)?;
    let mut visited = vec![false; grid.len()];
    let mut parent = vec![NO_PARENT; grid.len()];
    let mut frontier = F::default();
    let mut nbuf: Vec<Point> = Vec::with_capacity(4);

    visited[si] = true;
    frontier.put(si);

    let mut nodes_visited = 0;
    while let Some(ci) = frontier.take() {
        nodes_visited += 1;
        if ci == ei {
            let path_length = trace_path(grid, &parent, ei, on_step);
            return Ok(finish(
                name,
                SearchOutcome {
                    nodes_visited,
                    path_length,
                    jumps: 0,
                },
            ));
        }

        let cp = grid.point(ci);
        nbuf.clear();
        nbuf.extend_from_slice(grid.neighbors_of(cp));
        for &np in nbuf.iter() {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            if visited[ni] {
                continue;
            }
            visited[ni] = true;
            parent[ni] = ci;
            frontier.put(ni);
            grid.mark(np, CellState::Open);
        }

        on_step(grid);
        grid.mark(cp, CellState::Closed);
    }

    Ok(finish(
        name,
        SearchOutcome {
            nodes_visited,
            ..Default::default()
        },
    ))
}
