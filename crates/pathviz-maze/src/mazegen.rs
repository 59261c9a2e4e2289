//! Maze generation on the odd-index room lattice.
//!
//! Cells whose column and row are both odd are rooms; the cells between two
//! rooms are walls. Every generator starts from a grid filled with barriers
//! and carves rooms and walls open, calling `on_step` after each carve.

use pathviz_core::{CARDINALS, CellState, Grid, Point};
use rand::prelude::*;

use crate::kind::MazeKind;

/// Maze generator driven by the random source `R`.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Run the generator `kind` on `grid`.
    ///
    /// The grid is first filled with barriers, which forgets Start and End.
    /// [`MazeKind::Custom`] clears the grid to empty instead. Returns the
    /// number of empty cells afterwards.
    pub fn generate(
        &mut self,
        kind: MazeKind,
        grid: &mut Grid,
        on_step: &mut dyn FnMut(&Grid),
    ) -> usize {
        log::debug!("maze: {kind} on a {0}x{0} grid", grid.size());
        if kind != MazeKind::Custom {
            grid.mark_barrier_all();
        }
        let open = match kind {
            MazeKind::RecursiveBacktracker => self.recursive_backtracker(grid, on_step),
            MazeKind::GrowingTree => self.growing_tree(grid, on_step),
            MazeKind::BinaryTree => self.binary_tree(grid, on_step),
            MazeKind::Sidewinder => self.sidewinder(grid, on_step),
            MazeKind::Custom => {
                grid.reset_to_empty();
                on_step(grid);
                grid.len()
            }
        };
        log::debug!("maze: {kind} carved {open} cells");
        open
    }

    /// Depth-first carving with backtracking.
    ///
    /// Produces a spanning tree over the rooms: exactly one route between
    /// any two of them. Expects a barrier-filled grid.
    pub fn recursive_backtracker(
        &mut self,
        grid: &mut Grid,
        on_step: &mut dyn FnMut(&Grid),
    ) -> usize {
        let n = grid.size();
        let Some(start) = self.random_room(n - 1) else {
            return 0;
        };
        grid.carve(start);
        on_step(grid);

        // (room, shuffled directions, next direction to try)
        let mut stack = vec![(start, self.shuffled_dirs(), 0)];
        while let Some(top) = stack.last_mut() {
            let (room, dirs, next) = *top;
            if next == dirs.len() {
                stack.pop();
                continue;
            }
            top.2 += 1;

            let d = dirs[next];
            let target = room + d * 2;
            if grid.state(target) == Some(CellState::Barrier) {
                grid.carve(room + d);
                grid.carve(target);
                on_step(grid);
                let dirs = self.shuffled_dirs();
                stack.push((target, dirs, 0));
            }
        }
        grid.count(CellState::Empty)
    }

    /// Carving from a pool of active rooms, each step extending a randomly
    /// chosen one. Rooms with no uncarved neighbour leave the pool.
    ///
    /// Like the backtracker this yields a spanning tree, but with shorter,
    /// bushier corridors. Expects a barrier-filled grid.
    pub fn growing_tree(
        &mut self,
        grid: &mut Grid,
        on_step: &mut dyn FnMut(&Grid),
    ) -> usize {
        let Some(start) = self.random_room(grid.size()) else {
            return 0;
        };
        grid.carve(start);
        on_step(grid);

        let mut active = vec![start];
        while !active.is_empty() {
            let i = self.rng.random_range(0..active.len());
            let room = active[i];
            let carved = self.shuffled_dirs().into_iter().find_map(|d| {
                let target = room + d * 2;
                (grid.state(target) == Some(CellState::Barrier)).then_some((room + d, target))
            });
            match carved {
                Some((wall, target)) => {
                    grid.carve(wall);
                    grid.carve(target);
                    active.push(target);
                    on_step(grid);
                }
                None => {
                    active.swap_remove(i);
                }
            }
        }
        grid.count(CellState::Empty)
    }

    /// Row by row, each room opens either East or South at random (only
    /// one of them when the other would leave the grid).
    ///
    /// The bottom row and the right column end up as long straight runs.
    pub fn binary_tree(
        &mut self,
        grid: &mut Grid,
        on_step: &mut dyn FnMut(&Grid),
    ) -> usize {
        let n = grid.size();
        for row in (1..n).step_by(2) {
            for col in (1..n).step_by(2) {
                let room = Point::new(col, row);
                grid.carve(room);

                let mut options = Vec::with_capacity(2);
                if col + 2 < n {
                    options.push(Point::new(1, 0));
                }
                if row + 2 < n {
                    options.push(Point::new(0, 1));
                }
                if let Some(&d) = options.choose(&mut self.rng) {
                    grid.carve(room + d);
                }
                on_step(grid);
            }
        }
        grid.count(CellState::Empty)
    }

    /// Row by row, extend a run of rooms eastwards; when a run stops, open
    /// one random room of it to the north. The top row is a single run.
    pub fn sidewinder(
        &mut self,
        grid: &mut Grid,
        on_step: &mut dyn FnMut(&Grid),
    ) -> usize {
        let n = grid.size();
        for row in (1..n).step_by(2) {
            let mut run: Vec<Point> = Vec::new();
            for col in (1..n).step_by(2) {
                let room = Point::new(col, row);
                grid.carve(room);
                run.push(room);

                let carve_east = col + 2 < n && (row == 1 || self.rng.random_bool(0.5));
                if carve_east {
                    grid.carve(room.shift(1, 0));
                    grid.carve(room.shift(2, 0));
                } else if row > 1 {
                    let up = run[self.rng.random_range(0..run.len())];
                    grid.carve(up.shift(0, -1));
                    grid.carve(up.shift(0, -2));
                    run.clear();
                }
                on_step(grid);
            }
        }
        grid.count(CellState::Empty)
    }

    /// A random odd coordinate in `1..end`, used for both axes, or `None`
    /// when there is none.
    fn random_room(&mut self, end: i32) -> Option<Point> {
        let count = end / 2;
        if count <= 0 {
            return None;
        }
        let x = 1 + 2 * self.rng.random_range(0..count);
        let y = 1 + 2 * self.rng.random_range(0..count);
        Some(Point::new(x, y))
    }

    fn shuffled_dirs(&mut self) -> [Point; 4] {
        let mut dirs = CARDINALS;
        dirs.shuffle(&mut self.rng);
        dirs
    }
}
