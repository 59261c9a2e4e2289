//! The operator-facing state of the visualizer: one grid, the current
//! selections, and the status line shown under the grid.
//!
//! A front end (window, terminal, or the headless `pathviz` binary) forwards
//! clicks and button presses to a [`Session`] and redraws the grid whenever
//! an observer callback fires.

use std::fmt;

use pathviz_core::{CellState, Grid, GridError, GridLayout, Point};
use pathviz_maze::{MazeGen, MazeKind};
use pathviz_paths::{Algorithm, Endpoint, Heuristic, SearchError, SearchOutcome};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::VisualizerConfig;

pub const INTRO: &str = "Pick pathfinding algorithm, heuristic, maze algorithm, set start/end points, and run visualization!";

/// Mouse button of a grid click.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    /// Places Start, then End, then barriers.
    Primary,
    /// Erases the cell.
    Secondary,
}

/// What the status line currently reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Intro,
    /// After a clear or reset: labels with no values.
    Idle,
    Finished(SearchOutcome),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intro => f.write_str(INTRO),
            Self::Idle => f.write_str("Nodes Visited:  Path Length: "),
            Self::Finished(out) => write!(f, "{out}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

pub struct Session {
    grid: Grid,
    config: VisualizerConfig,
    mazes: MazeGen<StdRng>,
    status: Status,
}

impl Session {
    /// A fresh session with an empty grid of `config.grid_size` cells.
    pub fn new(config: VisualizerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            grid: Grid::new(config.grid_size),
            config,
            mazes: MazeGen::new(rng),
            status: Status::Intro,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        log::debug!("algorithm: {algorithm}");
        self.config.algorithm = algorithm;
    }

    pub fn set_heuristic(&mut self, heuristic: Heuristic) {
        log::debug!("heuristic: {heuristic}");
        self.config.heuristic = heuristic;
    }

    pub fn set_maze(&mut self, maze: MazeKind) {
        log::debug!("maze: {maze}");
        self.config.maze = maze;
    }

    /// Place Start if missing, else End if missing, else a barrier.
    ///
    /// Clicking an existing endpoint does nothing.
    pub fn primary_click(&mut self, p: Point) -> Result<(), GridError> {
        if !self.grid.contains(p) {
            return Err(GridError::OutOfBounds(p));
        }
        let (start, end) = (self.grid.start(), self.grid.end());
        if start.is_none() && end != Some(p) {
            self.grid.set_start(p)
        } else if end.is_none() && start != Some(p) {
            self.grid.set_end(p)
        } else if start != Some(p) && end != Some(p) {
            self.grid.set_barrier(p)
        } else {
            Ok(())
        }
    }

    /// Reset `p` to Empty; an endpoint there is forgotten.
    pub fn secondary_click(&mut self, p: Point) -> Result<(), GridError> {
        self.grid.erase(p)
    }

    /// Route a pixel click through `layout`. Returns whether it hit a cell.
    pub fn click_pixel(
        &mut self,
        layout: &GridLayout,
        pixel: Point,
        button: Button,
    ) -> Result<bool, GridError> {
        let Some(p) = self.grid.clicked_cell(layout, pixel) else {
            return Ok(false);
        };
        match button {
            Button::Primary => self.primary_click(p)?,
            Button::Secondary => self.secondary_click(p)?,
        }
        Ok(true)
    }

    /// Run the selected maze generator. Returns the number of open cells.
    pub fn generate_maze(&mut self, on_step: &mut dyn FnMut(&Grid)) -> usize {
        let open = self
            .mazes
            .generate(self.config.maze, &mut self.grid, on_step);
        self.status = Status::Idle;
        open
    }

    /// Run the selected search between the placed endpoints.
    ///
    /// Marks left by an earlier run are wiped first.
    pub fn run(&mut self, on_step: &mut dyn FnMut(&Grid)) -> Result<SearchOutcome, SearchError> {
        let start = self
            .grid
            .start()
            .ok_or(SearchError::MissingEndpoint(Endpoint::Start))?;
        let end = self
            .grid
            .end()
            .ok_or(SearchError::MissingEndpoint(Endpoint::End))?;
        self.grid.clear_non_endpoints();

        let search = self.config.algorithm.build(self.config.heuristic);
        let out = search.find_path(&mut self.grid, start, end, on_step)?;
        self.status = Status::Finished(out);
        Ok(out)
    }

    /// Wipe search marks, keeping endpoints and barriers.
    pub fn clear_path(&mut self) {
        self.grid.clear_non_endpoints();
        self.status = Status::Idle;
    }

    /// Replace the grid with a new empty one.
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.config.grid_size);
        self.status = Status::Idle;
    }

    /// Cells currently tagged as part of the route.
    pub fn path_cells(&self) -> usize {
        self.grid.count(CellState::Path) + self.grid.count(CellState::Jump)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(size: i32) -> Session {
        Session::new(VisualizerConfig {
            grid_size: size,
            seed: Some(11),
            ..Default::default()
        })
    }

    #[test]
    fn clicks_place_start_then_end_then_barriers() {
        let mut s = session(5);
        s.primary_click(Point::new(0, 0)).unwrap();
        s.primary_click(Point::new(4, 4)).unwrap();
        s.primary_click(Point::new(2, 2)).unwrap();
        // A second click on an endpoint leaves it alone.
        s.primary_click(Point::new(0, 0)).unwrap();

        let g = s.grid();
        assert_eq!(g.start(), Some(Point::new(0, 0)));
        assert_eq!(g.end(), Some(Point::new(4, 4)));
        assert_eq!(g.state(Point::new(2, 2)), Some(CellState::Barrier));
        assert_eq!(
            s.primary_click(Point::new(5, 0)),
            Err(GridError::OutOfBounds(Point::new(5, 0)))
        );
    }

    #[test]
    fn erasing_an_endpoint_frees_the_next_click() {
        let mut s = session(5);
        s.primary_click(Point::new(0, 0)).unwrap();
        s.primary_click(Point::new(4, 4)).unwrap();
        s.secondary_click(Point::new(0, 0)).unwrap();
        assert_eq!(s.grid().start(), None);

        // The End cell cannot become Start.
        s.primary_click(Point::new(4, 4)).unwrap();
        assert_eq!(s.grid().start(), None);
        s.primary_click(Point::new(1, 3)).unwrap();
        assert_eq!(s.grid().start(), Some(Point::new(1, 3)));
    }

    #[test]
    fn pixel_clicks_use_the_layout() {
        let mut s = session(33);
        let layout = GridLayout::default();
        assert_eq!(
            s.click_pixel(&layout, Point::new(35, 35), Button::Primary),
            Ok(true)
        );
        assert_eq!(s.grid().start(), Some(Point::new(0, 0)));
        assert_eq!(
            s.click_pixel(&layout, Point::new(10, 10), Button::Primary),
            Ok(false)
        );
        assert_eq!(
            s.click_pixel(&layout, Point::new(689, 689), Button::Primary),
            Ok(true)
        );
        assert_eq!(s.grid().end(), Some(Point::new(32, 32)));
        s.click_pixel(&layout, Point::new(35, 35), Button::Secondary)
            .unwrap();
        assert_eq!(s.grid().start(), None);
    }

    #[test]
    fn run_reports_status() {
        let mut s = session(5);
        assert_eq!(s.status().to_string(), INTRO);
        s.primary_click(Point::new(0, 0)).unwrap();
        s.primary_click(Point::new(4, 4)).unwrap();

        let out = s.run(&mut |_| {}).unwrap();
        assert_eq!(out.path_length, 8);
        assert_eq!(s.path_cells(), 7);
        assert_eq!(
            s.status().to_string(),
            format!("Nodes Visited: {} Path Length: 8", out.nodes_visited)
        );

        s.clear_path();
        assert_eq!(s.status().to_string(), "Nodes Visited:  Path Length: ");
        assert_eq!(s.path_cells(), 0);
        assert_eq!(s.grid().start(), Some(Point::new(0, 0)));
    }

    #[test]
    fn rerun_is_repeatable() {
        let mut s = session(9);
        s.primary_click(Point::new(0, 4)).unwrap();
        s.primary_click(Point::new(8, 4)).unwrap();
        for y in 1..8 {
            s.primary_click(Point::new(4, y)).unwrap();
        }
        for a in Algorithm::ALL {
            s.set_algorithm(a);
            let first = s.run(&mut |_| {}).unwrap();
            let drawn = s.grid().to_string();
            let second = s.run(&mut |_| {}).unwrap();
            assert_eq!(first, second, "{a}");
            assert_eq!(s.grid().to_string(), drawn, "{a}");
        }
    }

    #[test]
    fn run_needs_both_endpoints() {
        let mut s = session(5);
        assert_eq!(
            s.run(&mut |_| {}),
            Err(SearchError::MissingEndpoint(Endpoint::Start))
        );
        s.primary_click(Point::new(1, 1)).unwrap();
        assert_eq!(
            s.run(&mut |_| {}),
            Err(SearchError::MissingEndpoint(Endpoint::End))
        );
        assert_eq!(s.status(), Status::Intro);
    }

    #[test]
    fn no_path_status() {
        let mut s = session(5);
        s.primary_click(Point::new(0, 0)).unwrap();
        s.primary_click(Point::new(4, 4)).unwrap();
        for y in 0..5 {
            s.primary_click(Point::new(2, y)).unwrap();
        }
        s.set_algorithm(Algorithm::Bfs);
        let out = s.run(&mut |_| {}).unwrap();
        assert!(!out.found());
        assert_eq!(s.status().to_string(), "No path found! Nodes Visited: 10");
    }

    #[test]
    fn maze_then_search() {
        let mut s = session(21);
        s.set_maze(MazeKind::RecursiveBacktracker);
        s.primary_click(Point::new(0, 0)).unwrap();
        let open = s.generate_maze(&mut |_| {});
        assert_eq!(open, 199);
        assert_eq!(s.grid().start(), None);

        // Rooms sit on odd coordinates and the maze is connected.
        s.primary_click(Point::new(1, 1)).unwrap();
        s.primary_click(Point::new(19, 19)).unwrap();
        s.set_algorithm(Algorithm::JumpPointSearch);
        let jps = s.run(&mut |_| {}).unwrap();
        s.set_algorithm(Algorithm::Bfs);
        let bfs = s.run(&mut |_| {}).unwrap();
        assert!(bfs.found());
        assert_eq!(jps.path_length, bfs.path_length);
    }

    #[test]
    fn reset_builds_a_new_grid() {
        let mut s = session(7);
        s.primary_click(Point::new(1, 1)).unwrap();
        s.primary_click(Point::new(5, 5)).unwrap();
        s.primary_click(Point::new(3, 3)).unwrap();
        s.reset();
        assert_eq!(s.grid(), &Grid::new(7));
        assert_eq!(s.status(), Status::Idle);
    }

    #[test]
    fn unseeded_sessions_still_carve_mazes() {
        let mut s = Session::new(VisualizerConfig {
            grid_size: 11,
            maze: MazeKind::Sidewinder,
            seed: None,
            ..Default::default()
        });
        assert_eq!(s.generate_maze(&mut |_| {}), 49);
    }

    #[test]
    fn same_seed_same_maze() {
        let mut a = session(15);
        let mut b = session(15);
        for s in [&mut a, &mut b] {
            s.set_maze(MazeKind::GrowingTree);
            s.generate_maze(&mut |_| {});
        }
        assert_eq!(a.grid(), b.grid());
    }
}
