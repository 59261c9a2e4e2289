//! Headless visualizer: build a grid, optionally carve a maze, run one search
//! and print the result as ASCII.
//!
//! ```text
//! pathviz --maze growing-tree --algorithm jps --seed 7
//! pathviz --size 12 --start 0,0 --end 11,11 --wall 5,0 --wall 5,1
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use pathviz_core::{Grid, Point};
use pathviz_demos::{Session, VisualizerConfig};
use pathviz_maze::MazeKind;
use pathviz_paths::{Algorithm, Heuristic};

/// Run one pathfinding search on a generated or hand-drawn grid.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// JSON file with default selections; flags below override it.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// astar, bi-astar, bfs, dfs, gbfs or jps.
    #[arg(short, long)]
    algorithm: Option<Algorithm>,
    /// manhattan, euclidean, diagonal or dijkstra.
    #[arg(long)]
    heuristic: Option<Heuristic>,
    /// recursive-backtracker, growing-tree, binary-tree, sidewinder or custom.
    #[arg(short, long)]
    maze: Option<MazeKind>,
    /// Side length of the square grid.
    #[arg(short, long)]
    size: Option<i32>,
    /// Seed for maze generation.
    #[arg(long)]
    seed: Option<u64>,
    /// Start cell as X,Y.
    #[arg(long, value_name = "X,Y")]
    start: Option<PointArg>,
    /// End cell as X,Y.
    #[arg(long, value_name = "X,Y")]
    end: Option<PointArg>,
    /// Barrier cell as X,Y; may be repeated.
    #[arg(short, long = "wall", value_name = "X,Y")]
    walls: Vec<PointArg>,
    /// Print every intermediate frame of the search.
    #[arg(long)]
    frames: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PointArg(Point);

impl FromStr for PointArg {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (x, y) = value
            .split_once(',')
            .ok_or_else(|| "expected format X,Y".to_string())?;
        let x = x
            .trim()
            .parse::<i32>()
            .map_err(|error| format!("invalid x: {error}"))?;
        let y = y
            .trim()
            .parse::<i32>()
            .map_err(|error| format!("invalid y: {error}"))?;
        Ok(Self(Point::new(x, y)))
    }
}

impl CliArgs {
    fn config(&self) -> Result<VisualizerConfig> {
        let mut cfg = match &self.config {
            Some(path) => VisualizerConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => VisualizerConfig::default(),
        };
        if let Some(a) = self.algorithm {
            cfg.algorithm = a;
        }
        if let Some(h) = self.heuristic {
            cfg.heuristic = h;
        }
        if let Some(m) = self.maze {
            cfg.maze = m;
        }
        if let Some(n) = self.size {
            cfg.grid_size = n;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Endpoints used when none are given: opposite corners, moved onto maze
/// rooms (odd coordinates) when a maze was carved.
fn default_endpoints(size: i32, maze: MazeKind) -> (Point, Point) {
    if maze == MazeKind::Custom {
        return (Point::new(0, 0), Point::new(size - 1, size - 1));
    }
    let far = if size % 2 == 1 { size - 2 } else { size - 1 };
    (Point::new(1, 1), Point::new(far, far))
}

/// One-line summary of the run; BFS and DFS carry no heuristic.
fn describe(cfg: &VisualizerConfig) -> String {
    let n = cfg.grid_size;
    let search = if cfg.algorithm.uses_heuristic() {
        format!("{} with {} heuristic", cfg.algorithm, cfg.heuristic)
    } else {
        cfg.algorithm.to_string()
    };
    format!("{search} on a {} {n}x{n} grid", cfg.maze)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let cfg = args.config()?;
    log::info!("{}", describe(&cfg));

    let mut session = Session::new(cfg.clone());
    if cfg.maze != MazeKind::Custom {
        let open = session.generate_maze(&mut |_| {});
        log::info!("maze carved {open} open cells");
    }

    let (start, end) = default_endpoints(cfg.grid_size, cfg.maze);
    let start = args.start.map_or(start, |p| p.0);
    let end = args.end.map_or(end, |p| p.0);
    session
        .primary_click(start)
        .with_context(|| format!("placing start at {start}"))?;
    session
        .primary_click(end)
        .with_context(|| format!("placing end at {end}"))?;
    for PointArg(p) in &args.walls {
        session
            .primary_click(*p)
            .with_context(|| format!("placing wall at {p}"))?;
    }

    let mut frame = 0usize;
    let mut show = |g: &Grid| {
        frame += 1;
        if args.frames {
            println!("-- frame {frame}\n{g}");
        }
    };
    let out = session.run(&mut show).context("search refused to run")?;
    log::debug!("{frame} frames, {} jumps", out.jumps);

    print!("{}", session.grid());
    println!("{}", session.status());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_args() {
        assert_eq!("3,4".parse(), Ok(PointArg(Point::new(3, 4))));
        assert_eq!(" 0 , 12 ".parse(), Ok(PointArg(Point::new(0, 12))));
        assert!("3x4".parse::<PointArg>().is_err());
        assert!("a,1".parse::<PointArg>().is_err());
    }

    #[test]
    fn maze_endpoints_sit_on_rooms() {
        for size in [5, 10, 33] {
            let (s, e) = default_endpoints(size, MazeKind::Sidewinder);
            assert!(s.x % 2 == 1 && e.x % 2 == 1 && e.x < size, "{size}");
        }
        assert_eq!(
            default_endpoints(9, MazeKind::Custom),
            (Point::new(0, 0), Point::new(8, 8))
        );
    }

    #[test]
    fn description_names_heuristic_only_when_used() {
        let mut cfg = VisualizerConfig {
            grid_size: 9,
            ..Default::default()
        };
        assert_eq!(
            describe(&cfg),
            "A* with Manhattan heuristic on a Custom 9x9 grid"
        );
        cfg.algorithm = Algorithm::Dfs;
        assert_eq!(describe(&cfg), "DFS on a Custom 9x9 grid");
    }

    #[test]
    fn flags_override_defaults() {
        let args = CliArgs::parse_from(["pathviz", "-a", "bfs", "--size", "9", "--seed", "3"]);
        let cfg = args.config().unwrap();
        assert_eq!(cfg.algorithm, Algorithm::Bfs);
        assert_eq!(cfg.heuristic, Heuristic::Manhattan);
        assert_eq!(cfg.grid_size, 9);
        assert_eq!(cfg.seed, Some(3));
        assert!(CliArgs::parse_from(["pathviz", "--size", "1"]).config().is_err());
        assert!(CliArgs::parse_from(["pathviz", "--size", "100000"]).config().is_err());
    }
}
