//! Cross-algorithm properties checked on seeded random grids.

use pathviz_core::{CellState, Grid, Point};
use pathviz_paths::{
    AStar, Algorithm, Bfs, BidirectionalAStar, Dfs, GreedyBestFirst, Heuristic, JumpPointSearch,
    PathfindingAlgorithm, SearchOutcome,
};
use rand::prelude::*;
use rand::rngs::StdRng;

/// A grid with roughly `density` of its cells walled and two distinct open
/// endpoints.
fn random_grid(rng: &mut StdRng, size: i32, density: f64) -> (Grid, Point, Point) {
    loop {
        let mut g = Grid::new(size);
        for p in g.bounds() {
            if rng.random_bool(density) {
                g.set_barrier(p).unwrap();
            }
        }
        let open: Vec<Point> = g.bounds().iter().filter(|&p| g.is_walkable(p)).collect();
        if open.len() < 2 {
            continue;
        }
        let s = open[rng.random_range(0..open.len())];
        let e = open[rng.random_range(0..open.len())];
        if s == e {
            continue;
        }
        g.set_start(s).unwrap();
        g.set_end(e).unwrap();
        return (g, s, e);
    }
}

/// Shortest distances from `from` by repeated relaxation until nothing
/// changes. Slow, but shares no code with the searches.
fn brute_force_distances(g: &Grid, from: Point) -> Vec<Option<usize>> {
    let mut dist: Vec<Option<usize>> = vec![None; g.len()];
    dist[g.idx(from).unwrap()] = Some(0);
    let mut changed = true;
    while changed {
        changed = false;
        for p in g.bounds() {
            if !g.is_walkable(p) {
                continue;
            }
            let best = p
                .neighbors_4()
                .into_iter()
                .filter_map(|n| g.idx(n).and_then(|i| dist[i]))
                .min()
                .map(|d| d + 1);
            let i = g.idx(p).unwrap();
            if let Some(b) = best {
                if dist[i].is_none_or(|d| b < d) {
                    dist[i] = Some(b);
                    changed = true;
                }
            }
        }
    }
    dist
}

fn run(alg: &dyn PathfindingAlgorithm, g: &Grid, s: Point, e: Point) -> (SearchOutcome, Grid) {
    let mut g = g.clone();
    let out = alg.find_path(&mut g, s, e, &mut |_| {}).unwrap();
    (out, g)
}

#[test]
fn five_by_five_open_grid() {
    let mut g = Grid::new(5);
    let (s, e) = (Point::new(0, 0), Point::new(4, 4));
    g.set_start(s).unwrap();
    g.set_end(e).unwrap();

    assert_eq!(run(&Bfs, &g, s, e).0.path_length, 8);
    assert_eq!(run(&AStar::default(), &g, s, e).0.path_length, 8);
    assert!(run(&GreedyBestFirst::default(), &g, s, e).0.path_length >= 8);
}

#[test]
fn bfs_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..60 {
        let (g, s, e) = random_grid(&mut rng, 5, 0.3);
        let want = brute_force_distances(&g, s)[g.idx(e).unwrap()];
        let (out, after) = run(&Bfs, &g, s, e);
        assert_eq!(out.path_length, want.unwrap_or(0), "\n{g}");
        if want.is_some() {
            assert_eq!(after.count(CellState::Path), out.path_length - 1);
        }
    }
}

#[test]
fn astar_matches_bfs_for_every_heuristic() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..30 {
        let (g, s, e) = random_grid(&mut rng, 12, 0.3);
        let bfs = run(&Bfs, &g, s, e).0;
        for h in Heuristic::ALL {
            let astar = run(&AStar::new(h), &g, s, e).0;
            assert_eq!(astar.path_length, bfs.path_length, "{h}\n{g}");
        }
    }
}

#[test]
fn jps_matches_astar() {
    let mut rng = StdRng::seed_from_u64(2024);
    for round in 0..40 {
        let size = 9 + round % 8;
        let (g, s, e) = random_grid(&mut rng, size, 0.25);
        let astar = run(&AStar::default(), &g, s, e).0;
        for h in Heuristic::ALL {
            let (jps, after) = run(&JumpPointSearch::new(h), &g, s, e);
            assert_eq!(jps.path_length, astar.path_length, "{h}\n{g}");
            if jps.found() {
                let tagged = after.count(CellState::Path) + after.count(CellState::Jump);
                assert_eq!(tagged, jps.path_length - 1);
                assert!(jps.jumps >= 1);
            }
        }
    }
}

#[test]
fn jps_on_empty_grids() {
    for size in [2, 5, 10, 33] {
        let mut g = Grid::new(size);
        let (s, e) = (Point::new(0, size - 1), Point::new(size - 1, 0));
        g.set_start(s).unwrap();
        g.set_end(e).unwrap();
        let out = run(&JumpPointSearch::default(), &g, s, e).0;
        assert_eq!(out.path_length, 2 * (size as usize - 1));
    }
}

#[test]
fn greedy_is_never_shorter_than_bfs() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..30 {
        let (g, s, e) = random_grid(&mut rng, 10, 0.3);
        let bfs = run(&Bfs, &g, s, e).0;
        let gbfs = run(&GreedyBestFirst::default(), &g, s, e).0;
        assert_eq!(gbfs.found(), bfs.found());
        assert!(gbfs.path_length >= bfs.path_length);
    }
}

#[test]
fn separated_endpoints_terminate_without_a_path() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..10 {
        let mut g = Grid::new(9);
        for y in 0..9 {
            g.set_barrier(Point::new(4, y)).unwrap();
        }
        for p in g.bounds() {
            if p.x != 4 && p != Point::new(0, 0) && rng.random_bool(0.2) {
                g.set_barrier(p).unwrap();
            }
        }
        let (s, e) = (Point::new(0, 0), Point::new(8, 8));
        g.set_start(s).unwrap();
        g.set_end(e).unwrap();

        let reachable = brute_force_distances(&g, s)
            .iter()
            .filter(|d| d.is_some())
            .count();

        let exhaustive: Vec<Box<dyn PathfindingAlgorithm>> = vec![
            Box::new(Bfs),
            Box::new(Dfs),
            Box::new(AStar::new(Heuristic::Manhattan)),
            Box::new(AStar::new(Heuristic::Euclidean)),
            Box::new(AStar::new(Heuristic::Diagonal)),
            Box::new(AStar::new(Heuristic::Dijkstra)),
            Box::new(GreedyBestFirst::default()),
        ];
        for alg in &exhaustive {
            let (out, after) = run(alg.as_ref(), &g, s, e);
            assert!(!out.found(), "{}", alg.name());
            assert_eq!(out.nodes_visited, reachable, "{}\n{g}", alg.name());
            assert_eq!(after.count(CellState::Path), 0);
        }

        let others: [&dyn PathfindingAlgorithm; 2] =
            [&BidirectionalAStar::default(), &JumpPointSearch::default()];
        for alg in others {
            let out = run(alg, &g, s, e).0;
            assert!(!out.found(), "{}", alg.name());
        }
    }
}

#[test]
fn runs_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..5 {
        let (g, s, e) = random_grid(&mut rng, 15, 0.25);
        for a in Algorithm::ALL {
            for h in Heuristic::ALL {
                let alg = a.build(h);
                let (first, g1) = run(alg.as_ref(), &g, s, e);
                let (second, g2) = run(alg.as_ref(), &g, s, e);
                assert_eq!(first, second, "{a}/{h}");
                assert_eq!(g1.to_string(), g2.to_string(), "{a}/{h}");
            }
        }
    }
}

#[test]
fn bidirectional_beats_astar_in_a_corridor() {
    let mut g = Grid::new(10);
    for p in g.bounds() {
        if p.y != 0 {
            g.set_barrier(p).unwrap();
        }
    }
    let (s, e) = (Point::new(0, 0), Point::new(9, 0));
    g.set_start(s).unwrap();
    g.set_end(e).unwrap();

    let one = run(&AStar::default(), &g, s, e).0;
    let bi = run(&BidirectionalAStar::default(), &g, s, e).0;
    assert_eq!(one.path_length, 9);
    assert_eq!(bi.path_length, 9);
    assert!(bi.nodes_visited < one.nodes_visited);
}

#[test]
fn step_observer_sees_intermediate_states() {
    let mut g = Grid::new(6);
    let (s, e) = (Point::new(0, 0), Point::new(5, 5));
    g.set_start(s).unwrap();
    g.set_end(e).unwrap();
    for a in Algorithm::ALL {
        let mut frames = Vec::new();
        let mut grid = g.clone();
        a.build(Heuristic::default())
            .find_path(&mut grid, s, e, &mut |g: &Grid| {
                frames.push(g.count(CellState::Path))
            })
            .unwrap();
        assert!(!frames.is_empty(), "{a}");
        // Path tags only ever accumulate while the route is traced.
        assert!(frames.windows(2).all(|w| w[0] <= w[1]), "{a}");
    }
}
