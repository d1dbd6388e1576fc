use waypath::{
    Coord, EuclideanHeuristic, Finder, FixedCost, GridNeighbors, ManhattanHeuristic, PathResult,
};

fn assert_valid_grid_path(path: &[Coord], start: Coord, end: Coord) {
    assert_eq!(path.first().copied(), Some(start));
    assert_eq!(path.last().copied(), Some(end));
    for w in path.windows(2) {
        let dx = (w[0].0 - w[1].0).abs();
        let dy = (w[0].1 - w[1].1).abs();
        assert_eq!(dx + dy, 1, "only 4-directional moves allowed");
    }
}

#[test]
fn default_engine_documented_scenario() {
    let finder = Finder::new();
    let result = finder.find_path((0, 0), (1, 1), None);
    assert_eq!(result.cost, Some(2.0));
    assert_eq!(result.path, vec![(0, 0), (1, 0), (1, 1)]);
}

#[test]
fn uniform_grid_cost_matches_step_count() {
    let finder = Finder::new();
    for end in [(4, 0), (0, 6), (3, 5), (9, 9)] {
        let result = finder.find_path((0, 0), end, None);
        let steps = (end.0 + end.1) as f64;
        assert_eq!(result.cost, Some(steps), "shortest 4-dir path to {end:?}");
        assert_eq!(result.path.len() as f64, steps + 1.0);
        assert_valid_grid_path(&result.path, (0, 0), end);
    }
}

#[test]
fn custom_grid_with_fixed_cost_two() {
    let finder = Finder::with(GridNeighbors::new(10, 10), EuclideanHeuristic, FixedCost(2.0));
    let result = finder.find_path((0, 0), (2, 2), None);
    assert_eq!(result.cost, Some(8.0));
    assert_eq!(result.path.len(), 5);
    assert_valid_grid_path(&result.path, (0, 0), (2, 2));
}

#[test]
fn max_cost_below_shortest_path_is_not_found() {
    let finder = Finder::with(GridNeighbors::new(10, 10), EuclideanHeuristic, FixedCost(2.0));
    let result = finder.find_path((0, 0), (2, 2), Some(7.0));
    assert_eq!(result, PathResult::not_found());
}

#[test]
fn max_cost_bound_is_inclusive() {
    let finder = Finder::with(GridNeighbors::new(10, 10), EuclideanHeuristic, FixedCost(2.0));
    // True shortest cost is exactly 8; the bound rejects only strict excess
    let result = finder.find_path((0, 0), (2, 2), Some(8.0));
    assert_eq!(result.cost, Some(8.0));
    assert_eq!(result.path.len(), 5);
}

#[test]
fn max_cost_on_default_grid() {
    let finder = Finder::new();
    assert_eq!(finder.find_path((0, 0), (2, 2), Some(3.0)), PathResult::not_found());
    let exact = finder.find_path((0, 0), (2, 2), Some(4.0));
    assert_eq!(exact.cost, Some(4.0));
    assert_valid_grid_path(&exact.path, (0, 0), (2, 2));
}

#[test]
fn start_equals_end_returns_trivial_path() {
    let finder = Finder::new();
    let result = finder.find_path((5, 5), (5, 5), None);
    assert_eq!(result.cost, Some(0.0));
    assert_eq!(result.path, vec![(5, 5)]);
}

#[test]
fn disconnected_graph_is_not_found() {
    let finder = Finder::new().neighbors(|_: &Coord| Vec::<Coord>::new());
    assert_eq!(finder.find_path((0, 0), (9, 9), None), PathResult::not_found());
}

#[test]
fn repeated_calls_are_idempotent() {
    let finder = Finder::with(GridNeighbors::new(20, 20), ManhattanHeuristic, FixedCost(1.0));
    let first = finder.find_path((2, 3), (14, 9), None);
    let second = finder.find_path((2, 3), (14, 9), None);
    assert!(first.is_found());
    assert_eq!(first, second);
}

#[test]
fn opaque_nodes_driven_by_closures() {
    // Diamond graph over plain ids: 0 -> {1, 2}, 1 -> 3, 2 -> 3, with node 1
    // cheaper to pass through than node 2. The heuristic reflects node 2's
    // expense so the frontier prefers the cheap branch.
    let neighbors = |n: &u32| -> Vec<u32> {
        match n {
            0 => vec![1, 2],
            1 => vec![3],
            2 => vec![3],
            _ => Vec::new(),
        }
    };
    let cost = |n: &u32| -> f64 {
        match n {
            2 => 10.0,
            _ => 1.0,
        }
    };
    let estimate = |n: &u32, _: &u32| -> f64 {
        match n {
            2 => 5.0,
            _ => 0.0,
        }
    };
    let finder = Finder::with(neighbors, estimate, cost);

    let result = finder.find_path(0, 3, None);
    assert_eq!(result.cost, Some(2.0));
    assert_eq!(result.path, vec![0, 1, 3]);

    // The expensive detour is the only route once node 1 disappears
    let pruned = |n: &u32| -> Vec<u32> {
        match n {
            0 => vec![2],
            2 => vec![3],
            _ => Vec::new(),
        }
    };
    let finder = finder.neighbors(pruned);
    let result = finder.find_path(0, 3, None);
    assert_eq!(result.cost, Some(11.0));
    assert_eq!(result.path, vec![0, 2, 3]);
    assert_eq!(finder.find_path(0, 3, Some(10.0)), PathResult::not_found());
}

// Wall at x=1 for y in 0..=1 forces routes over the top of the grid
fn open_cell(&(x, y): &Coord) -> bool {
    !(x == 1 && (y == 0 || y == 1))
}

#[test]
fn detour_around_blocked_cells() {
    use waypath::NeighborSource;

    let grid = GridNeighbors::new(4, 4);
    let neighbors =
        move |c: &Coord| -> Vec<Coord> { grid.neighbors(c).into_iter().filter(open_cell).collect() };
    let finder = Finder::new().neighbors(neighbors);
    let result = finder.find_path((0, 0), (2, 0), None);
    assert_eq!(result.cost, Some(6.0));
    assert_valid_grid_path(&result.path, (0, 0), (2, 0));
    for c in &result.path {
        assert!(open_cell(c), "path must avoid blocked cells, got {c:?}");
    }
}
