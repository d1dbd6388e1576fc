//! Default graph capabilities for bounded 2D grids, plus reusable building
//! blocks for custom graphs.

use serde::{Deserialize, Serialize};

use crate::graph::{DistanceHeuristic, NeighborSource, TraversalCost};

/// Node type used by the built-in grid helpers.
pub type Coord = (i32, i32);

/// Neighbor source for a bounded rectangular grid with 4-directional
/// movement. Out-of-bounds coordinates and the node itself are excluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridNeighbors {
    pub height: i32,
    pub width: i32,
}

impl GridNeighbors {
    pub fn new(height: i32, width: i32) -> Self {
        Self { height, width }
    }

    fn in_bounds(&self, (x, y): Coord) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }
}

impl NeighborSource<Coord> for GridNeighbors {
    fn neighbors(&self, &(x, y): &Coord) -> Vec<Coord> {
        // Fixed emission order; visible through frontier tie-breaking
        let candidates = [(x, y + 1), (x, y - 1), (x + 1, y), (x - 1, y)];
        candidates
            .into_iter()
            .filter(|&c| c != (x, y) && self.in_bounds(c))
            .collect()
    }
}

/// Charges the same cost for every node, whatever the node type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixedCost(pub f64);

impl<N> TraversalCost<N> for FixedCost {
    fn cost(&self, _node: &N) -> f64 {
        self.0
    }
}

/// Straight-line (Euclidean) distance between grid coordinates.
#[derive(Clone, Copy, Debug, Default)]
pub struct EuclideanHeuristic;

impl DistanceHeuristic<Coord> for EuclideanHeuristic {
    fn estimate(&self, a: &Coord, b: &Coord) -> f64 {
        let dx = (a.0 - b.0) as f64;
        let dy = (a.1 - b.1) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Manhattan distance between grid coordinates: `|dx| + |dy|`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanHeuristic;

impl DistanceHeuristic<Coord> for ManhattanHeuristic {
    fn estimate(&self, a: &Coord, b: &Coord) -> f64 {
        ((a.0 - b.0).abs() + (a.1 - b.1).abs()) as f64
    }
}
