//! Capability traits describing the graph under search.
//!
//! The engine never interprets node structure; everything it learns about the
//! graph flows through these three single-method interfaces. Blanket impls
//! let plain closures stand in for each of them.

/// Enumerates the nodes directly reachable from a node.
///
/// Must be deterministic for a given node; emission order only affects
/// tie-breaking between equal-score frontier nodes, not correctness.
pub trait NeighborSource<N> {
    fn neighbors(&self, node: &N) -> Vec<N>;
}

/// Heuristic estimate of the remaining cost from one node to another.
///
/// For the minimum-cost guarantee to hold the estimate must never
/// overestimate the true remaining cost (admissibility). The engine does not
/// verify this.
pub trait DistanceHeuristic<N> {
    fn estimate(&self, from: &N, to: &N) -> f64;
}

/// Cost charged for traversing a node, added once per step when moving
/// through it.
pub trait TraversalCost<N> {
    fn cost(&self, node: &N) -> f64;
}

impl<N, F> NeighborSource<N> for F
where
    F: Fn(&N) -> Vec<N>,
{
    fn neighbors(&self, node: &N) -> Vec<N> {
        self(node)
    }
}

impl<N, F> DistanceHeuristic<N> for F
where
    F: Fn(&N, &N) -> f64,
{
    fn estimate(&self, from: &N, to: &N) -> f64 {
        self(from, to)
    }
}

impl<N, F> TraversalCost<N> for F
where
    F: Fn(&N) -> f64,
{
    fn cost(&self, node: &N) -> f64 {
        self(node)
    }
}
