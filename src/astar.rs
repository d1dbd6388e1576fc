//! A* search over an abstract graph described by the capability traits in
//! [`crate::graph`].

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

use tracing::debug;

use crate::graph::{DistanceHeuristic, NeighborSource, TraversalCost};
use crate::grid::{EuclideanHeuristic, FixedCost, GridNeighbors};
use crate::models::PathResult;

#[derive(Clone, Debug)]
struct QueueEntry<N> {
    node: N,
    f: f64,
    g: f64,
    // Monotonic insertion counter; keeps pop order deterministic among equal f
    seq: u64,
}

impl<N> PartialEq for QueueEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.g == other.g && self.seq == other.seq
    }
}
impl<N> Eq for QueueEntry<N> {}
impl<N> PartialOrd for QueueEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<N> Ord for QueueEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; invert for min-f, earliest insertion first
        other
            .f
            .partial_cmp(&self.f)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A* search engine bound to a neighbor source, a distance heuristic, and a
/// traversal cost model.
///
/// Each invocation of [`Finder::find_path`] is self-contained: all working
/// state is allocated per call and dropped on return, so an engine can be
/// reused (or shared read-only) across any number of searches.
pub struct Finder<S, H, C> {
    neighbors: S,
    heuristic: H,
    cost: C,
}

impl Finder<GridNeighbors, EuclideanHeuristic, FixedCost> {
    /// Engine over a bounded 100x100 grid with 4-directional movement, a
    /// Euclidean heuristic, and a uniform traversal cost of 1.
    pub fn new() -> Self {
        Self::with(GridNeighbors::new(100, 100), EuclideanHeuristic, FixedCost(1.0))
    }
}

impl Default for Finder<GridNeighbors, EuclideanHeuristic, FixedCost> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, H, C> Finder<S, H, C> {
    pub fn with(neighbors: S, heuristic: H, cost: C) -> Self {
        Self { neighbors, heuristic, cost }
    }

    /// Replaces the neighbor source, keeping the other capabilities.
    pub fn neighbors<S2>(self, neighbors: S2) -> Finder<S2, H, C> {
        Finder { neighbors, heuristic: self.heuristic, cost: self.cost }
    }

    /// Replaces the distance heuristic, keeping the other capabilities.
    pub fn heuristic<H2>(self, heuristic: H2) -> Finder<S, H2, C> {
        Finder { neighbors: self.neighbors, heuristic, cost: self.cost }
    }

    /// Replaces the traversal cost model, keeping the other capabilities.
    pub fn cost<C2>(self, cost: C2) -> Finder<S, H, C2> {
        Finder { neighbors: self.neighbors, heuristic: self.heuristic, cost }
    }

    /// Finds a minimum-cost path from `start` to `end`.
    ///
    /// Returns the total traversal cost and the node sequence from `start` to
    /// `end` inclusive, or [`PathResult::not_found`] when no path exists
    /// within the constraints. When `max_cost` is given, the bound is checked
    /// on each node as it leaves the frontier: a path whose accumulated cost
    /// lands exactly on the bound is still accepted, only strictly-exceeding
    /// paths are cut off.
    ///
    /// Frontier ties on the f-score are broken by insertion order (earliest
    /// discovery wins), so repeated searches are deterministic.
    pub fn find_path<N>(&self, start: N, end: N, max_cost: Option<f64>) -> PathResult<N>
    where
        N: Clone + Eq + Hash,
        S: NeighborSource<N>,
        H: DistanceHeuristic<N>,
        C: TraversalCost<N>,
    {
        let mut open = BinaryHeap::new();
        let mut in_open: HashSet<N> = HashSet::new();
        let mut closed: HashSet<N> = HashSet::new();
        let mut g_score: HashMap<N, f64> = HashMap::new();
        let mut f_score: HashMap<N, f64> = HashMap::new();
        let mut came_from: HashMap<N, N> = HashMap::new();
        let mut seq: u64 = 0;
        let mut expanded: u64 = 0;

        let f0 = self.cost.cost(&start);
        g_score.insert(start.clone(), 0.0);
        f_score.insert(start.clone(), f0);
        in_open.insert(start.clone());
        open.push(QueueEntry { node: start, f: f0, g: 0.0, seq });

        while let Some(entry) = open.pop() {
            // Entries are never removed from the heap on rescore; skip any
            // whose f no longer matches the recorded score, or whose node has
            // already left the frontier.
            if !in_open.contains(&entry.node) {
                continue;
            }
            match f_score.get(&entry.node) {
                Some(&f) if f == entry.f => {}
                _ => continue,
            }

            let current = entry.node;
            let g_current = entry.g;

            if let Some(bound) = max_cost {
                if g_current > bound {
                    debug!(expanded, bound, "max_cost_exceeded");
                    return PathResult::not_found();
                }
            }

            if current == end {
                debug!(expanded, cost = g_current, "path_found");
                return PathResult { cost: Some(g_current), path: reconstruct(&came_from, current) };
            }

            in_open.remove(&current);
            closed.insert(current.clone());
            expanded += 1;

            // Traversal cost is charged at the node being expanded, not the
            // neighbor, so the tentative score is shared by all its edges.
            let tentative = g_current + self.cost.cost(&current);
            for neighbor in self.neighbors.neighbors(&current) {
                let known = g_score.get(&neighbor).copied();
                let is_closed = closed.contains(&neighbor);
                let improves = known.map_or(false, |g| tentative < g);

                // A finalized neighbor is only revisited on a strict
                // improvement; frontier and undiscovered neighbors always
                // take the latest route found through `current`.
                if is_closed && !improves {
                    continue;
                }

                came_from.insert(neighbor.clone(), current.clone());
                g_score.insert(neighbor.clone(), tentative);
                let f = tentative + self.heuristic.estimate(&neighbor, &end);
                f_score.insert(neighbor.clone(), f);
                // A reopened node rejoins the frontier
                closed.remove(&neighbor);
                in_open.insert(neighbor.clone());
                seq += 1;
                open.push(QueueEntry { node: neighbor, f, g: tentative, seq });
            }
        }

        debug!(expanded, "no_path");
        PathResult::not_found()
    }
}

/// Walks backlinks from `end` to the root and returns the path in
/// start-to-end order. The root is the one node with no backlink.
fn reconstruct<N: Clone + Eq + Hash>(came_from: &HashMap<N, N>, end: N) -> Vec<N> {
    let mut path = Vec::new();
    let mut current = end;
    while let Some(prev) = came_from.get(&current) {
        path.push(current);
        current = prev.clone();
    }
    path.push(current);
    path.reverse();
    path
}
