//! Small, extensible A* pathfinding library.
//!
//! The [`Finder`] runs A* over an abstract graph described by three
//! capabilities: neighbor enumeration, a heuristic distance estimate, and a
//! per-node traversal cost. Nodes are opaque to the engine; anything that is
//! `Clone + Eq + Hash` works.
//!
//! The default engine searches a bounded 100x100 grid with 4-directional
//! movement, a Euclidean heuristic, and a uniform cost of 1 per node:
//!
//! ```
//! let finder = waypath::Finder::new();
//! let result = finder.find_path((0, 0), (1, 1), None);
//! assert_eq!(result.cost, Some(2.0));
//! assert_eq!(result.path, vec![(0, 0), (1, 0), (1, 1)]);
//! ```
//!
//! Each capability can be swapped independently, either with the provided
//! building blocks or with plain closures:
//!
//! ```
//! use waypath::{EuclideanHeuristic, Finder, FixedCost, GridNeighbors};
//!
//! let finder = Finder::with(GridNeighbors::new(10, 10), EuclideanHeuristic, FixedCost(2.0));
//! let result = finder.find_path((0, 0), (2, 2), None);
//! assert_eq!(result.cost, Some(8.0));
//! assert_eq!(result.path.len(), 5);
//!
//! // A maximum cost bound turns too-expensive searches into a not-found result.
//! let bounded = finder.find_path((0, 0), (2, 2), Some(7.0));
//! assert_eq!(bounded.cost, None);
//! assert!(bounded.path.is_empty());
//! ```

pub mod astar;
pub mod graph;
pub mod grid;
pub mod models;

pub use astar::Finder;
pub use graph::{DistanceHeuristic, NeighborSource, TraversalCost};
pub use grid::{Coord, EuclideanHeuristic, FixedCost, GridNeighbors, ManhattanHeuristic};
pub use models::PathResult;
