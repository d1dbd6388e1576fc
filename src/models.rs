use serde::{Deserialize, Serialize};

/// Outcome of a single `find_path` invocation.
///
/// A found path carries its total traversal cost and the node sequence from
/// start to end inclusive. "No path exists" and "path exceeds the cost bound"
/// are deliberately folded into the same shape: `cost` is `None` and `path`
/// is empty, with nothing to tell the two apart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathResult<N> {
    pub cost: Option<f64>,
    pub path: Vec<N>,
}

impl<N> PathResult<N> {
    pub fn not_found() -> Self {
        Self { cost: None, path: Vec::new() }
    }

    pub fn is_found(&self) -> bool {
        self.cost.is_some()
    }
}
