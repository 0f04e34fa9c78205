//! Path type.

use serde::{Deserialize, Serialize};

use super::Weight;

/// An ordered node sequence from source to destination, with its cost.
///
/// The cost is whatever the producer computed: a prime-rule cost for the
/// state-expanded search and the evaluator, a base-weight sum for the
/// position-agnostic strategy.
///
/// # Examples
///
/// ```
/// use u_primepath::models::Path;
///
/// let path = Path::new(vec![0, 1, 2], 31);
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.edge_count(), 2);
/// assert_eq!(path.source(), Some(0));
/// assert_eq!(path.destination(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    nodes: Vec<usize>,
    cost: Weight,
}

impl Path {
    /// Creates a path from its node sequence and cost.
    pub fn new(nodes: Vec<usize>, cost: Weight) -> Self {
        Self { nodes, cost }
    }

    /// A zero-length path that stays at `node`.
    pub fn trivial(node: usize) -> Self {
        Self::new(vec![node], 0)
    }

    /// Node sequence in travel order.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Total cost.
    pub fn cost(&self) -> Weight {
        self.cost
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the path has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges traversed, which is also the last position used.
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// First node.
    pub fn source(&self) -> Option<usize> {
        self.nodes.first().copied()
    }

    /// Last node.
    pub fn destination(&self) -> Option<usize> {
        self.nodes.last().copied()
    }

    /// Returns `true` if no node appears twice.
    pub fn is_simple(&self) -> bool {
        let mut seen = self.nodes.clone();
        seen.sort_unstable();
        seen.windows(2).all(|w| w[0] != w[1])
    }
}
