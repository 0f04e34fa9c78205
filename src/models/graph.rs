//! Undirected multigraph with two weights per edge.

/// Edge weight and path cost type.
pub type Weight = u64;

/// One direction of an undirected edge, as stored in an adjacency list.
///
/// Both directions of the same undirected edge share an `id`, which is the
/// insertion index of the edge. Parallel edges get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Insertion index of the undirected edge.
    pub id: usize,
    /// Node at the far end of this edge.
    pub to: usize,
    /// Base weight, used on non-prime positions.
    pub w1: Weight,
    /// Alternate weight, scaled and used on prime positions.
    pub w2: Weight,
}

/// An undirected multigraph over nodes `0..n`.
///
/// Parallel edges between the same pair of nodes are kept as distinct
/// edges. A self-loop is stored once in its node's adjacency list.
///
/// The graph is built once and read-only afterwards; searches borrow it.
///
/// # Examples
///
/// ```
/// use u_primepath::models::Graph;
///
/// let mut g = Graph::new(3);
/// g.add_edge(0, 1, 1, 10);
/// g.add_edge(1, 2, 1, 10);
/// g.add_edge(0, 1, 5, 2); // parallel edge, kept separately
/// assert_eq!(g.num_nodes(), 3);
/// assert_eq!(g.num_edges(), 3);
/// assert_eq!(g.degree(0), 2);
/// assert_eq!(g.edges_between(0, 1).count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    num_edges: usize,
}

impl Graph {
    /// Creates a graph with `n` nodes and no edges.
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
            num_edges: 0,
        }
    }

    /// Builds a graph from `(u, v, w1, w2)` tuples.
    ///
    /// Returns `None` if any endpoint is out of range.
    pub fn from_edges(n: usize, edges: &[(usize, usize, Weight, Weight)]) -> Option<Self> {
        let mut g = Self::new(n);
        for &(u, v, w1, w2) in edges {
            if u >= n || v >= n {
                return None;
            }
            g.add_edge(u, v, w1, w2);
        }
        Some(g)
    }

    /// Adds an undirected edge and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is out of range.
    pub fn add_edge(&mut self, u: usize, v: usize, w1: Weight, w2: Weight) -> usize {
        let id = self.num_edges;
        self.adjacency[u].push(Edge { id, to: v, w1, w2 });
        if u != v {
            self.adjacency[v].push(Edge { id, to: u, w1, w2 });
        }
        self.num_edges += 1;
        id
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges (parallel edges counted separately).
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns `true` if `node` is a valid index.
    pub fn contains(&self, node: usize) -> bool {
        node < self.adjacency.len()
    }

    /// Edges incident to `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn neighbors(&self, node: usize) -> &[Edge] {
        &self.adjacency[node]
    }

    /// Number of edge endpoints at `node`.
    pub fn degree(&self, node: usize) -> usize {
        self.adjacency[node].len()
    }

    /// All edges joining `from` to `to`, including parallel ones.
    pub fn edges_between(&self, from: usize, to: usize) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency[from].iter().filter(move |e| e.to == to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_is_empty() {
        let g = Graph::new(4);
        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.num_edges(), 0);
        assert!(g.neighbors(2).is_empty());
    }

    #[test]
    fn test_add_edge_is_undirected() {
        let mut g = Graph::new(2);
        let id = g.add_edge(0, 1, 3, 4);
        assert_eq!(id, 0);
        assert_eq!(g.neighbors(0), &[Edge { id: 0, to: 1, w1: 3, w2: 4 }]);
        assert_eq!(g.neighbors(1), &[Edge { id: 0, to: 0, w1: 3, w2: 4 }]);
    }

    #[test]
    fn test_parallel_edges_not_merged() {
        let mut g = Graph::new(2);
        g.add_edge(0, 1, 3, 4);
        g.add_edge(0, 1, 1, 9);
        assert_eq!(g.num_edges(), 2);
        let ids: Vec<usize> = g.edges_between(1, 0).map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_self_loop_stored_once() {
        let mut g = Graph::new(1);
        g.add_edge(0, 0, 1, 1);
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn test_from_edges_rejects_out_of_range() {
        assert!(Graph::from_edges(2, &[(0, 2, 1, 1)]).is_none());
        let g = Graph::from_edges(3, &[(0, 1, 1, 1), (1, 2, 2, 2)]).expect("valid");
        assert_eq!(g.num_edges(), 2);
        assert!(g.contains(2));
        assert!(!g.contains(3));
    }
}
