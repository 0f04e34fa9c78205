//! Path problem instance.

use super::Graph;

/// A shortest path query: a graph together with a source and destination.
///
/// Construction validates the endpoints, so solvers can index the graph
/// with them without further checks.
///
/// # Examples
///
/// ```
/// use u_primepath::models::{Graph, PathProblem};
///
/// let graph = Graph::from_edges(3, &[(0, 1, 1, 10), (1, 2, 1, 10)]).unwrap();
/// let problem = PathProblem::new(graph, 0, 2).unwrap();
/// assert_eq!(problem.source(), 0);
/// assert_eq!(problem.destination(), 2);
/// assert_eq!(problem.num_nodes(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PathProblem {
    graph: Graph,
    source: usize,
    destination: usize,
}

impl PathProblem {
    /// Creates a problem instance.
    ///
    /// Returns `None` if `source` or `destination` is not a node of `graph`.
    pub fn new(graph: Graph, source: usize, destination: usize) -> Option<Self> {
        if !graph.contains(source) || !graph.contains(destination) {
            return None;
        }
        Some(Self {
            graph,
            source,
            destination,
        })
    }

    /// The graph being searched.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Start node.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Target node.
    pub fn destination(&self) -> usize {
        self.destination
    }

    /// Number of nodes in the graph.
    pub fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    /// Upper bound on the number of edges in any simple path.
    pub fn simple_path_bound(&self) -> usize {
        self.graph.num_nodes().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_problem() {
        let graph = Graph::from_edges(2, &[(0, 1, 1, 1)]).expect("valid");
        let problem = PathProblem::new(graph, 1, 0).expect("valid");
        assert_eq!(problem.source(), 1);
        assert_eq!(problem.destination(), 0);
        assert_eq!(problem.simple_path_bound(), 1);
    }

    #[test]
    fn test_out_of_range_endpoints() {
        let graph = Graph::new(2);
        assert!(PathProblem::new(graph.clone(), 2, 0).is_none());
        assert!(PathProblem::new(graph, 0, 5).is_none());
    }

    #[test]
    fn test_same_source_and_destination() {
        let problem = PathProblem::new(Graph::new(1), 0, 0).expect("valid");
        assert_eq!(problem.simple_path_bound(), 0);
    }
}
