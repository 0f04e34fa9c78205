//! Path evaluator that scores node sequences under the prime rule.

use crate::models::{Graph, Path, Weight};
use crate::primes::PrimeTable;

use super::PrimeRule;

/// A type of defect in a node sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// A node index is not part of the graph.
    NodeOutOfRange {
        /// Index into the node sequence.
        index: usize,
        /// Offending node.
        node: usize,
    },
    /// Two consecutive nodes are not joined by any edge.
    MissingEdge {
        /// Position (1-indexed) of the missing edge.
        position: usize,
        /// Tail node.
        from: usize,
        /// Head node.
        to: usize,
    },
}

/// A defect found while evaluating a node sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Scores node sequences by the position-dependent edge cost rule.
///
/// At each position the cheapest parallel edge under that position's rule is
/// taken, so a path found by any strategy is charged what the best choice of
/// edges would cost.
///
/// # Examples
///
/// ```
/// use u_primepath::models::Graph;
/// use u_primepath::primes::PrimeTable;
/// use u_primepath::evaluation::{PathEvaluator, PrimeRule};
///
/// let graph = Graph::from_edges(3, &[(0, 1, 1, 10), (1, 2, 1, 10)]).unwrap();
/// let primes = PrimeTable::new(3);
/// let evaluator = PathEvaluator::new(&graph, &primes, PrimeRule::default());
///
/// let (path, violations) = evaluator.evaluate(&[0, 1, 2]);
/// assert!(violations.is_empty());
/// assert_eq!(path.cost(), 1 + 30);
/// ```
pub struct PathEvaluator<'a> {
    graph: &'a Graph,
    primes: &'a PrimeTable,
    rule: PrimeRule,
}

impl<'a> PathEvaluator<'a> {
    /// Creates a new evaluator for the given graph and primality table.
    pub fn new(graph: &'a Graph, primes: &'a PrimeTable, rule: PrimeRule) -> Self {
        Self {
            graph,
            primes,
            rule,
        }
    }

    /// The cost rule applied.
    pub fn rule(&self) -> PrimeRule {
        self.rule
    }

    /// Cheapest cost of stepping `from → to` at `position`, if any edge joins them.
    pub fn step_cost(&self, from: usize, to: usize, position: usize) -> Option<Weight> {
        self.graph
            .edges_between(from, to)
            .map(|e| self.rule.edge_cost(e, position, self.primes))
            .min()
    }

    /// Scores a node sequence, returning the path and any defects found.
    ///
    /// Missing edges contribute nothing to the cost; a sequence with
    /// violations is not a valid path and its cost is only indicative.
    pub fn evaluate(&self, nodes: &[usize]) -> (Path, Vec<Violation>) {
        let mut violations = Vec::new();

        for (index, &node) in nodes.iter().enumerate() {
            if !self.graph.contains(node) {
                violations.push(Violation::new(ViolationType::NodeOutOfRange { index, node }));
            }
        }
        if !violations.is_empty() {
            return (Path::new(nodes.to_vec(), 0), violations);
        }

        let mut total: Weight = 0;
        for (i, pair) in nodes.windows(2).enumerate() {
            let position = i + 1;
            match self.step_cost(pair[0], pair[1], position) {
                Some(cost) => total = total.saturating_add(cost),
                None => violations.push(Violation::new(ViolationType::MissingEdge {
                    position,
                    from: pair[0],
                    to: pair[1],
                })),
            }
        }

        (Path::new(nodes.to_vec(), total), violations)
    }

    /// Scores a node sequence, returning `None` if it is not a valid path.
    pub fn score(&self, nodes: &[usize]) -> Option<Path> {
        if nodes.is_empty() {
            return None;
        }
        let (path, violations) = self.evaluate(nodes);
        violations.is_empty().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_edges(3, &[(0, 1, 1, 10), (1, 2, 1, 10), (0, 2, 100, 100)]).expect("valid")
    }

    #[test]
    fn test_evaluate_direct_edge_uses_base_weight() {
        let g = triangle();
        let primes = PrimeTable::new(5);
        let eval = PathEvaluator::new(&g, &primes, PrimeRule::default());
        let (path, violations) = eval.evaluate(&[0, 2]);
        assert!(violations.is_empty());
        assert_eq!(path.cost(), 100);
    }

    #[test]
    fn test_evaluate_two_hops_hits_prime_position() {
        let g = triangle();
        let primes = PrimeTable::new(5);
        let eval = PathEvaluator::new(&g, &primes, PrimeRule::default());
        let (path, _) = eval.evaluate(&[0, 1, 2]);
        // position 1: w1 = 1, position 2 (prime): 3 × 10 = 30
        assert_eq!(path.cost(), 31);
    }

    #[test]
    fn test_single_node_costs_nothing() {
        let g = triangle();
        let primes = PrimeTable::new(5);
        let eval = PathEvaluator::new(&g, &primes, PrimeRule::default());
        let (path, violations) = eval.evaluate(&[1]);
        assert!(violations.is_empty());
        assert_eq!(path.cost(), 0);
    }

    #[test]
    fn test_missing_edge_reported() {
        let g = Graph::from_edges(3, &[(0, 1, 1, 1)]).expect("valid");
        let primes = PrimeTable::new(5);
        let eval = PathEvaluator::new(&g, &primes, PrimeRule::default());
        let (_, violations) = eval.evaluate(&[0, 1, 2]);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationType::MissingEdge {
                position: 2,
                from: 1,
                to: 2
            }
        ));
        assert!(eval.score(&[0, 1, 2]).is_none());
    }

    #[test]
    fn test_out_of_range_node_reported() {
        let g = triangle();
        let primes = PrimeTable::new(5);
        let eval = PathEvaluator::new(&g, &primes, PrimeRule::default());
        let (_, violations) = eval.evaluate(&[0, 7]);
        assert!(matches!(
            violations[0].kind,
            ViolationType::NodeOutOfRange { index: 1, node: 7 }
        ));
    }

    #[test]
    fn test_parallel_edges_chosen_per_position() {
        // Edge a is cheap on ordinary positions, edge b is cheap on prime ones.
        let g = Graph::from_edges(2, &[(0, 1, 1, 50), (0, 1, 40, 2)]).expect("valid");
        let primes = PrimeTable::new(5);
        let eval = PathEvaluator::new(&g, &primes, PrimeRule::default());
        assert_eq!(eval.step_cost(0, 1, 1), Some(1));
        assert_eq!(eval.step_cost(1, 0, 2), Some(6));
        // 0 -1-> 1 (w1 of a) -2-> 0 (3 × w2 of b) -3-> 1 (3 × w2 of b)
        let path = eval.score(&[0, 1, 0, 1]).expect("valid walk");
        assert_eq!(path.cost(), 1 + 6 + 6);
    }

    #[test]
    fn test_empty_sequence_is_not_a_path() {
        let g = triangle();
        let primes = PrimeTable::new(5);
        let eval = PathEvaluator::new(&g, &primes, PrimeRule::default());
        assert!(eval.score(&[]).is_none());
    }
}
