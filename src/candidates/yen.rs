//! Yen's k-shortest loopless paths.
//!
//! # Algorithm
//!
//! The first path is a plain shortest path. Each further path is found by
//! taking every prefix ("root") of the previous path, banning the edges that
//! earlier paths used to leave that root and the root's own nodes, and
//! searching a "spur" path from the root's last node to the destination.
//! All root + spur combinations go into a candidate heap; the cheapest unseen
//! one becomes the next path.
//!
//! Paths are node sequences; a banned step bans every parallel edge between
//! the two nodes.
//!
//! # Complexity
//!
//! O(k · N · (N + M) log N).
//!
//! # Reference
//!
//! Yen, J.Y. (1971). "Finding the k shortest loopless paths in a network",
//! *Management Science* 17(11), 712-716.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;

use crate::evaluation::PathEvaluator;
use crate::models::{Graph, Path, Weight};
use crate::search::{shortest_path, shortest_path_filtered};

/// Enumerates up to `k` loopless paths in nondecreasing base weight (`w1`).
///
/// Returns `(nodes, base_cost)` pairs. Stops early, returning what it has,
/// once `deadline` passes.
///
/// # Examples
///
/// ```
/// use u_primepath::models::Graph;
/// use u_primepath::candidates::k_shortest_paths;
///
/// let graph = Graph::from_edges(3, &[(0, 1, 1, 10), (1, 2, 1, 10), (0, 2, 100, 100)]).unwrap();
/// let paths = k_shortest_paths(&graph, 0, 2, 5, None);
/// assert_eq!(paths.len(), 2);
/// assert_eq!(paths[0], (vec![0, 1, 2], 2));
/// assert_eq!(paths[1], (vec![0, 2], 100));
/// ```
pub fn k_shortest_paths(
    graph: &Graph,
    source: usize,
    destination: usize,
    k: usize,
    deadline: Option<Instant>,
) -> Vec<(Vec<usize>, Weight)> {
    if k == 0 {
        return Vec::new();
    }
    let first = match shortest_path(graph, source, destination, |e| e.w1) {
        Some(first) => first,
        None => return Vec::new(),
    };

    let mut accepted = vec![first];
    let mut seen: HashSet<Vec<usize>> = HashSet::new();
    seen.insert(accepted[0].0.clone());
    let mut pending: BinaryHeap<Reverse<(Weight, Vec<usize>)>> = BinaryHeap::new();
    let mut banned_nodes = vec![false; graph.num_nodes()];

    while accepted.len() < k {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            tracing::debug!(found = accepted.len(), "yen: deadline reached");
            break;
        }

        let previous = accepted[accepted.len() - 1].0.clone();
        let mut root_cost: Weight = 0;

        for j in 0..previous.len() - 1 {
            let spur = previous[j];
            let root = &previous[..=j];

            let banned_next: Vec<usize> = accepted
                .iter()
                .filter(|(nodes, _)| nodes.len() > j + 1 && &nodes[..=j] == root)
                .map(|(nodes, _)| nodes[j + 1])
                .collect();

            for &node in &root[..j] {
                banned_nodes[node] = true;
            }

            let spur_path = shortest_path_filtered(
                graph,
                spur,
                destination,
                |e| e.w1,
                |from, e| !banned_nodes[e.to] && !(from == spur && banned_next.contains(&e.to)),
            );

            for &node in &root[..j] {
                banned_nodes[node] = false;
            }

            if let Some((spur_nodes, spur_cost)) = spur_path {
                let mut nodes = root[..j].to_vec();
                nodes.extend(spur_nodes);
                if seen.insert(nodes.clone()) {
                    pending.push(Reverse((root_cost.saturating_add(spur_cost), nodes)));
                }
            }

            root_cost = root_cost.saturating_add(step_weight(graph, spur, previous[j + 1]));
        }

        match pending.pop() {
            Some(Reverse((cost, nodes))) => accepted.push((nodes, cost)),
            None => break,
        }
    }

    accepted
}

/// Runs Yen's algorithm and returns the candidate the evaluator charges least.
///
/// Ties keep the earlier (lower base weight) candidate. Every candidate is a
/// simple path.
pub fn best_of_k_shortest(
    evaluator: &PathEvaluator<'_>,
    graph: &Graph,
    source: usize,
    destination: usize,
    k: usize,
    deadline: Option<Instant>,
) -> Option<Path> {
    let candidates = k_shortest_paths(graph, source, destination, k, deadline);
    tracing::debug!(candidates = candidates.len(), "yen: scoring candidates");

    let mut best: Option<Path> = None;
    for (nodes, _) in candidates {
        let Some(path) = evaluator.score(&nodes) else {
            continue;
        };
        if best.as_ref().map_or(true, |b| path.cost() < b.cost()) {
            best = Some(path);
        }
    }
    best
}

fn step_weight(graph: &Graph, from: usize, to: usize) -> Weight {
    graph
        .edges_between(from, to)
        .map(|e| e.w1)
        .min()
        .unwrap_or(Weight::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::PrimeRule;
    use crate::primes::PrimeTable;

    fn diamond() -> Graph {
        // 0 → {1, 2} → 3, plus a long direct edge
        Graph::from_edges(
            4,
            &[
                (0, 1, 1, 1),
                (1, 3, 1, 1),
                (0, 2, 2, 0),
                (2, 3, 2, 0),
                (0, 3, 10, 10),
            ],
        )
        .expect("valid")
    }

    #[test]
    fn test_paths_in_nondecreasing_order() {
        let paths = k_shortest_paths(&diamond(), 0, 3, 10, None);
        let costs: Vec<Weight> = paths.iter().map(|(_, c)| *c).collect();
        assert!(costs.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(paths[0], (vec![0, 1, 3], 2));
        assert_eq!(paths[1], (vec![0, 2, 3], 4));
    }

    #[test]
    fn test_paths_are_distinct_and_simple() {
        let paths = k_shortest_paths(&diamond(), 0, 3, 10, None);
        let unique: HashSet<&Vec<usize>> = paths.iter().map(|(n, _)| n).collect();
        assert_eq!(unique.len(), paths.len());
        for (nodes, _) in &paths {
            assert!(Path::new(nodes.clone(), 0).is_simple(), "{nodes:?}");
        }
    }

    #[test]
    fn test_enumerates_all_simple_paths() {
        // diamond has 0-1-3, 0-2-3, 0-3, 0-1-... (1 only links 0, 3) → 3 paths
        let paths = k_shortest_paths(&diamond(), 0, 3, 10, None);
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[2], (vec![0, 3], 10));
    }

    #[test]
    fn test_k_limits_output() {
        assert_eq!(k_shortest_paths(&diamond(), 0, 3, 1, None).len(), 1);
        assert!(k_shortest_paths(&diamond(), 0, 3, 0, None).is_empty());
    }

    #[test]
    fn test_unreachable_is_empty() {
        let g = Graph::new(2);
        assert!(k_shortest_paths(&g, 0, 1, 3, None).is_empty());
    }

    #[test]
    fn test_expired_deadline_returns_first_path_only() {
        let past = Instant::now();
        let paths = k_shortest_paths(&diamond(), 0, 3, 10, Some(past));
        assert_eq!(paths.len(), 1);
    }

    #[test]
    fn test_best_of_k_rescoring_changes_winner() {
        // By w1 0-1-3 is cheapest, but its second edge lands on prime
        // position 2: 1 + 3 × 1 = 4. 0-2-3 pays 2 + 3 × 0 = 2.
        let g = diamond();
        let primes = PrimeTable::new(4);
        let eval = PathEvaluator::new(&g, &primes, PrimeRule::default());
        let best = best_of_k_shortest(&eval, &g, 0, 3, 10, None).expect("found");
        assert_eq!(best.nodes(), &[0, 2, 3]);
        assert_eq!(best.cost(), 2);
    }
}
