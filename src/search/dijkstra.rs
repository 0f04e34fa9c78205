//! Position-agnostic Dijkstra.
//!
//! Ignores where an edge falls in the path and charges each edge a fixed
//! weight chosen by the caller. Used as a fast fallback, as the base search
//! for Yen's algorithm, and under perturbed weights for restarts.
//!
//! # Complexity
//!
//! O((N + M) log N).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::models::{Edge, Graph, Weight};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: Weight,
    node: usize,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds a cheapest path under a fixed per-edge weight.
///
/// Returns the node sequence and its total weight, or `None` if
/// `destination` is unreachable. Stops at the first pop of `destination`.
///
/// # Examples
///
/// ```
/// use u_primepath::models::Graph;
/// use u_primepath::search::shortest_path;
///
/// let graph = Graph::from_edges(3, &[(0, 1, 1, 10), (1, 2, 1, 10), (0, 2, 100, 100)]).unwrap();
/// let (nodes, cost) = shortest_path(&graph, 0, 2, |e| e.w1).unwrap();
/// assert_eq!(nodes, vec![0, 1, 2]);
/// assert_eq!(cost, 2);
/// ```
pub fn shortest_path<W>(
    graph: &Graph,
    source: usize,
    destination: usize,
    weight: W,
) -> Option<(Vec<usize>, Weight)>
where
    W: Fn(&Edge) -> Weight,
{
    shortest_path_filtered(graph, source, destination, weight, |_, _| true)
}

/// Like [`shortest_path`], but only traverses edges for which
/// `allow(from, edge)` returns `true`.
///
/// Yen's algorithm uses the filter to ban spur edges and root-path nodes.
pub fn shortest_path_filtered<W, A>(
    graph: &Graph,
    source: usize,
    destination: usize,
    weight: W,
    allow: A,
) -> Option<(Vec<usize>, Weight)>
where
    W: Fn(&Edge) -> Weight,
    A: Fn(usize, &Edge) -> bool,
{
    let n = graph.num_nodes();
    let mut dist: Vec<Option<Weight>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[source] = Some(0);
    heap.push(State {
        cost: 0,
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if dist[node].is_some_and(|d| cost > d) {
            continue;
        }
        if node == destination {
            break;
        }

        for edge in graph.neighbors(node) {
            if !allow(node, edge) {
                continue;
            }
            let next_cost = cost.saturating_add(weight(edge));
            if dist[edge.to].map_or(true, |d| next_cost < d) {
                dist[edge.to] = Some(next_cost);
                parent[edge.to] = Some(node);
                heap.push(State {
                    cost: next_cost,
                    node: edge.to,
                });
            }
        }
    }

    let cost = dist[destination]?;
    let mut nodes = vec![destination];
    let mut current = destination;
    while let Some(prev) = parent[current] {
        nodes.push(prev);
        current = prev;
    }
    nodes.reverse();
    Some((nodes, cost))
}
