//! Prime-position-aware shortest path search.
//!
//! # Algorithm
//!
//! Edge costs depend on the edge's position in the path, so plain Dijkstra
//! over nodes is not enough. The search instead runs Dijkstra over states
//! `(node, position)`, where `position` is the number of edges walked so far.
//! Leaving `(u, p)` along edge `(u, v, w1, w2)` reaches `(v, p + 1)` at cost
//! `3 × w2` if `p + 1` is prime and `w1` otherwise.
//!
//! The destination can be reached at many positions, and a longer arrival
//! may be cheaper than a shorter one. The answer is the minimum of
//! `best[destination][p]` over all positions `p`, not the first arrival's
//! position. Destination states are recorded but not expanded; once a state
//! is popped at a cost above the best arrival nothing left in the queue can
//! improve on it.
//!
//! Nodes may repeat at different positions, so the result is a walk.
//! Costs saturate at `Weight::MAX`; an unreached state is `None`, never a
//! cost value.
//!
//! # Complexity
//!
//! O(S log S · d) time and O(S) space, where S = N × (max_depth + 1) states
//! and d is the average degree.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use crate::models::{Graph, Path, Weight};
use crate::primes::PrimeTable;

use super::{SearchConfig, StateTable};

/// How often (in popped states) the wall clock is consulted.
const CLOCK_STRIDE: usize = 256;

/// Result of a state-expanded search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A minimum-cost walk within the depth bound.
    Found(Path),
    /// The destination is unreachable within the depth bound.
    NotFound,
    /// A budget ran out before optimality was proven.
    ///
    /// `best` is the cheapest destination arrival relaxed so far, if any.
    Exhausted {
        /// Best walk seen before the budget ran out.
        best: Option<Path>,
    },
}

impl SearchOutcome {
    /// Returns the path carried by this outcome, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::Exhausted { best } => best.as_ref(),
            Self::NotFound => None,
        }
    }

    /// Consumes the outcome, returning its path, if any.
    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::Exhausted { best } => best,
            Self::NotFound => None,
        }
    }

    /// Returns `true` if the search ran to completion and found a path.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: Weight,
    position: usize,
    node: usize,
}

// Min-heap on cost; ties broken on (position, node) so pop order is fixed.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.position.cmp(&self.position))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds a minimum-cost walk from `source` to `destination` under the
/// position-dependent cost rule in `config`.
///
/// `primes` should cover at least `config.max_depth_for(n)`; larger
/// positions are still answered correctly, just more slowly.
///
/// # Panics
///
/// Panics if `source` or `destination` is not a node of `graph`.
///
/// # Examples
///
/// ```
/// use u_primepath::models::Graph;
/// use u_primepath::primes::PrimeTable;
/// use u_primepath::search::{find_path, SearchConfig, SearchOutcome};
///
/// let graph = Graph::from_edges(3, &[(0, 1, 1, 10), (1, 2, 1, 10), (0, 2, 100, 100)]).unwrap();
/// let primes = PrimeTable::new(3);
///
/// match find_path(&graph, 0, 2, &primes, &SearchConfig::default()) {
///     SearchOutcome::Found(path) => {
///         assert_eq!(path.nodes(), &[0, 1, 2]);
///         assert_eq!(path.cost(), 31);
///     }
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// ```
pub fn find_path(
    graph: &Graph,
    source: usize,
    destination: usize,
    primes: &PrimeTable,
    config: &SearchConfig,
) -> SearchOutcome {
    assert!(graph.contains(source), "source {source} out of range");
    assert!(
        graph.contains(destination),
        "destination {destination} out of range"
    );

    if source == destination {
        return SearchOutcome::Found(Path::trivial(source));
    }

    let n = graph.num_nodes();
    let max_depth = config.max_depth_for(n);
    if max_depth == 0 {
        return SearchOutcome::NotFound;
    }

    let rule = config.rule;
    let deadline = config.time_limit.map(|limit| Instant::now() + limit);

    let mut best: StateTable<Option<Weight>> = StateTable::new(n, max_depth, None);
    let mut parent: StateTable<Option<usize>> = StateTable::new(n, max_depth, None);
    let mut heap = BinaryHeap::new();

    best.set(source, 0, Some(0));
    heap.push(State {
        cost: 0,
        position: 0,
        node: source,
    });

    let mut best_arrival: Option<Weight> = None;
    let mut expanded = 0usize;
    let mut exhausted = false;

    while let Some(State {
        cost,
        position,
        node,
    }) = heap.pop()
    {
        if best.get(node, position).is_some_and(|b| cost > b) {
            continue;
        }
        if best_arrival.is_some_and(|arrival| cost > arrival) {
            break;
        }

        if node == destination {
            best_arrival = Some(best_arrival.map_or(cost, |arrival| arrival.min(cost)));
            continue;
        }

        if config.state_budget.is_some_and(|budget| expanded >= budget)
            || deadline.is_some_and(|d| expanded % CLOCK_STRIDE == 0 && Instant::now() >= d)
        {
            exhausted = true;
            break;
        }
        expanded += 1;

        let next = position + 1;
        if next > max_depth {
            continue;
        }

        for edge in graph.neighbors(node) {
            let next_cost = cost.saturating_add(rule.edge_cost(edge, next, primes));
            if best.get(edge.to, next).map_or(true, |b| next_cost < b) {
                best.set(edge.to, next, Some(next_cost));
                parent.set(edge.to, next, Some(node));
                heap.push(State {
                    cost: next_cost,
                    position: next,
                    node: edge.to,
                });
            }
        }
    }

    tracing::debug!(
        expanded,
        max_depth,
        exhausted,
        found = best_arrival.is_some(),
        "state-expanded search finished"
    );

    // Every relaxed state's parent chain runs through expanded (final)
    // states, so any reached destination cell is the exact cost of its walk.
    let best_path = best
        .argmin_position(destination, None)
        .and_then(|position| {
            let nodes = reconstruct(&parent, destination, position)?;
            Some(Path::new(nodes, best.get(destination, position)?))
        });

    match (best_arrival, exhausted) {
        (Some(_), _) => best_path.map_or(SearchOutcome::NotFound, SearchOutcome::Found),
        (None, true) => SearchOutcome::Exhausted { best: best_path },
        (None, false) => SearchOutcome::NotFound,
    }
}

/// Convenience wrapper: default cost rule, no budget, explicit depth bound.
///
/// Returns `None` when `destination` is unreachable within `max_depth` edges.
///
/// # Examples
///
/// ```
/// use u_primepath::models::Graph;
/// use u_primepath::search::shortest_prime_path;
///
/// let graph = Graph::from_edges(2, &[]).unwrap();
/// assert!(shortest_prime_path(&graph, 0, 1, 2).is_none());
/// ```
pub fn shortest_prime_path(
    graph: &Graph,
    source: usize,
    destination: usize,
    max_depth: usize,
) -> Option<Path> {
    let primes = PrimeTable::new(max_depth);
    let config = SearchConfig::default().with_max_depth(max_depth);
    find_path(graph, source, destination, &primes, &config).into_path()
}

/// Follows parent links from `(destination, position)` back to position 0.
fn reconstruct(
    parent: &StateTable<Option<usize>>,
    destination: usize,
    position: usize,
) -> Option<Vec<usize>> {
    let mut nodes = Vec::with_capacity(position + 1);
    let mut node = destination;
    nodes.push(node);
    for p in (1..=position).rev() {
        node = parent.get(node, p)?;
        nodes.push(node);
    }
    nodes.reverse();
    Some(nodes)
}
