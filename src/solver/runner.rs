//! Solve entry point.

use std::time::Instant;

use serde::Serialize;

use crate::candidates::{best_of_k_shortest, restarts};
use crate::evaluation::PathEvaluator;
use crate::models::{Path, PathProblem};
use crate::primes::PrimeTable;
use crate::search::{find_path, shortest_path, SearchOutcome};

use super::{SolverConfig, Strategy};

/// The answer to a [`PathProblem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    /// The path found, or `None` if the destination is unreachable.
    pub path: Option<Path>,
    /// Strategy that produced the answer.
    pub strategy: Strategy,
    /// `true` if a budgeted search gave up and the post-hoc path was used.
    pub fallback_used: bool,
}

impl Solution {
    /// Returns `true` if a path was found.
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Cost of the path found, if any.
    pub fn cost(&self) -> Option<u64> {
        self.path.as_ref().map(Path::cost)
    }
}

/// Solves `problem` with the strategy selected in `config`.
///
/// # Examples
///
/// ```
/// use u_primepath::models::{Graph, PathProblem};
/// use u_primepath::solver::{solve, SolverConfig, Strategy};
///
/// let graph = Graph::from_edges(3, &[(0, 1, 1, 10), (1, 2, 1, 10), (0, 2, 100, 100)]).unwrap();
/// let problem = PathProblem::new(graph, 0, 2).unwrap();
///
/// let exact = solve(&problem, &SolverConfig::default());
/// assert_eq!(exact.cost(), Some(31));
///
/// let agnostic = solve(&problem, &SolverConfig::default().with_strategy(Strategy::Agnostic));
/// assert_eq!(agnostic.cost(), Some(2)); // plain w1 sum
/// ```
pub fn solve(problem: &PathProblem, config: &SolverConfig) -> Solution {
    let graph = problem.graph();
    let source = problem.source();
    let destination = problem.destination();

    let max_depth = config.search.max_depth_for(problem.num_nodes());
    let primes = PrimeTable::new(max_depth.max(problem.simple_path_bound()));
    let evaluator = PathEvaluator::new(graph, &primes, config.search.rule);
    let deadline = config.time_limit.map(|limit| Instant::now() + limit);

    tracing::info!(
        strategy = %config.strategy,
        nodes = graph.num_nodes(),
        edges = graph.num_edges(),
        source,
        destination,
        "solving"
    );

    let mut fallback_used = false;
    let path = match config.strategy {
        Strategy::Agnostic => shortest_path(graph, source, destination, |e| e.w1)
            .map(|(nodes, cost)| Path::new(nodes, cost)),
        Strategy::PostHoc => post_hoc(problem, &evaluator),
        Strategy::StateExpanded => {
            let mut search = config.search;
            if search.time_limit.is_none() {
                search.time_limit = config.time_limit;
            }
            match find_path(graph, source, destination, &primes, &search) {
                SearchOutcome::Found(path) => Some(path),
                SearchOutcome::NotFound => None,
                SearchOutcome::Exhausted { best } => {
                    let fallback = post_hoc(problem, &evaluator);
                    let (path, used) = cheaper(best, fallback);
                    tracing::info!(
                        fallback_used = used,
                        cost = path.as_ref().map(Path::cost),
                        "search budget exhausted"
                    );
                    fallback_used = used;
                    path
                }
            }
        }
        Strategy::Candidates => {
            best_of_k_shortest(&evaluator, graph, source, destination, config.k, deadline)
        }
        Strategy::Restarts => {
            let mut schedule = config.restarts.clone();
            if let Some(deadline) = deadline {
                schedule = schedule.with_deadline(deadline);
            }
            restarts(&evaluator, graph, source, destination, &schedule)
        }
    };

    tracing::info!(
        found = path.is_some(),
        cost = path.as_ref().map(Path::cost),
        hops = path.as_ref().map(Path::edge_count),
        "solved"
    );

    Solution {
        path,
        strategy: config.strategy,
        fallback_used,
    }
}

/// Shortest path by `w1`, charged under the prime rule.
fn post_hoc(problem: &PathProblem, evaluator: &PathEvaluator<'_>) -> Option<Path> {
    let (nodes, _) = shortest_path(
        problem.graph(),
        problem.source(),
        problem.destination(),
        |e| e.w1,
    )?;
    evaluator.score(&nodes)
}

/// Picks the cheaper of a partial search result and the fallback path.
///
/// The flag is `true` when the fallback wins. Ties keep the search result.
fn cheaper(best: Option<Path>, fallback: Option<Path>) -> (Option<Path>, bool) {
    match (best, fallback) {
        (Some(best), Some(fallback)) if fallback.cost() < best.cost() => (Some(fallback), true),
        (Some(best), _) => (Some(best), false),
        (None, fallback) => {
            let used = fallback.is_some();
            (fallback, used)
        }
    }
}
