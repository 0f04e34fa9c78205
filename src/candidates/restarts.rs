//! Restarted Dijkstra under perturbed weights.
//!
//! Each round runs a plain shortest path search under a surrogate weight
//! and scores the result under the real prime rule:
//!
//! 1. **λ-blend**: `(1 − λ)·w1 + λ·m·w2` for each λ on a fixed grid, where
//!    `m` is the rule's multiplier. λ = 0 is the base weight, λ = 1 assumes
//!    every position is prime.
//! 2. **Degree bias**: the blended weight of an edge into `v` is scaled by
//!    `1 + bias · deg(v) / max_deg`, steering away from hubs.
//! 3. **Jitter**: each edge weight is multiplied by a factor drawn
//!    uniformly from `[1 − jitter, 1 + jitter]`, with λ drawn from the grid.
//!
//! The grid rounds run first, then jittered rounds until the round count or
//! the deadline is reached. Results are reproducible for a given seed.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::evaluation::{PathEvaluator, PrimeRule};
use crate::models::{Edge, Graph, Path, Weight};
use crate::search::shortest_path;

/// Configuration for [`restarts`].
///
/// # Examples
///
/// ```
/// use u_primepath::candidates::RestartConfig;
///
/// let config = RestartConfig::default()
///     .with_rounds(64)
///     .with_jitter(0.2)
///     .with_seed(7);
/// assert_eq!(config.rounds, 64);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RestartConfig {
    /// Blend factors tried deterministically before any jitter.
    pub lambdas: Vec<f64>,
    /// Number of jittered rounds after the grid.
    pub rounds: usize,
    /// Half-width of the multiplicative jitter.
    pub jitter: f64,
    /// Strength of the penalty on edges into high-degree nodes.
    pub degree_bias: f64,
    /// RNG seed.
    pub seed: u64,
    /// Stop starting new rounds after this instant.
    pub deadline: Option<Instant>,
}

impl RestartConfig {
    /// Sets the number of jittered rounds.
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the λ grid.
    pub fn with_lambdas(mut self, lambdas: Vec<f64>) -> Self {
        self.lambdas = lambdas;
        self
    }

    /// Sets the jitter half-width, clamped to `[0, 1]`.
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter.clamp(0.0, 1.0);
        self
    }

    /// Sets the degree bias.
    pub fn with_degree_bias(mut self, bias: f64) -> Self {
        self.degree_bias = bias.max(0.0);
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the deadline.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            lambdas: vec![0.0, 0.25, 0.5, 0.75, 1.0],
            rounds: 32,
            jitter: 0.15,
            degree_bias: 0.0,
            seed: 42,
            deadline: None,
        }
    }
}

/// Runs the restart schedule and returns the path the evaluator charges least.
///
/// Returns `None` only if the destination is unreachable.
///
/// # Examples
///
/// ```
/// use u_primepath::models::Graph;
/// use u_primepath::primes::PrimeTable;
/// use u_primepath::evaluation::{PathEvaluator, PrimeRule};
/// use u_primepath::candidates::{restarts, RestartConfig};
///
/// let graph = Graph::from_edges(3, &[(0, 1, 1, 10), (1, 2, 1, 10), (0, 2, 100, 100)]).unwrap();
/// let primes = PrimeTable::new(3);
/// let eval = PathEvaluator::new(&graph, &primes, PrimeRule::default());
///
/// let best = restarts(&eval, &graph, 0, 2, &RestartConfig::default()).unwrap();
/// assert_eq!(best.cost(), 31);
/// ```
pub fn restarts(
    evaluator: &PathEvaluator<'_>,
    graph: &Graph,
    source: usize,
    destination: usize,
    config: &RestartConfig,
) -> Option<Path> {
    let rule = evaluator.rule();
    let max_degree = (0..graph.num_nodes())
        .map(|v| graph.degree(v))
        .max()
        .unwrap_or(0)
        .max(1);
    let bias = |edge: &Edge| {
        1.0 + config.degree_bias * graph.degree(edge.to) as f64 / max_degree as f64
    };

    let mut best: Option<Path> = None;
    let mut consider = |nodes: Option<(Vec<usize>, Weight)>| {
        let Some((nodes, _)) = nodes else {
            return;
        };
        if let Some(path) = evaluator.score(&nodes) {
            if best.as_ref().map_or(true, |b| path.cost() < b.cost()) {
                best = Some(path);
            }
        }
    };

    for &lambda in &config.lambdas {
        let found = shortest_path(graph, source, destination, |e| {
            to_weight(blend(e, lambda, &rule) * bias(e))
        });
        if found.is_none() {
            // Reachability does not depend on weights.
            return None;
        }
        consider(found);
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut factors = vec![1.0; graph.num_edges()];
    let mut rounds_run = 0;

    for _ in 0..config.rounds {
        if config.deadline.is_some_and(|d| Instant::now() >= d) {
            break;
        }
        let lambda = if config.lambdas.is_empty() {
            0.0
        } else {
            config.lambdas[rng.random_range(0..config.lambdas.len())]
        };
        for f in factors.iter_mut() {
            *f = 1.0 + rng.random_range(-config.jitter..=config.jitter);
        }
        let found = shortest_path(graph, source, destination, |e| {
            to_weight(blend(e, lambda, &rule) * bias(e) * factors[e.id])
        });
        consider(found);
        rounds_run += 1;
    }

    tracing::debug!(
        grid = config.lambdas.len(),
        rounds_run,
        cost = best.as_ref().map(|p| p.cost()),
        "restarts finished"
    );
    best
}

fn blend(edge: &Edge, lambda: f64, rule: &PrimeRule) -> f64 {
    (1.0 - lambda) * edge.w1 as f64 + lambda * rule.prime_weight(edge.w2) as f64
}

fn to_weight(value: f64) -> Weight {
    if value <= 0.0 {
        0
    } else if value >= Weight::MAX as f64 {
        Weight::MAX
    } else {
        value.round() as Weight
    }
}
