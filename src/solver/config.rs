//! Solver configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::candidates::RestartConfig;
use crate::search::SearchConfig;

/// How a query is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Plain Dijkstra on `w1`; the prime rule is ignored, cost included.
    Agnostic,
    /// Plain Dijkstra on `w1`, then the path is charged under the prime rule.
    PostHoc,
    /// Exact search over `(node, position)` states, with budgeted fallback.
    #[default]
    StateExpanded,
    /// Yen's k-shortest simple paths, best one under the prime rule.
    Candidates,
    /// Restarted Dijkstra under blended and jittered weights.
    Restarts,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Agnostic,
        Strategy::PostHoc,
        Strategy::StateExpanded,
        Strategy::Candidates,
        Strategy::Restarts,
    ];

    /// Command-line name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Agnostic => "agnostic",
            Strategy::PostHoc => "post-hoc",
            Strategy::StateExpanded => "state-expanded",
            Strategy::Candidates => "candidates",
            Strategy::Restarts => "restarts",
        }
    }

    /// Returns `true` if the reported cost follows the prime rule.
    pub fn is_prime_aware(&self) -> bool {
        !matches!(self, Strategy::Agnostic)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A strategy name that did not match any [`Strategy`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy `{0}` (expected agnostic, post-hoc, state-expanded, candidates or restarts)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Solver configuration.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_primepath::solver::{SolverConfig, Strategy};
///
/// let config = SolverConfig::default()
///     .with_strategy(Strategy::Candidates)
///     .with_k(200)
///     .with_time_limit(Duration::from_secs(2));
/// assert_eq!(config.strategy, Strategy::Candidates);
/// assert_eq!(config.k, 200);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Strategy to run.
    pub strategy: Strategy,
    /// Depth bound, budgets, and cost rule for the state-expanded search.
    /// The rule also drives scoring in every other prime-aware strategy.
    pub search: SearchConfig,
    /// Number of Yen candidates.
    pub k: usize,
    /// Restart schedule.
    pub restarts: RestartConfig,
    /// Overall wall-clock limit, shared by every time-aware strategy.
    pub time_limit: Option<Duration>,
}

impl SolverConfig {
    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the state-expanded search configuration.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Sets the number of Yen candidates.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Sets the restart schedule.
    pub fn with_restarts(mut self, restarts: RestartConfig) -> Self {
        self.restarts = restarts;
        self
    }

    /// Sets the overall time limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            search: SearchConfig::default(),
            k: 100,
            restarts: RestartConfig::default(),
            time_limit: None,
        }
    }
}
