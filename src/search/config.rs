//! Search configuration.

use std::time::Duration;

use crate::evaluation::PrimeRule;

/// Configuration for the state-expanded search.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_primepath::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_max_depth(50)
///     .with_state_budget(1_000_000)
///     .with_time_limit(Duration::from_millis(500));
/// assert_eq!(config.max_depth_for(10_000), 50);
/// assert_eq!(SearchConfig::default().max_depth_for(12), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Largest path length (edge count) explored. `None` means the node count.
    pub max_depth: Option<usize>,
    /// Maximum number of states expanded before giving up.
    pub state_budget: Option<usize>,
    /// Wall-clock limit for one search.
    pub time_limit: Option<Duration>,
    /// Edge cost rule.
    pub rule: PrimeRule,
}

impl SearchConfig {
    /// Sets the maximum path length.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Sets the expanded-state ceiling.
    pub fn with_state_budget(mut self, budget: usize) -> Self {
        self.state_budget = Some(budget);
        self
    }

    /// Sets the wall-clock ceiling.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Sets the edge cost rule.
    pub fn with_rule(mut self, rule: PrimeRule) -> Self {
        self.rule = rule;
        self
    }

    /// Maximum depth to use on a graph with `num_nodes` nodes.
    pub fn max_depth_for(&self, num_nodes: usize) -> usize {
        self.max_depth.unwrap_or(num_nodes)
    }

    /// Returns `true` if either budget is set.
    pub fn is_budgeted(&self) -> bool {
        self.state_budget.is_some() || self.time_limit.is_some()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            state_budget: None,
            time_limit: None,
            rule: PrimeRule::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbudgeted() {
        let config = SearchConfig::default();
        assert!(!config.is_budgeted());
        assert_eq!(config.rule, PrimeRule::default());
    }

    #[test]
    fn test_builders() {
        let config = SearchConfig::default()
            .with_state_budget(10)
            .with_rule(PrimeRule::default().with_multiplier(2));
        assert!(config.is_budgeted());
        assert_eq!(config.state_budget, Some(10));
        assert_eq!(config.rule.multiplier(), 2);
    }
}
