//! Prime-position cost rule.

use serde::{Deserialize, Serialize};

use crate::models::{Edge, Weight};
use crate::primes::PrimeTable;

/// Cost rule for an edge at a given position in a path.
///
/// The k-th edge of a path (k counted from 1) costs `multiplier × w2` when
/// k is prime and `w1` otherwise. The multiplier defaults to 3.
///
/// # Examples
///
/// ```
/// use u_primepath::evaluation::PrimeRule;
/// use u_primepath::primes::PrimeTable;
///
/// let primes = PrimeTable::new(10);
/// let rule = PrimeRule::default();
/// assert_eq!(rule.cost(1, 7, 10, &primes), 7);  // 1 is not prime
/// assert_eq!(rule.cost(2, 7, 10, &primes), 30); // 2 is prime
/// assert_eq!(rule.cost(4, 7, 10, &primes), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeRule {
    multiplier: Weight,
}

impl PrimeRule {
    /// Multiplier applied to `w2` on prime positions by default.
    pub const DEFAULT_MULTIPLIER: Weight = 3;

    /// Creates a rule with the default multiplier.
    pub fn new() -> Self {
        Self {
            multiplier: Self::DEFAULT_MULTIPLIER,
        }
    }

    /// Sets the multiplier applied to `w2` on prime positions.
    pub fn with_multiplier(mut self, multiplier: Weight) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Multiplier applied to `w2` on prime positions.
    pub fn multiplier(&self) -> Weight {
        self.multiplier
    }

    /// Cost of an edge with weights `(w1, w2)` used at `position`.
    pub fn cost(&self, position: usize, w1: Weight, w2: Weight, primes: &PrimeTable) -> Weight {
        if primes.is_prime(position) {
            self.prime_weight(w2)
        } else {
            w1
        }
    }

    /// Cost of `edge` used at `position`.
    pub fn edge_cost(&self, edge: &Edge, position: usize, primes: &PrimeTable) -> Weight {
        self.cost(position, edge.w1, edge.w2, primes)
    }

    /// What `w2` costs on a prime position.
    pub fn prime_weight(&self, w2: Weight) -> Weight {
        self.multiplier.saturating_mul(w2)
    }
}

impl Default for PrimeRule {
    fn default() -> Self {
        Self::new()
    }
}
