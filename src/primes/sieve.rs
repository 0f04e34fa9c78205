//! Sieve of Eratosthenes.
//!
//! # Algorithm
//!
//! Even numbers above 2 are cleared in one pass; each odd prime `p` then
//! clears `p², p² + 2p, ...` up to the limit.
//!
//! # Complexity
//!
//! O(L log log L) time, O(L) space, where L is the table limit.

/// Immutable primality table for `0..=limit`.
///
/// Positions beyond the limit are still answered correctly, by trial
/// division, so an undersized table costs time but never correctness.
///
/// # Examples
///
/// ```
/// use u_primepath::primes::PrimeTable;
///
/// let primes = PrimeTable::new(20);
/// assert!(!primes.is_prime(0));
/// assert!(!primes.is_prime(1));
/// assert!(primes.is_prime(2));
/// assert!(primes.is_prime(19));
/// assert!(!primes.is_prime(15));
/// assert!(primes.is_prime(23)); // beyond the table
/// ```
#[derive(Debug, Clone)]
pub struct PrimeTable {
    is_prime: Vec<bool>,
}

impl PrimeTable {
    /// Sieves all integers in `0..=limit`.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is `usize::MAX`.
    pub fn new(limit: usize) -> Self {
        assert!(limit < usize::MAX, "prime table limit {limit} overflows usize");
        let mut is_prime = vec![true; limit + 1];
        is_prime[0] = false;
        if limit >= 1 {
            is_prime[1] = false;
        }
        for n in (4..=limit).step_by(2) {
            is_prime[n] = false;
        }

        let mut p = 3;
        while p * p <= limit {
            if is_prime[p] {
                for multiple in (p * p..=limit).step_by(2 * p) {
                    is_prime[multiple] = false;
                }
            }
            p += 2;
        }

        Self { is_prime }
    }

    /// Largest value covered by the sieve.
    pub fn limit(&self) -> usize {
        self.is_prime.len() - 1
    }

    /// Returns `true` if `n` is prime.
    pub fn is_prime(&self, n: usize) -> bool {
        match self.is_prime.get(n) {
            Some(&flag) => flag,
            None => is_prime_slow(n),
        }
    }

    /// Primes up to the table limit, in increasing order.
    pub fn primes(&self) -> impl Iterator<Item = usize> + '_ {
        self.is_prime
            .iter()
            .enumerate()
            .filter_map(|(n, &flag)| flag.then_some(n))
    }
}

fn is_prime_slow(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_primes() {
        let t = PrimeTable::new(30);
        let primes: Vec<usize> = t.primes().collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_zero_and_one_never_prime() {
        for limit in 0..4 {
            let t = PrimeTable::new(limit);
            assert!(!t.is_prime(0));
            assert!(!t.is_prime(1));
        }
    }

    #[test]
    fn test_limit() {
        assert_eq!(PrimeTable::new(0).limit(), 0);
        assert_eq!(PrimeTable::new(100).limit(), 100);
    }

    #[test]
    fn test_square_of_prime_is_cleared() {
        let t = PrimeTable::new(121);
        assert!(!t.is_prime(9));
        assert!(!t.is_prime(49));
        assert!(!t.is_prime(121));
        assert!(t.is_prime(113));
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn test_unbounded_limit_panics_cleanly() {
        let _ = PrimeTable::new(usize::MAX);
    }

    #[test]
    fn test_beyond_limit_matches_sieve() {
        let small = PrimeTable::new(2);
        let large = PrimeTable::new(500);
        for n in 0..=500 {
            assert_eq!(small.is_prime(n), large.is_prime(n), "n = {n}");
        }
    }
}
