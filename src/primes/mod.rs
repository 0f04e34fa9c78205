//! Primality lookup for edge positions.
//!
//! - [`PrimeTable`] — Sieve of Eratosthenes, built once and shared read-only

mod sieve;

pub use sieve::PrimeTable;
