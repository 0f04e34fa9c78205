//! Candidate-path heuristics scored under the prime rule.
//!
//! These strategies never search the `(node, position)` state space. They
//! generate ordinary shortest paths and keep whichever one the prime rule
//! charges least for.
//!
//! - [`k_shortest_paths`] — Yen's loopless k-shortest paths (1971) by base weight
//! - [`best_of_k_shortest`] — Yen candidates re-scored by [`PathEvaluator`](crate::evaluation::PathEvaluator)
//! - [`restarts`] — Dijkstra under λ-blended, degree-biased, and jittered weights

mod restarts;
mod yen;

pub use restarts::{restarts, RestartConfig};
pub use yen::{best_of_k_shortest, k_shortest_paths};
