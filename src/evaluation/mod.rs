//! Position-dependent edge costs and path scoring.
//!
//! - [`PrimeRule`] — Cost of an edge given its 1-indexed position in a path
//! - [`PathEvaluator`] — Scores a node sequence and reports broken links

mod evaluator;
mod rule;

pub use evaluator::{PathEvaluator, Violation, ViolationType};
pub use rule::PrimeRule;
