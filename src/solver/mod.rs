//! Strategy selection and the top-level solve entry point.
//!
//! - [`Strategy`] — Which search answers the query
//! - [`SolverConfig`] — Strategy plus the settings each strategy reads
//! - [`solve`] — Runs a strategy on a [`PathProblem`](crate::models::PathProblem)

mod config;
mod runner;

pub use config::{SolverConfig, Strategy, UnknownStrategy};
pub use runner::{solve, Solution};
