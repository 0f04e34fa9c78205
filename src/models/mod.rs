//! Domain model types for prime-position shortest path problems.
//!
//! Provides the core abstractions: an undirected multigraph whose edges carry
//! two weights, paths as ordered node sequences with their cost, and a
//! problem type that ties a graph to a source/destination query.

mod graph;
mod path;
mod problem;

pub use graph::{Edge, Graph, Weight};
pub use path::Path;
pub use problem::PathProblem;
