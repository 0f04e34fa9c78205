//! # u-primepath
//!
//! Shortest paths on undirected multigraphs where an edge's cost depends on
//! its position in the path: the k-th edge costs `3 × w2` when k is prime and
//! `w1` otherwise.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Graph, Edge, Path, PathProblem)
//! - [`primes`] — Sieve-backed primality table
//! - [`evaluation`] — Prime-position cost rule and path scoring
//! - [`search`] — State-expanded Dijkstra (exact) and plain Dijkstra
//! - [`candidates`] — Yen's k-shortest paths and randomized restarts
//! - [`solver`] — Strategy selection and the `solve` entry point
//! - [`io`] — Text input parsing and answer formatting

pub mod candidates;
pub mod evaluation;
pub mod io;
pub mod models;
pub mod primes;
pub mod search;
pub mod solver;
