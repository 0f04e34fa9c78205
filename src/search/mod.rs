//! Shortest path searches.
//!
//! - [`find_path`] — Dijkstra over `(node, position)` states, exact under the prime rule
//! - [`shortest_path`] — Plain Dijkstra under a fixed per-edge weight
//! - [`StateTable`] — Flat per-state storage used by the state-expanded search

mod config;
mod dijkstra;
mod prime_aware;
mod state_table;

pub use config::SearchConfig;
pub use dijkstra::{shortest_path, shortest_path_filtered};
pub use prime_aware::{find_path, shortest_prime_path, SearchOutcome};
pub use state_table::StateTable;
