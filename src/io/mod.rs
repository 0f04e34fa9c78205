//! Text input and output.
//!
//! Input is whitespace-separated: `N M`, `source destination`, then `M`
//! lines of `u v w1 w2`. Output is either `0` (no path) or the node count
//! followed by the node sequence, or a JSON object.

mod error;
mod format;
mod parse;

pub use error::ParseError;
pub use format::{format_json, format_plain};
pub use parse::parse_problem;
