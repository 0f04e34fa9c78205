//! Input errors.

use thiserror::Error;

/// Error while reading a problem description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended before a required value.
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof {
        /// What was being read.
        expected: &'static str,
    },
    /// A token is not a non-negative integer.
    #[error("invalid {expected}: `{token}` is not a non-negative integer")]
    InvalidInteger {
        /// The offending token.
        token: String,
        /// What was being read.
        expected: &'static str,
    },
    /// A node index is not below the node count.
    #[error("node {node} out of range for a graph with {nodes} nodes")]
    NodeOutOfRange {
        /// The offending index.
        node: usize,
        /// Declared node count.
        nodes: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = ParseError::UnexpectedEof { expected: "edge weight" };
        assert_eq!(e.to_string(), "unexpected end of input: expected edge weight");
        let e = ParseError::InvalidInteger {
            token: "-3".to_string(),
            expected: "edge weight",
        };
        assert_eq!(
            e.to_string(),
            "invalid edge weight: `-3` is not a non-negative integer"
        );
        let e = ParseError::NodeOutOfRange { node: 9, nodes: 4 };
        assert_eq!(e.to_string(), "node 9 out of range for a graph with 4 nodes");
    }
}
