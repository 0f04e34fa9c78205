//! Problem parser.

use std::str::{FromStr, SplitAsciiWhitespace};

use crate::models::{Graph, PathProblem, Weight};

use super::ParseError;

struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_ascii_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ParseError> {
        let token = self
            .inner
            .next()
            .ok_or(ParseError::UnexpectedEof { expected })?;
        token.parse().map_err(|_| ParseError::InvalidInteger {
            token: token.to_string(),
            expected,
        })
    }

    fn node(&mut self, expected: &'static str, nodes: usize) -> Result<usize, ParseError> {
        let node: usize = self.next(expected)?;
        if node >= nodes {
            return Err(ParseError::NodeOutOfRange { node, nodes });
        }
        Ok(node)
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}

/// Parses a problem description.
///
/// Tokens after the last edge are ignored with a warning.
///
/// # Examples
///
/// ```
/// use u_primepath::io::parse_problem;
///
/// let input = "3 3\n0 2\n0 1 1 10\n1 2 1 10\n0 2 100 100\n";
/// let problem = parse_problem(input).unwrap();
/// assert_eq!(problem.num_nodes(), 3);
/// assert_eq!(problem.graph().num_edges(), 3);
/// assert_eq!((problem.source(), problem.destination()), (0, 2));
/// ```
pub fn parse_problem(input: &str) -> Result<PathProblem, ParseError> {
    let mut tokens = Tokens::new(input);

    let nodes: usize = tokens.next("node count")?;
    let edges: usize = tokens.next("edge count")?;
    let source = tokens.node("source", nodes)?;
    let destination = tokens.node("destination", nodes)?;

    let mut graph = Graph::new(nodes);
    for _ in 0..edges {
        let u = tokens.node("edge endpoint", nodes)?;
        let v = tokens.node("edge endpoint", nodes)?;
        let w1: Weight = tokens.next("edge weight")?;
        let w2: Weight = tokens.next("edge weight")?;
        graph.add_edge(u, v, w1, w2);
    }

    let extra = tokens.remaining();
    if extra > 0 {
        tracing::warn!(extra, "ignoring tokens after the last edge");
    }

    // Endpoints were range-checked above, so construction cannot fail.
    PathProblem::new(graph, source, destination).ok_or(ParseError::NodeOutOfRange {
        node: source.max(destination),
        nodes,
    })
}
