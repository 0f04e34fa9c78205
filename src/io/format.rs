//! Answer formatting.

use serde::Serialize;

use crate::models::Weight;
use crate::solver::{Solution, Strategy};

#[derive(Serialize)]
struct Report<'a> {
    found: bool,
    nodes: &'a [usize],
    cost: Option<Weight>,
    strategy: Strategy,
    fallback_used: bool,
}

/// Formats a solution as plain text.
///
/// `0` alone when no path exists; otherwise the node count on one line and
/// the space-separated nodes on the next.
///
/// # Examples
///
/// ```
/// use u_primepath::io::format_plain;
/// use u_primepath::models::Path;
/// use u_primepath::solver::{Solution, Strategy};
///
/// let sol = Solution {
///     path: Some(Path::new(vec![0, 1, 2], 31)),
///     strategy: Strategy::StateExpanded,
///     fallback_used: false,
/// };
/// assert_eq!(format_plain(&sol), "3\n0 1 2\n");
/// ```
pub fn format_plain(solution: &Solution) -> String {
    match &solution.path {
        None => "0\n".to_string(),
        Some(path) => {
            let nodes: Vec<String> = path.nodes().iter().map(|n| n.to_string()).collect();
            format!("{}\n{}\n", path.len(), nodes.join(" "))
        }
    }
}

/// Formats a solution as a single-line JSON object.
pub fn format_json(solution: &Solution) -> serde_json::Result<String> {
    let report = Report {
        found: solution.is_found(),
        nodes: solution.path.as_ref().map(|p| p.nodes()).unwrap_or_default(),
        cost: solution.cost(),
        strategy: solution.strategy,
        fallback_used: solution.fallback_used,
    };
    serde_json::to_string(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Path;

    fn not_found() -> Solution {
        Solution {
            path: None,
            strategy: Strategy::StateExpanded,
            fallback_used: false,
        }
    }

    #[test]
    fn test_plain_not_found() {
        assert_eq!(format_plain(&not_found()), "0\n");
    }

    #[test]
    fn test_plain_single_node() {
        let sol = Solution {
            path: Some(Path::trivial(4)),
            ..not_found()
        };
        assert_eq!(format_plain(&sol), "1\n4\n");
    }

    #[test]
    fn test_json_found() {
        let sol = Solution {
            path: Some(Path::new(vec![0, 2], 100)),
            strategy: Strategy::PostHoc,
            fallback_used: true,
        };
        assert_eq!(
            format_json(&sol).expect("serializable"),
            r#"{"found":true,"nodes":[0,2],"cost":100,"strategy":"post-hoc","fallback_used":true}"#
        );
    }

    #[test]
    fn test_json_not_found() {
        assert_eq!(
            format_json(&not_found()).expect("serializable"),
            r#"{"found":false,"nodes":[],"cost":null,"strategy":"state-expanded","fallback_used":false}"#
        );
    }
}
