//! TSP instance and tour parsing at the collaborator boundary.
//!
//! The onion core itself never touches tours; these parsers feed the tour
//! rendering that sits next to it. Instances arrive in the line-oriented
//! EUC_2D format (`NODE_COORD_SECTION`, one `id x y` line per node, `EOF`),
//! tours as comma-separated permutations.

use serde::{Deserialize, Serialize};

use crate::error::{OnionError, OnionResult};

/// A city position from a EUC_2D instance file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Horizontal coordinate as given in the instance file.
    pub x: f64,
    /// Vertical coordinate as given in the instance file.
    pub y: f64,
}

/// A directed edge between two node indices of a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Index of the departure node.
    pub source: usize,
    /// Index of the arrival node.
    pub target: usize,
}

/// Parse the node list of a EUC_2D TSP instance.
///
/// Reads everything between the `NODE_COORD_SECTION` marker and the `EOF`
/// marker, expecting one `id x y` line per node.
///
/// # Errors
///
/// Returns an error if either marker is missing or a coordinate fails to
/// parse; malformed input never degrades to NaN coordinates.
pub fn parse_euc2d(input: &str) -> OnionResult<Vec<Node>> {
    let (_, after_marker) = input
        .split_once("NODE_COORD_SECTION")
        .ok_or_else(|| OnionError::tsp("missing NODE_COORD_SECTION marker"))?;
    let (section, _) = after_marker
        .split_once("EOF")
        .ok_or_else(|| OnionError::tsp("missing EOF marker"))?;

    let mut nodes = Vec::new();
    for (line_no, line) in section.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let _id = fields
            .next()
            .ok_or_else(|| OnionError::tsp(format!("line {line_no}: missing node id")))?;
        let x = parse_coordinate(fields.next(), line_no, "x")?;
        let y = parse_coordinate(fields.next(), line_no, "y")?;
        nodes.push(Node { x, y });
    }

    if nodes.is_empty() {
        return Err(OnionError::tsp("instance contains no nodes"));
    }
    Ok(nodes)
}

fn parse_coordinate(field: Option<&str>, line_no: usize, axis: &str) -> OnionResult<f64> {
    let raw = field
        .ok_or_else(|| OnionError::tsp(format!("line {line_no}: missing {axis} coordinate")))?;
    raw.parse::<f64>().map_err(|_| {
        OnionError::tsp(format!(
            "line {line_no}: {axis} coordinate {raw:?} is not a number"
        ))
    })
}

/// Parse a comma-separated permutation into a closed cycle of directed
/// edges: each consecutive pair, plus a final edge back to the first
/// element. `"0,3,1,2"` yields `(0,3) (3,1) (1,2) (2,0)`.
///
/// # Errors
///
/// Returns an error on empty input or any non-numeric element.
pub fn parse_permutation(input: &str) -> OnionResult<Vec<Edge>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(OnionError::permutation("empty permutation"));
    }

    let mut permutation = Vec::new();
    for element in trimmed.split(',') {
        let element = element.trim();
        let index: usize = element.parse().map_err(|_| {
            OnionError::permutation(format!("element {element:?} is not an index"))
        })?;
        permutation.push(index);
    }

    let mut edges = Vec::with_capacity(permutation.len());
    for pair in permutation.windows(2) {
        edges.push(Edge {
            source: pair[0],
            target: pair[1],
        });
    }
    // windows(2) yields nothing for a single-element tour; the closing edge
    // below still degenerates it to a self-loop, matching the cycle contract.
    if let (Some(&last), Some(&first)) = (permutation.last(), permutation.first()) {
        edges.push(Edge {
            source: last,
            target: first,
        });
    }

    Ok(edges)
}
