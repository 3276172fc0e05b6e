//! Parsing of user-supplied algorithm input
//!
//! - sequences: `"5,2,8,1"` or `"5 2 8 1"`
//! - structure scripts: `"push 5, pop, peek"` (queue spellings
//!   `enqueue` / `dequeue` / `front` are accepted too)
//! - graphs: a JSON document with `nodes`, `edges`, and an optional `start`

use crate::algorithms::graph::{GraphEdge, GraphNode};
use crate::algorithms::structures::StructureOp;
use crate::errors::{AlgoError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_ARRAY: [f64; 9] = [5.0, 2.0, 8.0, 1.0, 9.0, 3.0, 7.0, 4.0, 6.0];

pub const DEFAULT_SCRIPT: &str = "push 5, push 3, push 8, peek, pop, pop, pop, pop";

/// Graph document as read from disk
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphInput {
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
    #[serde(default)]
    pub start: Option<String>,
}

fn parse_number(token: &str) -> Result<f64> {
    token.parse::<f64>().map_err(|_| AlgoError::InvalidNumber {
        token: token.to_string(),
    })
}

/// Parse a comma- or whitespace-separated list of numbers
pub fn parse_sequence(text: &str) -> Result<Vec<f64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(parse_number)
        .collect()
}

/// Parse a comma-separated structure script
pub fn parse_operations(text: &str) -> Result<Vec<StructureOp>> {
    text.split([',', ';'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|entry| {
            let mut words = entry.split_whitespace();
            let verb = words.next().unwrap_or_default().to_lowercase();
            let arg = words.next();
            let invalid = || AlgoError::InvalidOperation {
                token: entry.to_string(),
            };
            if words.next().is_some() {
                return Err(invalid());
            }
            match (verb.as_str(), arg) {
                ("push" | "enqueue", Some(value)) => Ok(StructureOp::Insert(parse_number(value)?)),
                ("pop" | "dequeue", None) => Ok(StructureOp::Remove),
                ("peek" | "front", None) => Ok(StructureOp::Inspect),
                _ => Err(invalid()),
            }
        })
        .collect()
}

pub fn parse_graph(json: &str) -> Result<GraphInput> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_graph(path: &Path) -> Result<GraphInput> {
    let json = fs::read_to_string(path).map_err(|source| AlgoError::GraphFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_graph(&json)
}

/// Six-node weighted graph used when no graph file is given
pub fn demo_graph() -> GraphInput {
    let nodes = vec![
        GraphNode::new("A", 0.0, 1.0),
        GraphNode::new("B", 1.0, 2.0),
        GraphNode::new("C", 1.0, 0.0),
        GraphNode::new("D", 2.0, 2.0),
        GraphNode::new("E", 2.0, 0.0),
        GraphNode::new("F", 3.0, 1.0),
    ];
    let edges = vec![
        GraphEdge::new("A", "B", 4.0),
        GraphEdge::new("A", "C", 2.0),
        GraphEdge::new("C", "B", 1.0),
        GraphEdge::new("B", "D", 5.0),
        GraphEdge::new("C", "E", 8.0),
        GraphEdge::new("D", "E", 2.0),
        GraphEdge::new("D", "F", 6.0),
        GraphEdge::new("E", "F", 2.0),
    ];
    GraphInput {
        nodes,
        edges,
        start: Some("A".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sequence() {
        assert_eq!(
            parse_sequence("5, 2,8 1").unwrap(),
            vec![5.0, 2.0, 8.0, 1.0]
        );
        assert_eq!(parse_sequence("").unwrap(), Vec::<f64>::new());
        assert_eq!(parse_sequence("-1.5").unwrap(), vec![-1.5]);
    }

    #[test]
    fn test_parse_sequence_rejects_garbage() {
        match parse_sequence("1, two, 3") {
            Err(AlgoError::InvalidNumber { token }) => assert_eq!(token, "two"),
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_operations() {
        let ops = parse_operations("push 5, enqueue 2; pop, Dequeue, peek, front").unwrap();
        assert_eq!(
            ops,
            vec![
                StructureOp::Insert(5.0),
                StructureOp::Insert(2.0),
                StructureOp::Remove,
                StructureOp::Remove,
                StructureOp::Inspect,
                StructureOp::Inspect,
            ]
        );
    }

    #[test]
    fn test_parse_operations_rejects_bad_entries() {
        assert!(matches!(
            parse_operations("push"),
            Err(AlgoError::InvalidOperation { .. })
        ));
        assert!(matches!(
            parse_operations("pop 3"),
            Err(AlgoError::InvalidOperation { .. })
        ));
        assert!(matches!(
            parse_operations("push x"),
            Err(AlgoError::InvalidNumber { .. })
        ));
        assert!(parse_operations(DEFAULT_SCRIPT).is_ok());
    }

    #[test]
    fn test_parse_graph() {
        let json = r#"{
            "nodes": [{"id": "A", "x": 0, "y": 0}, {"id": "B", "x": 1, "y": 0}],
            "edges": [{"from": "A", "to": "B", "weight": 3}],
            "start": "A"
        }"#;
        let graph = parse_graph(json).unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert!(graph.nodes[0].distance.is_infinite());
        assert_eq!(graph.edges[0].weight, 3.0);
        assert_eq!(graph.start.as_deref(), Some("A"));
    }

    #[test]
    fn test_parse_graph_malformed() {
        assert!(matches!(
            parse_graph("{\"nodes\": 3}"),
            Err(AlgoError::GraphFormat(_))
        ));
    }

    #[test]
    fn test_load_graph_missing_file() {
        let err = load_graph(Path::new("/nonexistent/graph.json")).unwrap_err();
        assert!(matches!(err, AlgoError::GraphFile { .. }));
    }
}
