//! Step-generating algorithm implementations
//!
//! This module groups the four algorithm families:
//! - [`sorting`]: bubble sort and quick sort
//! - [`searching`]: linear and binary search
//! - [`graph`]: Dijkstra's algorithm and breadth-first traversal
//! - [`structures`]: stack and queue simulators
//!
//! Every algorithm copies its input before touching it and returns a fully
//! materialized trace. [`run`] dispatches an [`AlgorithmKind`] over an
//! [`AlgorithmInput`] and wraps the result in a [`FamilyTrace`].

pub mod graph;
pub mod searching;
pub mod sorting;
pub mod structures;

use crate::normalize::FamilyTrace;
use graph::{GraphEdge, GraphNode};
use std::fmt;
use structures::StructureOp;

/// Every algorithm the engine can trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    BubbleSort,
    QuickSort,
    LinearSearch,
    BinarySearch,
    Dijkstra,
    BreadthFirstSearch,
    Stack,
    Queue,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 8] = [
        AlgorithmKind::BubbleSort,
        AlgorithmKind::QuickSort,
        AlgorithmKind::LinearSearch,
        AlgorithmKind::BinarySearch,
        AlgorithmKind::Dijkstra,
        AlgorithmKind::BreadthFirstSearch,
        AlgorithmKind::Stack,
        AlgorithmKind::Queue,
    ];

    /// Stable catalog key
    pub fn id(self) -> &'static str {
        match self {
            AlgorithmKind::BubbleSort => "bubble-sort",
            AlgorithmKind::QuickSort => "quick-sort",
            AlgorithmKind::LinearSearch => "linear-search",
            AlgorithmKind::BinarySearch => "binary-search",
            AlgorithmKind::Dijkstra => "dijkstra",
            AlgorithmKind::BreadthFirstSearch => "breadth-first-search",
            AlgorithmKind::Stack => "stack",
            AlgorithmKind::Queue => "queue",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::BubbleSort => "Bubble Sort",
            AlgorithmKind::QuickSort => "Quick Sort",
            AlgorithmKind::LinearSearch => "Linear Search",
            AlgorithmKind::BinarySearch => "Binary Search",
            AlgorithmKind::Dijkstra => "Dijkstra's Algorithm",
            AlgorithmKind::BreadthFirstSearch => "Breadth-First Search",
            AlgorithmKind::Stack => "Stack",
            AlgorithmKind::Queue => "Queue",
        }
    }

    /// Resolve a catalog id, display name, or common short alias
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim().to_lowercase();
        let alias = match wanted.as_str() {
            "bubble" => Some(AlgorithmKind::BubbleSort),
            "quick" | "quicksort" => Some(AlgorithmKind::QuickSort),
            "linear" => Some(AlgorithmKind::LinearSearch),
            "binary" => Some(AlgorithmKind::BinarySearch),
            "bfs" => Some(AlgorithmKind::BreadthFirstSearch),
            _ => None,
        };
        alias.or_else(|| {
            Self::ALL
                .into_iter()
                .find(|k| k.id() == wanted || k.name().to_lowercase() == wanted)
        })
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw input for one run; each family reads only the fields it needs
#[derive(Debug, Clone, Default)]
pub struct AlgorithmInput {
    pub array: Vec<f64>,
    pub target: Option<f64>,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub start: Option<String>,
    /// Destination for Dijkstra's path reconstruction
    pub destination: Option<String>,
    pub operations: Vec<StructureOp>,
}

/// Run `kind` over `input`.
///
/// A search without a target or a graph algorithm without a start node
/// produces an empty trace.
pub fn run(kind: AlgorithmKind, input: &AlgorithmInput) -> FamilyTrace {
    tracing::debug!(algorithm = kind.id(), "generating trace");
    match kind {
        AlgorithmKind::BubbleSort => FamilyTrace::Sort(sorting::bubble_sort(&input.array)),
        AlgorithmKind::QuickSort => FamilyTrace::Sort(sorting::quick_sort(&input.array)),
        AlgorithmKind::LinearSearch => FamilyTrace::Search(
            input
                .target
                .map(|t| searching::linear_search(&input.array, t))
                .unwrap_or_default(),
        ),
        AlgorithmKind::BinarySearch => FamilyTrace::Search(
            input
                .target
                .map(|t| searching::binary_search(&input.array, t))
                .unwrap_or_default(),
        ),
        AlgorithmKind::Dijkstra => FamilyTrace::Graph(
            input
                .start
                .as_deref()
                .map(|start| {
                    graph::dijkstra(
                        &input.nodes,
                        &input.edges,
                        start,
                        input.destination.as_deref(),
                    )
                })
                .unwrap_or_default(),
        ),
        AlgorithmKind::BreadthFirstSearch => FamilyTrace::Graph(
            input
                .start
                .as_deref()
                .map(|start| graph::breadth_first_search(&input.nodes, &input.edges, start))
                .unwrap_or_default(),
        ),
        AlgorithmKind::Stack => FamilyTrace::Stack(structures::run_stack(&input.operations)),
        AlgorithmKind::Queue => FamilyTrace::Queue(structures::run_queue(&input.operations)),
    }
}

/// Format a number the way it reads in step descriptions: integral values
/// without a fractional part, infinity as `∞`.
pub fn format_number(value: f64) -> String {
    if value == f64::INFINITY {
        "∞".to_string()
    } else if value == f64::NEG_INFINITY {
        "-∞".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
