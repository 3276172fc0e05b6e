//! Dijkstra's shortest paths and breadth-first traversal
//!
//! Graphs are directed: an edge `(from, to, weight)` is only followed from
//! `from`. Nodes are identified by string ids and predecessors are recorded
//! by id, never by reference.
//!
//! Edges naming an unknown node are ignored. When a node id appears more
//! than once, the first occurrence wins.
//!
//! Negative weights are accepted without complaint; Dijkstra's distances are
//! then not guaranteed to be minimal.

use super::format_number;
use crate::trace::{StepSnapshot, Trace, TraceBuilder};
use indexmap::IndexSet;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::mem::size_of;

pub type NodeId = String;

/// Edge identity, rendered as `"from-to"`
pub type EdgeId = String;

fn unreached() -> f64 {
    f64::INFINITY
}

/// A graph vertex with its layout position and search state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    /// Best known distance from the start; infinite until reached
    #[serde(default = "unreached")]
    pub distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<NodeId>,
}

impl GraphNode {
    pub fn new(id: impl Into<NodeId>, x: f64, y: f64) -> Self {
        GraphNode {
            id: id.into(),
            x,
            y,
            distance: f64::INFINITY,
            previous: None,
        }
    }
}

/// A directed, weighted edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

impl GraphEdge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: f64) -> Self {
        GraphEdge {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    pub fn id(&self) -> EdgeId {
        format!("{}-{}", self.from, self.to)
    }
}

/// One recorded state of a graph run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStep {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_node: Option<NodeId>,
    pub visited_nodes: Vec<NodeId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exploring_edges: Vec<EdgeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortest_path: Option<Vec<NodeId>>,
    pub description: String,
}

impl GraphStep {
    /// Look up a node in this step's snapshot
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

impl StepSnapshot for GraphStep {
    fn description(&self) -> &str {
        &self.description
    }

    fn estimated_size(&self) -> usize {
        let nodes = self.nodes.len() * (size_of::<GraphNode>() + 8);
        let edges = self.edges.len() * (size_of::<GraphEdge>() + 8);
        let ids = self.visited_nodes.len()
            + self.exploring_edges.len()
            + self.shortest_path.as_ref().map_or(0, Vec::len);
        nodes + edges + ids * size_of::<NodeId>() + self.description.len()
    }
}

/// Working copy of the graph plus the step recorder
struct GraphRun<'a> {
    nodes: Vec<GraphNode>,
    index: FxHashMap<NodeId, usize>,
    edges: &'a [GraphEdge],
    visited: Vec<NodeId>,
    steps: TraceBuilder<GraphStep>,
}

impl<'a> GraphRun<'a> {
    fn new(nodes: &[GraphNode], edges: &'a [GraphEdge]) -> Self {
        let mut working = Vec::with_capacity(nodes.len());
        let mut index = FxHashMap::default();
        for node in nodes {
            if !index.contains_key(&node.id) {
                index.insert(node.id.clone(), working.len());
                working.push(node.clone());
            }
        }
        GraphRun {
            nodes: working,
            index,
            edges,
            visited: Vec::new(),
            steps: TraceBuilder::new(),
        }
    }

    fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    fn node_mut(&mut self, id: &str) -> Option<&mut GraphNode> {
        let idx = *self.index.get(id)?;
        self.nodes.get_mut(idx)
    }

    fn distance(&self, id: &str) -> f64 {
        self.index
            .get(id)
            .map_or(f64::INFINITY, |&idx| self.nodes[idx].distance)
    }

    /// Outgoing edges of `id` whose target exists, in edge-list order
    fn outgoing(&self, id: &str) -> Vec<&'a GraphEdge> {
        self.edges
            .iter()
            .filter(|e| e.from == id && self.contains(&e.to))
            .collect()
    }

    fn snapshot(
        &self,
        current: Option<&str>,
        exploring: Vec<EdgeId>,
        description: String,
    ) -> GraphStep {
        GraphStep {
            nodes: self.nodes.clone(),
            edges: self.edges.to_vec(),
            current_node: current.map(str::to_string),
            visited_nodes: self.visited.clone(),
            exploring_edges: exploring,
            shortest_path: None,
            description,
        }
    }

    fn record(&mut self, current: Option<&str>, exploring: Vec<EdgeId>, description: String) {
        let step = self.snapshot(current, exploring, description);
        self.steps.push(step);
    }
}

/// Dijkstra's algorithm from `start`.
///
/// The next node is picked by a linear scan of the unvisited set in node
/// insertion order; the first strictly smaller distance wins ties. When
/// `target` is given, a final step carries the reconstructed path (or says
/// the target is unreachable). An unknown `start` yields an empty trace.
pub fn dijkstra(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    start: &str,
    target: Option<&str>,
) -> Trace<GraphStep> {
    let mut run = GraphRun::new(nodes, edges);
    if !run.contains(start) {
        tracing::debug!(start, "start node not in graph");
        return Trace::empty();
    }

    for node in &mut run.nodes {
        node.distance = f64::INFINITY;
        node.previous = None;
    }
    if let Some(node) = run.node_mut(start) {
        node.distance = 0.0;
    }

    let mut unvisited: IndexSet<NodeId> = run.nodes.iter().map(|n| n.id.clone()).collect();

    run.record(
        None,
        Vec::new(),
        format!("Starting Dijkstra's algorithm from node {}", start),
    );

    loop {
        let mut current: Option<NodeId> = None;
        let mut min_distance = f64::INFINITY;
        for id in &unvisited {
            let distance = run.distance(id);
            if distance < min_distance {
                min_distance = distance;
                current = Some(id.clone());
            }
        }

        let Some(current) = current else {
            break;
        };

        unvisited.shift_remove(&current);
        run.visited.push(current.clone());
        run.record(
            Some(&current),
            Vec::new(),
            format!(
                "Visiting node {} with distance {}",
                current,
                format_number(min_distance)
            ),
        );

        let outgoing = run.outgoing(&current);
        let exploring = outgoing.iter().map(|e| e.id()).collect();
        run.record(
            Some(&current),
            exploring,
            format!("Exploring neighbors of {}", current),
        );

        for edge in outgoing {
            let candidate = run.distance(&current) + edge.weight;
            if candidate < run.distance(&edge.to) {
                if let Some(neighbor) = run.node_mut(&edge.to) {
                    neighbor.distance = candidate;
                    neighbor.previous = Some(current.clone());
                }
                run.record(
                    Some(&current),
                    Vec::new(),
                    format!(
                        "Updated distance to {}: {}",
                        edge.to,
                        format_number(candidate)
                    ),
                );
            }
        }
    }

    run.record(None, Vec::new(), "Dijkstra's algorithm completed".to_string());

    if let Some(target) = target {
        let path = reconstruct_path(&run.nodes, start, target);
        let description = match &path {
            Some(path) => format!("Shortest path to {}: {}", target, path.join(" → ")),
            None => format!("{} is unreachable from {}", target, start),
        };
        let mut step = run.snapshot(None, Vec::new(), description);
        step.shortest_path = path;
        run.steps.push(step);
    }

    run.steps.finish()
}

/// Follow `previous` pointers from `target` back to `start`.
///
/// Returns the path in start-to-target order, or `None` when `target` was
/// never reached.
pub fn reconstruct_path(nodes: &[GraphNode], start: &str, target: &str) -> Option<Vec<NodeId>> {
    let by_id: FxHashMap<&str, &GraphNode> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();
    let mut node = *by_id.get(target)?;
    if !node.distance.is_finite() {
        return None;
    }

    let mut path = vec![node.id.clone()];
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    seen.insert(node.id.as_str());
    while node.id != start {
        let previous = node.previous.as_deref()?;
        if !seen.insert(previous) {
            // A cycle in the predecessor chain (negative weights)
            return None;
        }
        node = *by_id.get(previous)?;
        path.push(node.id.clone());
    }
    path.reverse();
    Some(path)
}

/// Breadth-first traversal from `start`.
///
/// Neighbors are queued in edge-list order; a node queued twice is skipped
/// when popped the second time. An unknown `start` yields an empty trace.
pub fn breadth_first_search(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    start: &str,
) -> Trace<GraphStep> {
    let mut run = GraphRun::new(nodes, edges);
    if !run.contains(start) {
        tracing::debug!(start, "start node not in graph");
        return Trace::empty();
    }

    let mut seen: FxHashSet<NodeId> = FxHashSet::default();
    let mut queue: VecDeque<NodeId> = VecDeque::from([start.to_string()]);

    run.record(None, Vec::new(), format!("Starting BFS from node {}", start));

    while let Some(current) = queue.pop_front() {
        if !seen.insert(current.clone()) {
            continue;
        }
        run.visited.push(current.clone());
        run.record(
            Some(&current),
            Vec::new(),
            format!("Visiting node {}", current),
        );

        let neighbors: Vec<NodeId> = run
            .outgoing(&current)
            .into_iter()
            .map(|e| e.to.clone())
            .filter(|id| !seen.contains(id))
            .collect();

        if !neighbors.is_empty() {
            queue.extend(neighbors.iter().cloned());
            run.record(
                Some(&current),
                Vec::new(),
                format!("Added neighbors [{}] to queue", neighbors.join(", ")),
            );
        }
    }

    run.record(None, Vec::new(), "BFS traversal completed".to_string());

    run.steps.finish()
}
