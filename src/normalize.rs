//! Projection of family-specific steps onto one shared step shape
//!
//! Each algorithm family records its own step type. [`normalize`] maps a
//! [`FamilyTrace`] to a trace of [`NormalizedStep`]s, one per source step in
//! the same order, filling the shared `highlighted` / `comparing` /
//! `swapping` / `sorted` sets where a family field has an equivalent:
//!
//! | family | highlighted | comparing | swapping | sorted |
//! | --- | --- | --- | --- | --- |
//! | sort | | `comparing` | `swapping` | `sorted` |
//! | search | `searching` | `found` | | |
//! | graph | `visited_nodes`, `exploring_edges` | `current_node` | | |
//! | stack / queue | element touched by the operation | | | |
//!
//! Fields without an equivalent (`eliminated`, `shortest_path`, node
//! distances) stay reachable through the source step kept in
//! [`NormalizedStep::payload`].

use crate::algorithms::graph::{EdgeId, GraphStep, NodeId};
use crate::algorithms::searching::SearchStep;
use crate::algorithms::sorting::SortStep;
use crate::algorithms::structures::{QueueOp, QueueStep, StackOp, StackStep};
use crate::trace::{StepSnapshot, Trace, TraceBuilder};
use serde::Serialize;
use std::collections::BTreeSet;
use std::mem::size_of;

/// Identity of a highlighted element: a sequence position, a graph node, or
/// a graph edge. Serialized tagged by kind, e.g. `{"node": "A"}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementId {
    Index(usize),
    Node(NodeId),
    Edge(EdgeId),
}

/// A trace from any algorithm family
#[derive(Debug, Clone, PartialEq)]
pub enum FamilyTrace {
    Sort(Trace<SortStep>),
    Search(Trace<SearchStep>),
    Graph(Trace<GraphStep>),
    Stack(Trace<StackStep>),
    Queue(Trace<QueueStep>),
}

impl FamilyTrace {
    pub fn len(&self) -> usize {
        match self {
            FamilyTrace::Sort(t) => t.len(),
            FamilyTrace::Search(t) => t.len(),
            FamilyTrace::Graph(t) => t.len(),
            FamilyTrace::Stack(t) => t.len(),
            FamilyTrace::Queue(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn memory_usage(&self) -> usize {
        match self {
            FamilyTrace::Sort(t) => t.memory_usage(),
            FamilyTrace::Search(t) => t.memory_usage(),
            FamilyTrace::Graph(t) => t.memory_usage(),
            FamilyTrace::Stack(t) => t.memory_usage(),
            FamilyTrace::Queue(t) => t.memory_usage(),
        }
    }
}

/// The original family step, kept intact for family-specific rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "family", content = "step", rename_all = "lowercase")]
pub enum StepPayload {
    Sort(SortStep),
    Search(SearchStep),
    Graph(GraphStep),
    Stack(StackStep),
    Queue(QueueStep),
}

impl StepPayload {
    /// The numeric snapshot, for families that have one
    pub fn sequence(&self) -> Option<&[f64]> {
        match self {
            StepPayload::Sort(s) => Some(&s.array),
            StepPayload::Search(s) => Some(&s.array),
            StepPayload::Stack(s) => Some(&s.stack),
            StepPayload::Queue(s) => Some(&s.queue),
            StepPayload::Graph(_) => None,
        }
    }

    fn estimated_size(&self) -> usize {
        match self {
            StepPayload::Sort(s) => s.estimated_size(),
            StepPayload::Search(s) => s.estimated_size(),
            StepPayload::Graph(s) => s.estimated_size(),
            StepPayload::Stack(s) => s.estimated_size(),
            StepPayload::Queue(s) => s.estimated_size(),
        }
    }
}

/// A step in the shared vocabulary consumed by playback and rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedStep {
    pub sequence_number: usize,
    pub description: String,
    pub payload: StepPayload,
    pub highlighted: BTreeSet<ElementId>,
    pub comparing: BTreeSet<ElementId>,
    pub swapping: BTreeSet<ElementId>,
    pub sorted: BTreeSet<ElementId>,
}

impl NormalizedStep {
    fn new(sequence_number: usize, description: &str, payload: StepPayload) -> Self {
        NormalizedStep {
            sequence_number,
            description: description.to_string(),
            payload,
            highlighted: BTreeSet::new(),
            comparing: BTreeSet::new(),
            swapping: BTreeSet::new(),
            sorted: BTreeSet::new(),
        }
    }
}

impl StepSnapshot for NormalizedStep {
    fn description(&self) -> &str {
        &self.description
    }

    fn estimated_size(&self) -> usize {
        let sets =
            self.highlighted.len() + self.comparing.len() + self.swapping.len() + self.sorted.len();
        self.payload.estimated_size() + sets * size_of::<ElementId>()
    }
}

fn indices(values: &[usize]) -> BTreeSet<ElementId> {
    values.iter().copied().map(ElementId::Index).collect()
}

fn from_sort(n: usize, step: &SortStep) -> NormalizedStep {
    let mut out = NormalizedStep::new(n, &step.description, StepPayload::Sort(step.clone()));
    out.comparing = indices(&step.comparing);
    out.swapping = indices(&step.swapping);
    out.sorted = indices(&step.sorted);
    out
}

fn from_search(n: usize, step: &SearchStep) -> NormalizedStep {
    let mut out = NormalizedStep::new(n, &step.description, StepPayload::Search(step.clone()));
    out.highlighted = indices(&step.searching);
    out.comparing = step.found.into_iter().map(ElementId::Index).collect();
    out
}

fn from_graph(n: usize, step: &GraphStep) -> NormalizedStep {
    let mut out = NormalizedStep::new(n, &step.description, StepPayload::Graph(step.clone()));
    out.highlighted = step
        .visited_nodes
        .iter()
        .cloned()
        .map(ElementId::Node)
        .chain(step.exploring_edges.iter().cloned().map(ElementId::Edge))
        .collect();
    out.comparing = step
        .current_node
        .iter()
        .cloned()
        .map(ElementId::Node)
        .collect();
    out
}

fn from_stack(n: usize, step: &StackStep) -> NormalizedStep {
    let mut out = NormalizedStep::new(n, &step.description, StepPayload::Stack(step.clone()));
    let top = step.stack.len().checked_sub(1);
    if let (StackOp::Push | StackOp::Peek, Some(top)) = (step.operation, top) {
        out.highlighted.insert(ElementId::Index(top));
    }
    out
}

fn from_queue(n: usize, step: &QueueStep) -> NormalizedStep {
    let mut out = NormalizedStep::new(n, &step.description, StepPayload::Queue(step.clone()));
    let touched = match step.operation {
        QueueOp::Enqueue => step.queue.len().checked_sub(1),
        QueueOp::Front if !step.queue.is_empty() => Some(0),
        _ => None,
    };
    if let Some(idx) = touched {
        out.highlighted.insert(ElementId::Index(idx));
    }
    out
}

fn collect<S>(
    trace: &Trace<S>,
    map: impl Fn(usize, &S) -> NormalizedStep,
) -> Trace<NormalizedStep> {
    let mut builder = TraceBuilder::new();
    for (n, step) in trace.iter().enumerate() {
        builder.push(map(n, step));
    }
    builder.finish()
}

/// Map every step of `trace` to the shared shape, preserving order and count
pub fn normalize(trace: &FamilyTrace) -> Trace<NormalizedStep> {
    match trace {
        FamilyTrace::Sort(t) => collect(t, from_sort),
        FamilyTrace::Search(t) => collect(t, from_search),
        FamilyTrace::Graph(t) => collect(t, from_graph),
        FamilyTrace::Stack(t) => collect(t, from_stack),
        FamilyTrace::Queue(t) => collect(t, from_queue),
    }
}
