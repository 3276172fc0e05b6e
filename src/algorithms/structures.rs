//! Stack and queue simulators
//!
//! Unlike the batch algorithms, these record their trace incrementally:
//! every public operation mutates the structure (if it needs to) and
//! appends exactly one step. Popping, dequeuing, or peeking an empty
//! structure records a step with no value instead of failing.

use super::format_number;
use crate::trace::{numbers_size, StepSnapshot, Trace, TraceBuilder};
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StackOp {
    Init,
    Push,
    Pop,
    Peek,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueOp {
    Init,
    Enqueue,
    Dequeue,
    Front,
}

impl fmt::Display for StackOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StackOp::Init => "init",
            StackOp::Push => "push",
            StackOp::Pop => "pop",
            StackOp::Peek => "peek",
        };
        f.write_str(name)
    }
}

impl fmt::Display for QueueOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QueueOp::Init => "init",
            QueueOp::Enqueue => "enqueue",
            QueueOp::Dequeue => "dequeue",
            QueueOp::Front => "front",
        };
        f.write_str(name)
    }
}

/// Stack contents (bottom first) after one operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackStep {
    pub stack: Vec<f64>,
    pub operation: StackOp,
    /// `None` when the operation found the stack empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub description: String,
}

/// Queue contents (front first) after one operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueueStep {
    pub queue: Vec<f64>,
    pub operation: QueueOp,
    /// `None` when the operation found the queue empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub description: String,
}

impl StepSnapshot for StackStep {
    fn description(&self) -> &str {
        &self.description
    }

    fn estimated_size(&self) -> usize {
        numbers_size(self.stack.len() + 1, 0, &self.description)
    }
}

impl StepSnapshot for QueueStep {
    fn description(&self) -> &str {
        &self.description
    }

    fn estimated_size(&self) -> usize {
        numbers_size(self.queue.len() + 1, 0, &self.description)
    }
}

/// A LIFO stack that records each operation
#[derive(Debug, Clone)]
pub struct StackVisualization {
    stack: Vec<f64>,
    steps: TraceBuilder<StackStep>,
}

impl StackVisualization {
    pub fn new() -> Self {
        let mut sim = StackVisualization {
            stack: Vec::new(),
            steps: TraceBuilder::new(),
        };
        sim.record(StackOp::Init, None, "Initialized empty stack".to_string());
        sim
    }

    fn record(&mut self, operation: StackOp, value: Option<f64>, description: String) {
        self.steps.push(StackStep {
            stack: self.stack.clone(),
            operation,
            value,
            description,
        });
    }

    pub fn push(&mut self, value: f64) {
        self.stack.push(value);
        self.record(
            StackOp::Push,
            Some(value),
            format!("Pushed {} onto the stack", format_number(value)),
        );
    }

    pub fn pop(&mut self) -> Option<f64> {
        let value = self.stack.pop();
        let description = match value {
            Some(v) => format!("Popped {} from the stack", format_number(v)),
            None => "Stack is empty, cannot pop".to_string(),
        };
        self.record(StackOp::Pop, value, description);
        value
    }

    pub fn peek(&mut self) -> Option<f64> {
        let value = self.stack.last().copied();
        let description = match value {
            Some(v) => format!("Top element is {}", format_number(v)),
            None => "Stack is empty".to_string(),
        };
        self.record(StackOp::Peek, value, description);
        value
    }

    /// Current contents, bottom first
    pub fn contents(&self) -> &[f64] {
        &self.stack
    }

    /// Every step recorded so far
    pub fn steps(&self) -> &[StackStep] {
        self.steps.steps()
    }

    pub fn into_trace(self) -> Trace<StackStep> {
        self.steps.finish()
    }
}

impl Default for StackVisualization {
    fn default() -> Self {
        Self::new()
    }
}

/// A FIFO queue that records each operation
#[derive(Debug, Clone)]
pub struct QueueVisualization {
    queue: VecDeque<f64>,
    steps: TraceBuilder<QueueStep>,
}

impl QueueVisualization {
    pub fn new() -> Self {
        let mut sim = QueueVisualization {
            queue: VecDeque::new(),
            steps: TraceBuilder::new(),
        };
        sim.record(QueueOp::Init, None, "Initialized empty queue".to_string());
        sim
    }

    fn record(&mut self, operation: QueueOp, value: Option<f64>, description: String) {
        self.steps.push(QueueStep {
            queue: self.queue.iter().copied().collect(),
            operation,
            value,
            description,
        });
    }

    pub fn enqueue(&mut self, value: f64) {
        self.queue.push_back(value);
        self.record(
            QueueOp::Enqueue,
            Some(value),
            format!("Enqueued {} to the queue", format_number(value)),
        );
    }

    pub fn dequeue(&mut self) -> Option<f64> {
        let value = self.queue.pop_front();
        let description = match value {
            Some(v) => format!("Dequeued {} from the queue", format_number(v)),
            None => "Queue is empty, cannot dequeue".to_string(),
        };
        self.record(QueueOp::Dequeue, value, description);
        value
    }

    pub fn front(&mut self) -> Option<f64> {
        let value = self.queue.front().copied();
        let description = match value {
            Some(v) => format!("Front element is {}", format_number(v)),
            None => "Queue is empty".to_string(),
        };
        self.record(QueueOp::Front, value, description);
        value
    }

    /// Current contents, front first
    pub fn contents(&self) -> Vec<f64> {
        self.queue.iter().copied().collect()
    }

    pub fn steps(&self) -> &[QueueStep] {
        self.steps.steps()
    }

    pub fn into_trace(self) -> Trace<QueueStep> {
        self.steps.finish()
    }
}

impl Default for QueueVisualization {
    fn default() -> Self {
        Self::new()
    }
}

/// One scripted operation, interpreted against either structure.
///
/// `Insert` is push/enqueue, `Remove` is pop/dequeue, and `Inspect` is
/// peek/front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StructureOp {
    Insert(f64),
    Remove,
    Inspect,
}

/// Replay a script against a fresh stack
pub fn run_stack(ops: &[StructureOp]) -> Trace<StackStep> {
    let mut stack = StackVisualization::new();
    for op in ops {
        match *op {
            StructureOp::Insert(v) => stack.push(v),
            StructureOp::Remove => {
                stack.pop();
            }
            StructureOp::Inspect => {
                stack.peek();
            }
        }
    }
    stack.into_trace()
}

/// Replay a script against a fresh queue
pub fn run_queue(ops: &[StructureOp]) -> Trace<QueueStep> {
    let mut queue = QueueVisualization::new();
    for op in ops {
        match *op {
            StructureOp::Insert(v) => queue.enqueue(v),
            StructureOp::Remove => {
                queue.dequeue();
            }
            StructureOp::Inspect => {
                queue.front();
            }
        }
    }
    queue.into_trace()
}
