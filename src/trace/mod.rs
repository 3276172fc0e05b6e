// Append-only step history shared by every algorithm family

use std::mem::size_of;
use std::ops::Index;

/// A single recorded step of some algorithm family
pub trait StepSnapshot: Clone {
    /// Human-readable account of what this step did
    fn description(&self) -> &str;

    /// Estimate the memory usage of this step in bytes
    fn estimated_size(&self) -> usize;
}

/// Rough byte size of a numeric snapshot plus its index sets
pub(crate) fn numbers_size(values: usize, indices: usize, description: &str) -> usize {
    values * size_of::<f64>() + indices * size_of::<usize>() + description.len()
}

/// Accumulates steps while an algorithm runs.
///
/// Steps can only be appended. Batch algorithms finish the builder into a
/// [`Trace`]; the stack and queue simulators keep one alive across calls
/// and expose its steps directly.
#[derive(Debug, Clone)]
pub struct TraceBuilder<S> {
    steps: Vec<S>,
    current_memory: usize,
}

impl<S: StepSnapshot> TraceBuilder<S> {
    pub fn new() -> Self {
        TraceBuilder {
            steps: Vec::new(),
            current_memory: 0,
        }
    }

    /// Append a step to the history
    pub fn push(&mut self, step: S) {
        tracing::trace!(index = self.steps.len(), "{}", step.description());
        self.current_memory += step.estimated_size();
        self.steps.push(step);
    }

    /// Steps recorded so far
    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Freeze the history into a trace
    pub fn finish(self) -> Trace<S> {
        tracing::debug!(
            steps = self.steps.len(),
            bytes = self.current_memory,
            "trace complete"
        );
        Trace {
            steps: self.steps,
            current_memory: self.current_memory,
        }
    }
}

impl<S: StepSnapshot> Default for TraceBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// The ordered, immutable steps of one algorithm run.
///
/// A trace with zero steps means the input could not be visualized
/// (missing target, unknown start node), not an algorithm that did nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<S> {
    steps: Vec<S>,
    current_memory: usize,
}

impl<S> Trace<S> {
    /// A trace with no steps
    pub fn empty() -> Self {
        Trace {
            steps: Vec::new(),
            current_memory: 0,
        }
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&S> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.steps.iter()
    }

    pub fn first(&self) -> Option<&S> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    /// Total step count
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Estimated bytes held by all steps
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn into_steps(self) -> Vec<S> {
        self.steps
    }
}

impl<S> Default for Trace<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S> Index<usize> for Trace<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.steps[index]
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note(String);

    impl StepSnapshot for Note {
        fn description(&self) -> &str {
            &self.0
        }

        fn estimated_size(&self) -> usize {
            self.0.len()
        }
    }

    #[test]
    fn test_builder_preserves_order() {
        let mut builder = TraceBuilder::new();
        builder.push(Note("first".to_string()));
        builder.push(Note("second".to_string()));
        assert_eq!(builder.len(), 2);

        let trace = builder.finish();
        assert_eq!(trace[0], Note("first".to_string()));
        assert_eq!(trace.last(), Some(&Note("second".to_string())));
        assert_eq!(trace.memory_usage(), 11);
    }

    #[test]
    fn test_empty_trace() {
        let trace: Trace<Note> = Trace::empty();
        assert!(trace.is_empty());
        assert_eq!(trace.get(0), None);
        assert_eq!(trace.memory_usage(), 0);
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let mut builder = TraceBuilder::new();
        builder.push(Note("only".to_string()));
        let trace = builder.finish();
        assert_eq!(trace.get(0), trace.get(0));
    }
}
