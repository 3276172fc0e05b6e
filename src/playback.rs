//! Playback cursor over a normalized trace
//!
//! The cursor ranges over `0..=total_steps`. Position `total_steps` means
//! playback has run off the end; the step shown there is the last one.
//! Moving the cursor never touches the trace.

use crate::errors::{AlgoError, Result};
use crate::normalize::NormalizedStep;
use crate::trace::Trace;

#[derive(Debug, Clone)]
pub struct Playback {
    trace: Trace<NormalizedStep>,
    cursor: usize,
}

impl Playback {
    pub fn new(trace: Trace<NormalizedStep>) -> Self {
        Playback { trace, cursor: 0 }
    }

    /// The step under the cursor, or `None` for an empty trace
    pub fn current_step(&self) -> Option<&NormalizedStep> {
        let last = self.trace.len().checked_sub(1)?;
        self.trace.get(self.cursor.min(last))
    }

    /// Advance one step
    pub fn step_forward(&mut self) -> Result<()> {
        if self.trace.is_empty() {
            return Err(AlgoError::EmptyTrace);
        }
        if self.cursor >= self.trace.len() {
            return Err(AlgoError::AtEnd);
        }
        self.cursor += 1;
        Ok(())
    }

    /// Go back one step
    pub fn step_backward(&mut self) -> Result<()> {
        if self.cursor == 0 {
            return Err(AlgoError::AtStart);
        }
        self.cursor -= 1;
        Ok(())
    }

    /// Move to `index`, clamped to `[0, total_steps]`
    pub fn go_to(&mut self, index: usize) -> Option<&NormalizedStep> {
        self.cursor = index.min(self.trace.len());
        self.current_step()
    }

    pub fn rewind_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.cursor = self.trace.len();
    }

    /// Current cursor position
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Zero-based index of the step being shown
    pub fn displayed_index(&self) -> usize {
        self.cursor.min(self.trace.len().saturating_sub(1))
    }

    pub fn total_steps(&self) -> usize {
        self.trace.len()
    }

    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    /// True once the last step is on screen
    pub fn is_finished(&self) -> bool {
        self.cursor + 1 >= self.trace.len()
    }

    pub fn trace(&self) -> &Trace<NormalizedStep> {
        &self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::sorting::bubble_sort;
    use crate::normalize::{normalize, FamilyTrace};

    fn playback() -> Playback {
        Playback::new(normalize(&FamilyTrace::Sort(bubble_sort(&[2.0, 1.0]))))
    }

    #[test]
    fn test_step_backward_at_start() {
        let mut playback = playback();
        assert!(matches!(playback.step_backward(), Err(AlgoError::AtStart)));
        assert_eq!(playback.position(), 0);
    }

    #[test]
    fn test_forward_clamps_at_total() {
        let mut playback = playback();
        let total = playback.total_steps();
        for _ in 0..total {
            playback.step_forward().unwrap();
        }
        assert_eq!(playback.position(), total);
        assert!(matches!(playback.step_forward(), Err(AlgoError::AtEnd)));
        assert_eq!(
            playback.current_step().unwrap().sequence_number,
            total - 1
        );
    }

    #[test]
    fn test_go_to_clamps() {
        let mut playback = playback();
        let total = playback.total_steps();
        let step = playback.go_to(1000).unwrap();
        assert_eq!(step.sequence_number, total - 1);
        assert_eq!(playback.position(), total);
        playback.rewind_to_start();
        assert_eq!(playback.current_step().unwrap().sequence_number, 0);
    }

    #[test]
    fn test_empty_trace() {
        let mut playback = Playback::new(Trace::empty());
        assert!(playback.current_step().is_none());
        assert!(matches!(playback.step_forward(), Err(AlgoError::EmptyTrace)));
        assert!(playback.go_to(3).is_none());
    }

    #[test]
    fn test_navigation_does_not_mutate_trace() {
        let mut playback = playback();
        let before = playback.trace().clone();
        playback.step_forward().unwrap();
        playback.step_forward().unwrap();
        playback.step_backward().unwrap();
        playback.jump_to_end();
        playback.rewind_to_start();
        assert_eq!(playback.trace(), &before);
    }
}
