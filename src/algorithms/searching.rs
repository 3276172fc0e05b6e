//! Linear and binary search over a numeric sequence
//!
//! Binary search sorts its own copy first, so every snapshot in its trace is
//! of the sorted array and `found` indexes into that order.

use super::format_number;
use crate::trace::{numbers_size, StepSnapshot, Trace, TraceBuilder};
use serde::Serialize;

/// One recorded state of a search run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchStep {
    pub array: Vec<f64>,
    pub target: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub searching: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub eliminated: Vec<usize>,
    pub description: String,
}

impl SearchStep {
    fn new(array: &[f64], target: f64, description: impl Into<String>) -> Self {
        SearchStep {
            array: array.to_vec(),
            target,
            searching: Vec::new(),
            found: None,
            eliminated: Vec::new(),
            description: description.into(),
        }
    }

    fn searching(mut self, index: usize) -> Self {
        self.searching = vec![index];
        self
    }

    fn found(mut self, index: usize) -> Self {
        self.found = Some(index);
        self
    }

    fn eliminated(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.eliminated = indices.into_iter().collect();
        self
    }
}

impl StepSnapshot for SearchStep {
    fn description(&self) -> &str {
        &self.description
    }

    fn estimated_size(&self) -> usize {
        let indices = self.searching.len() + self.eliminated.len() + 1;
        numbers_size(self.array.len() + 1, indices, &self.description)
    }
}

/// Scan left to right, stopping at the first match
pub fn linear_search(input: &[f64], target: f64) -> Trace<SearchStep> {
    let array = input.to_vec();
    let shown = format_number(target);
    let mut steps = TraceBuilder::new();

    steps.push(SearchStep::new(
        &array,
        target,
        format!("Starting Linear Search for {}", shown),
    ));

    for (i, &value) in array.iter().enumerate() {
        steps.push(
            SearchStep::new(
                &array,
                target,
                format!(
                    "Checking element at position {}: {}",
                    i,
                    format_number(value)
                ),
            )
            .searching(i),
        );

        if value == target {
            steps.push(
                SearchStep::new(
                    &array,
                    target,
                    format!("Found {} at position {}!", shown, i),
                )
                .found(i),
            );
            return steps.finish();
        }

        steps.push(
            SearchStep::new(
                &array,
                target,
                format!("{} ≠ {}, continuing search", format_number(value), shown),
            )
            .eliminated(0..=i),
        );
    }

    steps.push(
        SearchStep::new(&array, target, format!("{} not found in the array", shown))
            .eliminated(0..array.len()),
    );

    steps.finish()
}

/// Sort a copy ascending, then halve the `[left, right]` window each round
pub fn binary_search(input: &[f64], target: f64) -> Trace<SearchStep> {
    let mut array = input.to_vec();
    array.sort_by(|a, b| a.total_cmp(b));
    let n = array.len();
    let shown = format_number(target);
    let mut steps = TraceBuilder::new();

    steps.push(SearchStep::new(
        &array,
        target,
        format!("Starting Binary Search for {} (array sorted)", shown),
    ));

    // Half-open window [left, right) so the bounds never underflow
    let mut left = 0;
    let mut right = n;

    while left < right {
        let mid = left + (right - left - 1) / 2;
        let value = array[mid];

        steps.push(
            SearchStep::new(
                &array,
                target,
                format!(
                    "Checking middle element at position {}: {}",
                    mid,
                    format_number(value)
                ),
            )
            .searching(mid)
            .eliminated((0..left).chain(right..n)),
        );

        if value == target {
            steps.push(
                SearchStep::new(
                    &array,
                    target,
                    format!("Found {} at position {}!", shown, mid),
                )
                .found(mid),
            );
            return steps.finish();
        }

        if value < target {
            left = mid + 1;
            steps.push(
                SearchStep::new(
                    &array,
                    target,
                    format!("{} < {}, searching right half", format_number(value), shown),
                )
                .eliminated(0..=mid),
            );
        } else {
            right = mid;
            steps.push(
                SearchStep::new(
                    &array,
                    target,
                    format!("{} > {}, searching left half", format_number(value), shown),
                )
                .eliminated(mid..n),
            );
        }
    }

    steps.push(
        SearchStep::new(&array, target, format!("{} not found in the array", shown))
            .eliminated(0..n),
    );

    steps.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_search_not_found() {
        let trace = linear_search(&[5.0, 2.0, 8.0, 1.0], 99.0);
        assert_eq!(trace.last().unwrap().eliminated, vec![0, 1, 2, 3]);
        assert!(trace.iter().all(|s| s.found.is_none()));
        // start + 2 per element + final
        assert_eq!(trace.len(), 10);
    }

    #[test]
    fn test_linear_search_stops_at_first_match() {
        let trace = linear_search(&[4.0, 7.0, 7.0], 7.0);
        let last = trace.last().unwrap();
        assert_eq!(last.found, Some(1));
        assert_eq!(last.description, "Found 7 at position 1!");
        assert_eq!(trace.iter().filter(|s| s.found.is_some()).count(), 1);
        assert_eq!(trace[2].eliminated, vec![0]);
    }

    #[test]
    fn test_linear_search_empty() {
        let trace = linear_search(&[], 3.0);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().unwrap().description, "3 not found in the array");
    }

    #[test]
    fn test_binary_search_sorts_first() {
        let trace = binary_search(&[5.0, 2.0, 8.0, 1.0], 8.0);
        let first = trace.first().unwrap();
        assert_eq!(first.array, vec![1.0, 2.0, 5.0, 8.0]);
        assert!(first.description.contains("(array sorted)"));
        assert_eq!(trace.last().unwrap().found, Some(3));
    }

    #[test]
    fn test_binary_search_first_probe_matches_classic_midpoint() {
        // floor((0 + 3) / 2) = 1 for four elements
        let trace = binary_search(&[1.0, 2.0, 5.0, 8.0], 8.0);
        assert_eq!(trace[1].searching, vec![1]);
        assert!(trace[1].eliminated.is_empty());
        assert_eq!(trace[2].eliminated, vec![0, 1]);
        assert_eq!(trace[3].searching, vec![2]);
        assert_eq!(trace[3].eliminated, vec![0, 1]);
    }

    #[test]
    fn test_binary_search_left_half() {
        let trace = binary_search(&[1.0, 2.0, 5.0, 8.0, 9.0], 1.0);
        assert_eq!(trace[1].searching, vec![2]);
        assert_eq!(trace[2].eliminated, vec![2, 3, 4]);
        assert_eq!(trace.last().unwrap().found, Some(0));
    }

    #[test]
    fn test_binary_search_not_found() {
        let trace = binary_search(&[3.0, 1.0, 2.0], 0.5);
        let last = trace.last().unwrap();
        assert_eq!(last.eliminated, vec![0, 1, 2]);
        assert!(last.found.is_none());
    }

    #[test]
    fn test_binary_search_empty() {
        let trace = binary_search(&[], 1.0);
        assert_eq!(trace.len(), 2);
    }
}
