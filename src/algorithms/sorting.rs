//! Bubble sort and quick sort with full array snapshots
//!
//! Both algorithms work on a private copy of the input and record a
//! [`SortStep`] before every comparison and after every swap. The final step
//! always holds the ascending array with every index marked sorted.

use super::format_number;
use crate::trace::{numbers_size, StepSnapshot, Trace, TraceBuilder};
use serde::Serialize;

/// One recorded state of a sorting run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortStep {
    pub array: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comparing: Vec<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub swapping: Vec<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorted: Vec<usize>,
    pub description: String,
}

impl SortStep {
    fn new(array: &[f64], description: impl Into<String>) -> Self {
        SortStep {
            array: array.to_vec(),
            comparing: Vec::new(),
            swapping: Vec::new(),
            sorted: Vec::new(),
            description: description.into(),
        }
    }

    fn comparing(mut self, indices: Vec<usize>) -> Self {
        self.comparing = indices;
        self
    }

    fn swapping(mut self, indices: Vec<usize>) -> Self {
        self.swapping = indices;
        self
    }

    fn sorted(mut self, indices: Vec<usize>) -> Self {
        self.sorted = indices;
        self
    }
}

impl StepSnapshot for SortStep {
    fn description(&self) -> &str {
        &self.description
    }

    fn estimated_size(&self) -> usize {
        let indices = self.comparing.len() + self.swapping.len() + self.sorted.len();
        numbers_size(self.array.len(), indices, &self.description)
    }
}

/// Bubble sort.
///
/// Each completed pass fixes index `n - i - 1`; that index stays in the
/// `sorted` set of every later step.
pub fn bubble_sort(input: &[f64]) -> Trace<SortStep> {
    let mut array = input.to_vec();
    let n = array.len();
    let mut steps = TraceBuilder::new();
    // Finalized indices, kept in ascending order
    let mut sorted: Vec<usize> = Vec::new();

    steps.push(SortStep::new(&array, "Starting Bubble Sort"));

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            steps.push(
                SortStep::new(
                    &array,
                    format!("Comparing elements at positions {} and {}", j, j + 1),
                )
                .comparing(vec![j, j + 1])
                .sorted(sorted.clone()),
            );

            if array[j] > array[j + 1] {
                array.swap(j, j + 1);
                steps.push(
                    SortStep::new(
                        &array,
                        format!("Swapping elements at positions {} and {}", j, j + 1),
                    )
                    .swapping(vec![j, j + 1])
                    .sorted(sorted.clone()),
                );
            }
        }

        let settled = n - i - 1;
        sorted.insert(0, settled);
        steps.push(
            SortStep::new(
                &array,
                format!("Element at position {} is now in correct position", settled),
            )
            .sorted(sorted.clone()),
        );
    }

    steps.push(SortStep::new(&array, "Array is now fully sorted!").sorted((0..n).collect()));

    steps.finish()
}

/// Quick sort with the last element of each subrange as pivot
pub fn quick_sort(input: &[f64]) -> Trace<SortStep> {
    let mut array = input.to_vec();
    let mut steps = TraceBuilder::new();

    steps.push(SortStep::new(&array, "Starting Quick Sort"));

    if array.len() > 1 {
        let high = array.len() - 1;
        quick_sort_range(&mut array, 0, high, &mut steps);
    }

    let n = array.len();
    steps.push(SortStep::new(&array, "Array is now fully sorted!").sorted((0..n).collect()));

    steps.finish()
}

fn quick_sort_range(
    array: &mut [f64],
    low: usize,
    high: usize,
    steps: &mut TraceBuilder<SortStep>,
) {
    if low >= high {
        return;
    }

    let pivot_index = partition(array, low, high, steps);
    if pivot_index > low {
        quick_sort_range(array, low, pivot_index - 1, steps);
    }
    quick_sort_range(array, pivot_index + 1, high, steps);
}

/// Lomuto partition of `array[low..=high]`, returning the pivot's final index
fn partition(
    array: &mut [f64],
    low: usize,
    high: usize,
    steps: &mut TraceBuilder<SortStep>,
) -> usize {
    let pivot = array[high];
    // Next slot for an element <= pivot (one past the partition boundary)
    let mut boundary = low;

    steps.push(
        SortStep::new(
            array,
            format!(
                "Using element at position {} ({}) as pivot",
                high,
                format_number(pivot)
            ),
        )
        .comparing(vec![high]),
    );

    for j in low..high {
        steps.push(
            SortStep::new(
                array,
                format!(
                    "Comparing {} with pivot {}",
                    format_number(array[j]),
                    format_number(pivot)
                ),
            )
            .comparing(vec![j, high]),
        );

        if array[j] <= pivot {
            if boundary != j {
                array.swap(boundary, j);
                steps.push(
                    SortStep::new(
                        array,
                        format!("Swapping elements at positions {} and {}", boundary, j),
                    )
                    .swapping(vec![boundary, j]),
                );
            }
            boundary += 1;
        }
    }

    array.swap(boundary, high);
    steps.push(
        SortStep::new(
            array,
            format!("Placing pivot in correct position {}", boundary),
        )
        .swapping(vec![boundary, high]),
    );

    boundary
}
