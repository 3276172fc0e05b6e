//! # Introduction
//!
//! algotrace runs classic algorithms while recording every intermediate
//! state as a step. The resulting trace is normalized into one shape and
//! navigated forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), printed as text, or exported as JSON.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Algorithm → Trace → Normalizer → Playback → TUI
//! ```
//!
//! 1. [`input`]: parses number sequences, structure scripts, and graph files.
//! 2. [`algorithms`]: bubble and quick sort, linear and binary search,
//!    Dijkstra and breadth-first search, stack and queue simulators. Each
//!    produces a [`trace::Trace`] of its own step type.
//! 3. [`trace`]: the append-only builder and the immutable trace it yields.
//! 4. [`normalize`]: maps every family's steps onto
//!    [`normalize::NormalizedStep`].
//! 5. [`playback`]: a cursor over a normalized trace.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! [`catalog`] holds the static metadata (complexity, difficulty, reference
//! implementation) shown alongside each algorithm.
//!
//! ## Example
//!
//! ```
//! use algotrace::algorithms::{run, AlgorithmInput, AlgorithmKind};
//! use algotrace::normalize::normalize;
//!
//! let input = AlgorithmInput {
//!     array: vec![3.0, 1.0, 2.0],
//!     ..Default::default()
//! };
//! let trace = normalize(&run(AlgorithmKind::BubbleSort, &input));
//! assert_eq!(trace[0].description, "Starting Bubble Sort");
//! ```

pub mod algorithms;
pub mod catalog;
pub mod errors;
pub mod input;
pub mod normalize;
pub mod playback;
pub mod trace;
pub mod ui;
