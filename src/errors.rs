//! Error types for input parsing and trace playback
//!
//! The algorithms themselves never fail: invalid input produces an empty
//! trace and empty structures produce a descriptive step. [`AlgoError`]
//! covers the layers around them (command-line input, graph files, and
//! cursor navigation).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced outside the trace-generation core
#[derive(Debug, Error)]
pub enum AlgoError {
    /// No catalog entry matches the requested name or id
    #[error("unknown algorithm '{name}' (try `algotrace list`)")]
    UnknownAlgorithm { name: String },

    /// A sequence element could not be parsed as a number
    #[error("invalid number '{token}'")]
    InvalidNumber { token: String },

    /// A structure script entry is not a recognized operation
    #[error("invalid operation '{token}'")]
    InvalidOperation { token: String },

    /// The graph file could not be read
    #[error("cannot read graph file {}: {source}", path.display())]
    GraphFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The graph file is not valid graph JSON
    #[error("malformed graph: {0}")]
    GraphFormat(#[from] serde_json::Error),

    /// Attempted to step backward from the first step
    #[error("already at the beginning of the trace")]
    AtStart,

    /// Attempted to step forward past the last step
    #[error("no more steps available (playback finished)")]
    AtEnd,

    /// The trace has no steps to show
    #[error("nothing to visualize: the trace is empty")]
    EmptyTrace,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, AlgoError>;
