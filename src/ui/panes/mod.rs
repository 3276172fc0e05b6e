//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`sequence`]: bar view of arrays, stacks, and queues, coloured by step role
//! - [`graph`]: node/edge canvas for graph traversals
//! - [`log`]: every step description with the current one marked
//! - [`info`]: catalog metadata for the running algorithm
//! - [`details`]: family-specific fields of the current step
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function taking the frame,
//! its area, focus, and (for scrollable panes) a scroll offset owned by the
//! [`App`](crate::ui::App).

mod utils;

pub mod details;
pub mod graph;
pub mod info;
pub mod log;
pub mod sequence;
pub mod status;

pub use details::render_details_pane;
pub use graph::render_graph_pane;
pub use info::render_info_pane;
pub use log::render_log_pane;
pub use sequence::render_sequence_pane;
pub use status::render_status_bar;
