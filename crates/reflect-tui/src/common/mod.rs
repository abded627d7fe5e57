//! Shared helpers for the TUI.

mod task;
pub mod text;

pub use task::{TaskId, TaskSeq};
pub use text::{sanitize_for_input, truncate_with_ellipsis};
