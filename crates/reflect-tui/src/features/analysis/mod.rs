//! Analysis feedback: loading, error and result panels below the form.

mod render;

pub use render::{render_feedback, result_lines, result_max_scroll};
