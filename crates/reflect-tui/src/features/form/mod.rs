//! Reflection input field.

mod render;
mod state;
mod text_buffer;
mod update;

pub use render::{FORM_HEIGHT, PLACEHOLDER, PROMPT, render_form};
pub use state::FormState;
pub use text_buffer::{CursorMove, TextBuffer};
pub use update::{handle_edit_key, handle_paste};
