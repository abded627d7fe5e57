//! Application state.
//!
//! ```text
//! AppState
//! ├── form: FormState       (reflection text, character cap)
//! ├── view: ViewState       (idle / loading / error / result)
//! ├── task_seq: TaskSeq     (submission id generator)
//! └── viewport, result_scroll, spinner_frame, endpoint (display only)
//! ```
//!
//! `ViewState` makes result and error mutually exclusive, and submission is
//! refused while it is `Loading`.

use ratatui::layout::Rect;
use reflect_core::analysis::AnalysisResult;
use reflect_core::config::Config;

use crate::common::{TaskId, TaskSeq};
use crate::form::FormState;

/// What the area below the form shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Nothing submitted yet, or reset.
    Idle,
    /// A request is in flight.
    Loading { task: TaskId },
    /// Last submission failed with this message.
    Error(String),
    /// Last submission succeeded.
    Result(AnalysisResult),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading { .. })
    }

    /// Reset is offered only when there is something to clear.
    pub fn can_reset(&self) -> bool {
        matches!(self, ViewState::Error(_) | ViewState::Result(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            ViewState::Result(result) => Some(result),
            _ => None,
        }
    }
}

/// Top-level TUI state, mutated only by the reducer.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Reflection input.
    pub form: FormState,
    /// Idle / loading / error / result.
    pub view: ViewState,
    /// Submission id sequence.
    pub task_seq: TaskSeq,
    /// Terminal area from the last `Frame` event.
    pub viewport: Rect,
    /// Vertical scroll of the result panel, in lines.
    pub result_scroll: u16,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
    /// Analysis endpoint, shown in the status line.
    pub endpoint: String,
}

impl AppState {
    pub fn new(config: &Config, endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            form: FormState::new(config.max_chars),
            view: ViewState::Idle,
            task_seq: TaskSeq::default(),
            viewport: Rect::default(),
            result_scroll: 0,
            spinner_frame: 0,
            endpoint: endpoint.into(),
        }
    }

    /// True when the submit action is available.
    pub fn can_submit(&self) -> bool {
        !self.view.is_loading()
    }

    /// Clears text, result and error back to the initial state.
    pub fn reset(&mut self) {
        self.form.clear();
        self.view = ViewState::Idle;
        self.result_scroll = 0;
    }
}
