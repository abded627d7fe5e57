//! UI events consumed by the reducer.

use reflect_core::analysis::{AnalysisError, AnalysisResult};

use crate::common::TaskId;

/// Everything the reducer reacts to.
#[derive(Debug)]
pub enum UiEvent {
    /// Animation / render cadence.
    Tick,
    /// Current terminal size, sent before the other events of each loop turn.
    Frame { width: u16, height: u16 },
    /// Raw terminal input (keys, paste, resize).
    Terminal(crossterm::event::Event),
    /// The request for `task` finished, successfully or not.
    AnalysisSettled {
        task: TaskId,
        outcome: Result<AnalysisResult, AnalysisError>,
    },
}
