//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer only mutates state and returns effects; it never performs
//! I/O or spawns tasks directly.

use reflect_core::reflection::ReflectionText;

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Send the reflection to the analysis service.
    ///
    /// The runtime must answer with exactly one `UiEvent::AnalysisSettled`
    /// carrying the same task id.
    AnalyzeReflection { task: TaskId, text: ReflectionText },
}
