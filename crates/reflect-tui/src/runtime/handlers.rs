//! Effect handlers. Each one is a plain async fn that resolves to the
//! `UiEvent` the reducer should see next.

use reflect_core::analysis::{AnalysisClient, AnalysisError};
use reflect_core::reflection::ReflectionText;

use crate::common::TaskId;
use crate::events::UiEvent;

/// Sends one reflection and always resolves to `AnalysisSettled` for `task`.
///
/// The request runs in its own task so a panic inside it still settles the
/// form (as a transport error) instead of leaving it loading.
pub async fn analyze_reflection(
    client: AnalysisClient,
    task: TaskId,
    text: ReflectionText,
) -> UiEvent {
    let request = tokio::spawn(async move { client.analyze(&text).await });
    let outcome = match request.await {
        Ok(outcome) => outcome,
        Err(join_err) => {
            tracing::error!(task = task.0, error = %join_err, "analysis task failed");
            Err(AnalysisError::transport(join_err.to_string()))
        }
    };
    UiEvent::AnalysisSettled { task, outcome }
}
