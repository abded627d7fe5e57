//! Analysis service wire types, outcome interpretation and errors.
//!
//! The service is a black box reached over HTTP. Its response body always
//! has the same shape; an `error` flag decides whether the result fields or
//! the `message` field are meaningful.

mod client;

use std::fmt;

pub use client::{AnalysisClient, USER_AGENT};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shown when the service could not be reached or its response not parsed.
pub const TRANSPORT_ERROR_MESSAGE: &str =
    "Unable to connect to the analysis service. Please make sure the backend is running.";

/// Shown when the service reports an error without a message.
pub const APPLICATION_ERROR_MESSAGE: &str = "An error occurred while analyzing your reflection.";

/// Category of a failed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input rejected before any request was made
    Validation,
    /// Request could not be sent or the response could not be parsed
    Transport,
    /// Well-formed response with the `error` flag set
    Application,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Validation => write!(f, "validation"),
            ErrorKind::Transport => write!(f, "transport"),
            ErrorKind::Application => write!(f, "application"),
        }
    }
}

/// Structured error with a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisError {
    /// Error category
    pub kind: ErrorKind,
    /// Text shown to the user, verbatim
    pub message: String,
    /// Underlying cause, for logs only
    pub details: Option<String>,
}

impl AnalysisError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Transport failure with the fixed fallback message.
    pub fn transport(details: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Transport,
            message: TRANSPORT_ERROR_MESSAGE.to_string(),
            details: Some(details.into()),
        }
    }

    /// Application failure, using the server message when it has content.
    pub fn application(message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| APPLICATION_ERROR_MESSAGE.to_string());
        Self::new(ErrorKind::Application, message)
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AnalysisError {}

/// Request body for `POST /analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest<'a> {
    pub text: &'a str,
}

/// Classification returned by the service. Values are used verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub emotion: String,
    pub confidence: f64,
    pub analysis: String,
    pub suggestions: Vec<String>,
}

impl AnalysisResult {
    /// Confidence as a whole percentage.
    pub fn confidence_percent(&self) -> i64 {
        confidence_percent(self.confidence)
    }
}

/// `round(confidence * 100)`, rounding halves up. Out-of-range values are not clamped.
pub fn confidence_percent(confidence: f64) -> i64 {
    (confidence * 100.0 + 0.5).floor() as i64
}

/// Raw response body. Every field is optional on the wire.
///
/// `error` and `message` are kept as raw JSON: the flag counts as set for any
/// truthy value, not only `true`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub analysis: Option<String>,
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,
}

impl AnalysisResponse {
    /// Maps the body to a result or an error.
    ///
    /// A missing `suggestions` list is read as empty; any other missing
    /// result field makes the body unusable and is reported as a transport
    /// failure.
    ///
    /// # Errors
    /// Returns an application error when the `error` flag is set, or a
    /// transport error when a required result field is absent.
    pub fn into_result(self) -> Result<AnalysisResult, AnalysisError> {
        if self.error.as_ref().is_some_and(is_truthy) {
            return Err(AnalysisError::application(self.message.and_then(message_text)));
        }

        let missing = |field: &str| AnalysisError::transport(format!("response missing `{field}`"));

        Ok(AnalysisResult {
            emotion: self.emotion.ok_or_else(|| missing("emotion"))?,
            confidence: self.confidence.ok_or_else(|| missing("confidence"))?,
            analysis: self.analysis.ok_or_else(|| missing("analysis"))?,
            suggestions: self.suggestions.unwrap_or_default(),
        })
    }
}

/// Falsy values are `null`, `false`, `0` and `""`.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn message_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        v if !is_truthy(&v) => None,
        v => Some(v.to_string()),
    }
}
