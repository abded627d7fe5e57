//! Reflection text validation.

use crate::analysis::{AnalysisError, ErrorKind};

/// Message shown when a reflection is submitted without any content.
pub const EMPTY_REFLECTION_MESSAGE: &str = "Please enter your reflection before submitting.";

/// A validated, trimmed reflection ready to be sent to the analysis service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectionText(String);

impl ReflectionText {
    /// Trims the raw input, caps it at `max_chars` characters and rejects it
    /// when nothing is left.
    ///
    /// Text past the cap is dropped, the same as typing past the form's limit.
    ///
    /// # Errors
    /// Returns a validation error for empty or whitespace-only input.
    pub fn parse(raw: &str, max_chars: usize) -> Result<Self, AnalysisError> {
        let trimmed = raw.trim();
        let capped = match trimmed.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => trimmed[..byte_idx].trim_end(),
            None => trimmed,
        };
        if capped.is_empty() {
            return Err(AnalysisError::new(
                ErrorKind::Validation,
                EMPTY_REFLECTION_MESSAGE,
            ));
        }
        Ok(Self(capped.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (what the form counter shows).
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ReflectionText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
