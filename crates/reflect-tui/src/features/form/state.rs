//! Reflection form state.

use super::TextBuffer;
use crate::common::sanitize_for_input;

/// Text field state. The buffer enforces the character cap.
#[derive(Debug, Clone)]
pub struct FormState {
    pub textarea: TextBuffer,
}

impl FormState {
    pub fn new(max_chars: usize) -> Self {
        Self {
            textarea: TextBuffer::with_limit(max_chars),
        }
    }

    pub fn text(&self) -> String {
        self.textarea.text()
    }

    pub fn char_count(&self) -> usize {
        self.textarea.char_count()
    }

    pub fn max_chars(&self) -> usize {
        self.textarea.max_chars()
    }

    /// True when submitting would fail validation.
    pub fn is_blank(&self) -> bool {
        self.textarea.is_blank()
    }

    /// Inserts pasted text after sanitizing it. Overflow past the cap is dropped.
    pub fn paste(&mut self, text: &str) -> usize {
        let sanitized = sanitize_for_input(text);
        self.textarea.insert_str(&sanitized)
    }

    pub fn clear(&mut self) {
        self.textarea.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paste_normalizes_line_endings() {
        let mut form = FormState::new(100);
        form.paste("one\r\ntwo\tthree");
        assert_eq!(form.text(), "one\ntwo    three");
    }

    #[test]
    fn paste_is_capped() {
        let mut form = FormState::new(4);
        assert_eq!(form.paste("abcdef"), 4);
        assert_eq!(form.char_count(), 4);
        assert_eq!(form.text(), "abcd");
    }

    #[test]
    fn new_form_is_blank() {
        let form = FormState::new(1000);
        assert!(form.is_blank());
        assert_eq!(form.char_count(), 0);
        assert_eq!(form.max_chars(), 1000);
    }
}
