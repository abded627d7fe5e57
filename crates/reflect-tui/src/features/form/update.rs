//! Form editing reducer.
//!
//! Handles text editing keys only. Submission, reset and quit are decided
//! by the top-level reducer before a key reaches this module.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{CursorMove, FormState};

/// Parsed key modifiers for cleaner pattern matching.
struct Modifiers {
    ctrl: bool,
    shift: bool,
    alt: bool,
}

impl Modifiers {
    fn from(key: &KeyEvent) -> Self {
        Self {
            ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
            shift: key.modifiers.contains(KeyModifiers::SHIFT),
            alt: key.modifiers.contains(KeyModifiers::ALT),
        }
    }

    fn only_ctrl(&self) -> bool {
        self.ctrl && !self.shift && !self.alt
    }

    fn only_alt(&self) -> bool {
        self.alt && !self.ctrl && !self.shift
    }

    /// Plain or shifted typing.
    fn is_typing(&self) -> bool {
        !self.ctrl && !self.alt
    }
}

/// Handles paste events for the form.
pub fn handle_paste(form: &mut FormState, text: &str) {
    let inserted = form.paste(text);
    if inserted < text.chars().count() {
        tracing::debug!(
            inserted,
            max_chars = form.max_chars(),
            "paste truncated at character limit"
        );
    }
}

/// Applies an editing key to the form. Returns false when the key is not an edit.
pub fn handle_edit_key(form: &mut FormState, key: KeyEvent) -> bool {
    let mods = Modifiers::from(&key);
    let textarea = &mut form.textarea;

    match key.code {
        KeyCode::Char('a') if mods.only_ctrl() => textarea.move_cursor(CursorMove::Head),
        KeyCode::Char('e') if mods.only_ctrl() => textarea.move_cursor(CursorMove::End),
        KeyCode::Char('u') if mods.only_ctrl() => textarea.delete_line_by_head(),
        KeyCode::Char('k') if mods.only_ctrl() => textarea.delete_line_by_end(),
        KeyCode::Char('w') if mods.only_ctrl() => textarea.delete_word_left(),
        KeyCode::Backspace if mods.only_alt() => textarea.delete_word_left(),
        KeyCode::Char(c) if mods.is_typing() => textarea.insert_char(c),
        KeyCode::Backspace => textarea.delete_prev_char(),
        KeyCode::Delete => textarea.delete_next_char(),
        KeyCode::Left => textarea.move_cursor(CursorMove::Back),
        KeyCode::Right => textarea.move_cursor(CursorMove::Forward),
        KeyCode::Up => textarea.move_cursor(CursorMove::Up),
        KeyCode::Down => textarea.move_cursor(CursorMove::Down),
        KeyCode::Home if mods.only_ctrl() => textarea.move_cursor(CursorMove::Top),
        KeyCode::End if mods.only_ctrl() => textarea.move_cursor(CursorMove::Bottom),
        KeyCode::Home => textarea.move_cursor(CursorMove::Head),
        KeyCode::End => textarea.move_cursor(CursorMove::End),
        KeyCode::Tab => {
            textarea.insert_str("    ");
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(form: &mut FormState, text: &str) {
        for c in text.chars() {
            handle_edit_key(form, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_inserts_characters() {
        let mut form = FormState::new(100);
        type_str(&mut form, "Hi there");
        assert_eq!(form.text(), "Hi there");
    }

    #[test]
    fn shifted_characters_are_typed() {
        let mut form = FormState::new(100);
        handle_edit_key(&mut form, KeyEvent::new(KeyCode::Char('H'), KeyModifiers::SHIFT));
        assert_eq!(form.text(), "H");
    }

    #[test]
    fn ctrl_chars_are_not_typed() {
        let mut form = FormState::new(100);
        assert!(!handle_edit_key(&mut form, ctrl('x')));
        assert_eq!(form.text(), "");
    }

    #[test]
    fn ctrl_w_deletes_word() {
        let mut form = FormState::new(100);
        type_str(&mut form, "feeling calm");
        handle_edit_key(&mut form, ctrl('w'));
        assert_eq!(form.text(), "feeling ");
    }

    #[test]
    fn ctrl_a_then_typing_prepends() {
        let mut form = FormState::new(100);
        type_str(&mut form, "calm");
        handle_edit_key(&mut form, ctrl('a'));
        type_str(&mut form, "so ");
        assert_eq!(form.text(), "so calm");
    }

    #[test]
    fn typing_stops_at_cap() {
        let mut form = FormState::new(3);
        type_str(&mut form, "abcdef");
        assert_eq!(form.text(), "abc");
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut form = FormState::new(100);
        type_str(&mut form, "sad!");
        handle_edit_key(&mut form, key(KeyCode::Backspace));
        assert_eq!(form.text(), "sad");
    }
}
