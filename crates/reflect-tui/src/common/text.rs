//! Text utilities for input handling and rendering.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds `max_width` terminal columns.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
        used += ch_width;
    }
    truncated.push('…');
    truncated
}

/// Cleans pasted text before it goes into the form.
///
/// Normalizes CRLF/CR to LF, expands tabs to four spaces and drops every
/// other control character (which also breaks up ANSI escape sequences).
pub fn sanitize_for_input(s: &str) -> Cow<'_, str> {
    let needs_change = s
        .chars()
        .any(|c| c == '\t' || c == '\r' || (c.is_control() && c != '\n'));
    if !needs_change {
        return Cow::Borrowed(s);
    }

    let normalized = s.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = String::with_capacity(normalized.len());
    for c in normalized.chars() {
        match c {
            '\t' => out.push_str("    "),
            '\n' => out.push('\n'),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
