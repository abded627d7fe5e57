//! Multi-line text buffer backing the reflection field.
//!
//! Stores lines plus a (row, col) cursor in char units and enforces a
//! character cap: newlines count as one character, and inserts that would
//! exceed the cap are truncated.

/// Cursor movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Forward,
    Back,
    Head,
    End,
    Top,
    Bottom,
}

#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
    max_chars: usize,
}

impl TextBuffer {
    pub fn with_limit(max_chars: usize) -> Self {
        Self {
            lines: vec![String::new()],
            cursor_row: 0,
            cursor_col: 0,
            max_chars,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Current cursor position as (row, col) in char units.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Full text with lines joined by `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Character count including line breaks.
    pub fn char_count(&self) -> usize {
        let chars: usize = self.lines.iter().map(|l| line_char_len(l)).sum();
        chars + self.lines.len().saturating_sub(1)
    }

    pub fn remaining(&self) -> usize {
        self.max_chars.saturating_sub(self.char_count())
    }

    /// True when the text has no non-whitespace content.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }

    /// Inserts at the cursor, keeping only as much as fits under the cap.
    ///
    /// Returns the number of characters actually inserted.
    pub fn insert_str(&mut self, text: &str) -> usize {
        let allowed: String = text.chars().take(self.remaining()).collect();
        if allowed.is_empty() {
            return 0;
        }
        let inserted = allowed.chars().count();

        let row = self.cursor_row;
        let current = std::mem::take(&mut self.lines[row]);
        let byte_idx = char_to_byte_index(&current, self.cursor_col);
        let (prefix, suffix) = current.split_at(byte_idx);

        let parts: Vec<&str> = allowed.split('\n').collect();
        let last = parts[parts.len() - 1];

        if parts.len() == 1 {
            self.lines[row] = format!("{prefix}{last}{suffix}");
            self.cursor_col += inserted;
            return inserted;
        }

        let mut new_lines: Vec<String> = Vec::with_capacity(parts.len());
        new_lines.push(format!("{prefix}{}", parts[0]));
        new_lines.extend(parts[1..parts.len() - 1].iter().map(|p| (*p).to_string()));
        new_lines.push(format!("{last}{suffix}"));

        self.lines.splice(row..=row, new_lines);
        self.cursor_row = row + parts.len() - 1;
        self.cursor_col = line_char_len(last);
        inserted
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    pub fn insert_newline(&mut self) {
        self.insert_str("\n");
    }

    /// Delete key semantics.
    pub fn delete_next_char(&mut self) {
        let row = self.cursor_row;
        let col = self.cursor_col;

        if col >= line_char_len(&self.lines[row]) {
            if row + 1 < self.lines.len() {
                let next = self.lines.remove(row + 1);
                self.lines[row].push_str(&next);
            }
            return;
        }

        let line = &mut self.lines[row];
        let start = char_to_byte_index(line, col);
        let end = char_to_byte_index(line, col + 1);
        line.replace_range(start..end, "");
    }

    /// Backspace semantics.
    pub fn delete_prev_char(&mut self) {
        if self.cursor_col > 0 {
            let col = self.cursor_col - 1;
            let line = &mut self.lines[self.cursor_row];
            let start = char_to_byte_index(line, col);
            let end = char_to_byte_index(line, col + 1);
            line.replace_range(start..end, "");
            self.cursor_col = col;
            return;
        }

        if self.cursor_row == 0 {
            return;
        }

        let row = self.cursor_row;
        let prev_len = line_char_len(&self.lines[row - 1]);
        let current = self.lines.remove(row);
        self.lines[row - 1].push_str(&current);
        self.cursor_row -= 1;
        self.cursor_col = prev_len;
    }

    /// Deletes from the start of the line to the cursor.
    pub fn delete_line_by_head(&mut self) {
        let line = &mut self.lines[self.cursor_row];
        let byte_idx = char_to_byte_index(line, self.cursor_col);
        line.replace_range(..byte_idx, "");
        self.cursor_col = 0;
    }

    /// Deletes from the cursor to the end of the line.
    pub fn delete_line_by_end(&mut self) {
        let line = &mut self.lines[self.cursor_row];
        let byte_idx = char_to_byte_index(line, self.cursor_col);
        line.truncate(byte_idx);
    }

    /// Deletes the word (and any whitespace after it) left of the cursor.
    ///
    /// At the start of a line this joins with the previous line instead.
    pub fn delete_word_left(&mut self) {
        if self.cursor_col == 0 {
            self.delete_prev_char();
            return;
        }

        let line = &mut self.lines[self.cursor_row];
        let chars: Vec<char> = line.chars().collect();
        let mut idx = self.cursor_col.min(chars.len());
        while idx > 0 && chars[idx - 1].is_whitespace() {
            idx -= 1;
        }
        while idx > 0 && !chars[idx - 1].is_whitespace() {
            idx -= 1;
        }

        let start = char_to_byte_index(line, idx);
        let end = char_to_byte_index(line, self.cursor_col);
        line.replace_range(start..end, "");
        self.cursor_col = idx;
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        match movement {
            CursorMove::Up => {
                if self.cursor_row > 0 {
                    self.cursor_row -= 1;
                    self.clamp_col();
                }
            }
            CursorMove::Down => {
                if self.cursor_row + 1 < self.lines.len() {
                    self.cursor_row += 1;
                    self.clamp_col();
                }
            }
            CursorMove::Forward => {
                if self.cursor_col < line_char_len(&self.lines[self.cursor_row]) {
                    self.cursor_col += 1;
                } else if self.cursor_row + 1 < self.lines.len() {
                    self.cursor_row += 1;
                    self.cursor_col = 0;
                }
            }
            CursorMove::Back => {
                if self.cursor_col > 0 {
                    self.cursor_col -= 1;
                } else if self.cursor_row > 0 {
                    self.cursor_row -= 1;
                    self.cursor_col = line_char_len(&self.lines[self.cursor_row]);
                }
            }
            CursorMove::Head => self.cursor_col = 0,
            CursorMove::End => self.cursor_col = line_char_len(&self.lines[self.cursor_row]),
            CursorMove::Top => {
                self.cursor_row = 0;
                self.cursor_col = 0;
            }
            CursorMove::Bottom => {
                self.cursor_row = self.lines.len() - 1;
                self.cursor_col = line_char_len(&self.lines[self.cursor_row]);
            }
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.lines.push(String::new());
        self.cursor_row = 0;
        self.cursor_col = 0;
    }

    fn clamp_col(&mut self) {
        let len = line_char_len(&self.lines[self.cursor_row]);
        self.cursor_col = self.cursor_col.min(len);
    }
}

fn line_char_len(line: &str) -> usize {
    line.chars().count()
}

fn char_to_byte_index(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_with(text: &str) -> TextBuffer {
        let mut buf = TextBuffer::with_limit(1000);
        buf.insert_str(text);
        buf
    }

    #[test]
    fn insert_multiline_moves_cursor_to_end() {
        let buf = buffer_with("first\nsecond");
        assert_eq!(buf.lines(), ["first", "second"]);
        assert_eq!(buf.cursor(), (1, 6));
        assert_eq!(buf.text(), "first\nsecond");
    }

    #[test]
    fn insert_in_middle_keeps_suffix() {
        let mut buf = buffer_with("ad");
        buf.move_cursor(CursorMove::Back);
        buf.insert_str("bc");
        assert_eq!(buf.text(), "abcd");

        buf.insert_str("\n");
        assert_eq!(buf.lines(), ["abc", "d"]);
        assert_eq!(buf.cursor(), (1, 0));
    }

    #[test]
    fn char_count_includes_newlines() {
        let buf = buffer_with("ab\ncd");
        assert_eq!(buf.char_count(), 5);
    }

    #[test]
    fn insert_truncates_at_limit() {
        let mut buf = TextBuffer::with_limit(5);
        assert_eq!(buf.insert_str("hello world"), 5);
        assert_eq!(buf.text(), "hello");
        assert_eq!(buf.remaining(), 0);

        buf.insert_char('!');
        assert_eq!(buf.text(), "hello");
    }

    #[test]
    fn limit_counts_chars_not_bytes() {
        let mut buf = TextBuffer::with_limit(3);
        buf.insert_str("😊😊😊😊");
        assert_eq!(buf.text(), "😊😊😊");
    }

    #[test]
    fn backspace_joins_lines() {
        let mut buf = buffer_with("ab\ncd");
        buf.move_cursor(CursorMove::Head);
        buf.delete_prev_char();
        assert_eq!(buf.lines(), ["abcd"]);
        assert_eq!(buf.cursor(), (0, 2));
    }

    #[test]
    fn delete_joins_next_line() {
        let mut buf = buffer_with("ab\ncd");
        buf.move_cursor(CursorMove::Top);
        buf.move_cursor(CursorMove::End);
        buf.delete_next_char();
        assert_eq!(buf.lines(), ["abcd"]);
    }

    #[test]
    fn delete_word_left_stops_at_whitespace() {
        let mut buf = buffer_with("I feel nervous  ");
        buf.delete_word_left();
        assert_eq!(buf.text(), "I feel ");
        buf.delete_word_left();
        assert_eq!(buf.text(), "I ");
    }

    #[test]
    fn delete_line_by_head_and_end() {
        let mut buf = buffer_with("hello world");
        for _ in 0..5 {
            buf.move_cursor(CursorMove::Back);
        }
        buf.delete_line_by_end();
        assert_eq!(buf.text(), "hello ");
        buf.delete_line_by_head();
        assert_eq!(buf.text(), "");
        assert_eq!(buf.cursor(), (0, 0));
    }

    #[test]
    fn vertical_moves_clamp_column() {
        let mut buf = buffer_with("a\nlonger line");
        buf.move_cursor(CursorMove::Up);
        assert_eq!(buf.cursor(), (0, 1));
        buf.move_cursor(CursorMove::Down);
        assert_eq!(buf.cursor(), (1, 1));
    }

    #[test]
    fn blank_detection() {
        assert!(buffer_with(" \n\t ").is_blank());
        assert!(!buffer_with(" x ").is_blank());
    }

    #[test]
    fn clear_resets_cursor() {
        let mut buf = buffer_with("text\nmore");
        buf.clear();
        assert_eq!(buf.text(), "");
        assert_eq!(buf.cursor(), (0, 0));
        assert_eq!(buf.char_count(), 0);
    }
}
