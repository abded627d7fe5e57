//! Form view.
//!
//! Renders the reflection field with its character counter and action hints
//! on the bottom border.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use super::TextBuffer;
use crate::render::spinner_glyph;
use crate::state::AppState;

/// Visible text rows inside the field.
const FORM_INNER_HEIGHT: u16 = 5;

/// Height of the form area, including borders.
pub const FORM_HEIGHT: u16 = FORM_INNER_HEIGHT + 2;

pub const PROMPT: &str = "How are you feeling today? What's on your mind?";
pub const PLACEHOLDER: &str = "I feel nervous about my first job interview...";

/// Wrapped textarea content with the cursor's visual position.
struct WrappedTextarea {
    lines: Vec<Line<'static>>,
    cursor_row: usize,
    cursor_col: usize,
}

/// Wraps by display width so wide characters (CJK, emoji) never overflow.
fn wrap_textarea(textarea: &TextBuffer, available_width: usize) -> WrappedTextarea {
    let (cursor_line, cursor_col) = textarea.cursor();

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut cursor_row = 0usize;
    let mut cursor_visual_col = 0usize;

    for (line_idx, logical_line) in textarea.lines().iter().enumerate() {
        let is_cursor_line = line_idx == cursor_line;
        let mut current = String::new();
        let mut width = 0usize;

        for (char_idx, ch) in logical_line.chars().enumerate() {
            let ch_width = ch.width().unwrap_or(0);
            if width + ch_width > available_width && width > 0 {
                lines.push(Line::from(std::mem::take(&mut current)));
                width = 0;
            }
            if is_cursor_line && char_idx == cursor_col {
                cursor_row = lines.len();
                cursor_visual_col = width;
            }
            current.push(ch);
            width += ch_width;
        }

        if is_cursor_line && cursor_col >= logical_line.chars().count() {
            cursor_row = lines.len();
            cursor_visual_col = width;
        }
        lines.push(Line::from(current));
    }

    WrappedTextarea {
        lines,
        cursor_row,
        cursor_col: cursor_visual_col,
    }
}

/// First row to show so the cursor stays in view.
fn scroll_offset(total_rows: usize, viewport: usize, cursor_row: usize) -> usize {
    if total_rows <= viewport {
        0
    } else {
        cursor_row
            .saturating_sub(viewport.saturating_sub(1))
            .min(total_rows - viewport)
    }
}

fn counter_line(state: &AppState) -> Line<'static> {
    Line::from(Span::styled(
        format!(
            " {}/{} characters ",
            state.form.char_count(),
            state.form.max_chars()
        ),
        Style::default().fg(Color::DarkGray),
    ))
}

fn hints_line(state: &AppState) -> Line<'static> {
    let key_style = Style::default().fg(Color::Cyan);
    let label_style = Style::default().fg(Color::DarkGray);

    if state.view.is_loading() {
        return Line::from(vec![
            Span::styled(format!(" {} ", spinner_glyph(state)), key_style),
            Span::styled("Analyzing... ", label_style),
        ]);
    }

    let submit_style = if state.form.is_blank() {
        label_style.add_modifier(Modifier::DIM)
    } else {
        key_style.add_modifier(Modifier::BOLD)
    };
    let mut spans = vec![
        Span::styled(" Enter ", submit_style),
        Span::styled("Analyze ", label_style),
    ];
    if state.view.can_reset() {
        spans.push(Span::styled("Esc ", key_style));
        spans.push(Span::styled("Reset ", label_style));
    }
    Line::from(spans)
}

/// Renders the form and places the terminal cursor inside it.
pub fn render_form(state: &AppState, frame: &mut Frame, area: Rect) {
    let loading = state.view.is_loading();
    let border_color = if loading { Color::DarkGray } else { Color::Blue };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Line::from(Span::styled(
            format!(" {PROMPT} "),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .title_bottom(counter_line(state).alignment(Alignment::Left))
        .title_bottom(hints_line(state).alignment(Alignment::Right));

    let inner = block.inner(area);
    if inner.width == 0 || inner.height == 0 {
        frame.render_widget(block, area);
        return;
    }

    if state.form.char_count() == 0 {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )))
        .block(block);
        frame.render_widget(placeholder, area);
        if !loading {
            frame.set_cursor_position((inner.x, inner.y));
        }
        return;
    }

    let wrapped = wrap_textarea(&state.form.textarea, inner.width as usize);
    let viewport = inner.height as usize;
    let offset = scroll_offset(wrapped.lines.len(), viewport, wrapped.cursor_row);

    let text_style = if loading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let visible: Vec<Line> = wrapped
        .lines
        .into_iter()
        .skip(offset)
        .take(viewport)
        .collect();
    frame.render_widget(Paragraph::new(visible).style(text_style).block(block), area);

    if loading {
        return;
    }
    let cursor_x = inner.x + wrapped.cursor_col as u16;
    let cursor_y = inner.y + wrapped.cursor_row.saturating_sub(offset) as u16;
    if cursor_x < inner.x + inner.width && cursor_y < inner.y + inner.height {
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}
