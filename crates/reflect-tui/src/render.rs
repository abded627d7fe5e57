//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use std::rc::Rc;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::common::truncate_with_ellipsis;
use crate::state::AppState;
use crate::{analysis, form};

pub const TITLE: &str = "🧠 Emotion Reflection Tool";
pub const SUBTITLE: &str = "Share your thoughts and discover insights about your emotional state";
pub const DISCLAIMER: &str = "This tool provides general emotional insights and is not a substitute for professional mental health care.";

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 2;
const STATUS_HEIGHT: u16 = 1;

/// Spinner frames for the loading indicator.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Ticks per spinner frame.
const SPINNER_SPEED_DIVISOR: usize = 6;

/// Current spinner glyph for this state's frame counter.
pub fn spinner_glyph(state: &AppState) -> &'static str {
    let idx = (state.spinner_frame / SPINNER_SPEED_DIVISOR) % SPINNER_FRAMES.len();
    SPINNER_FRAMES[idx]
}

fn screen_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(form::FORM_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area)
}

/// Area of the feedback panel for a terminal of this size.
pub fn feedback_area(area: Rect) -> Rect {
    screen_layout(area)[2]
}

/// Renders the entire screen.
pub fn render(state: &AppState, frame: &mut Frame) {
    let chunks = screen_layout(frame.area());

    render_header(frame, chunks[0]);
    form::render_form(state, frame, chunks[1]);
    analysis::render_feedback(state, frame, chunks[2]);
    render_footer(frame, chunks[3]);
    render_status_line(state, frame, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(DISCLAIMER)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, area);
}

fn render_status_line(state: &AppState, frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD);
    let label = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
        Span::styled(" Shift+Enter", key),
        Span::styled(" newline  ", label),
        Span::styled("Ctrl+C", key),
        Span::styled(" quit", label),
    ];
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let room = usize::from(area.width).saturating_sub(used + 3);
    if room > 0 {
        spans.push(Span::styled(
            format!("  {}", truncate_with_ellipsis(&state.endpoint, room)),
            label,
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
