//! Feedback panel view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use reflect_core::analysis::AnalysisResult;
use reflect_core::theme::{EmotionTheme, Rgb, theme_for};
use unicode_width::UnicodeWidthStr;

use crate::render::spinner_glyph;
use crate::state::{AppState, ViewState};

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// One row of half-blocks shading across the theme gradient.
fn gradient_bar(theme: &EmotionTheme, width: u16) -> Line<'static> {
    let width = width.max(1);
    let spans: Vec<Span<'static>> = (0..width)
        .map(|i| {
            let t = if width == 1 {
                0.0
            } else {
                f32::from(i) / f32::from(width - 1)
            };
            Span::styled("▀", Style::default().fg(color(theme.gradient.at(t))))
        })
        .collect();
    Line::from(spans)
}

/// Lines of the result card, in display order.
pub fn result_lines(result: &AnalysisResult, width: u16) -> Vec<Line<'static>> {
    let theme = theme_for(&result.emotion);
    let accent = color(theme.gradient.from);
    let section = Style::default().fg(accent).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        gradient_bar(theme, width),
        Line::from(vec![
            Span::raw(format!("{} ", theme.emoji)),
            Span::styled(
                result.emotion.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("✔ {}% confidence", result.confidence_percent()),
            Style::default().fg(Color::Green),
        )),
        Line::default(),
        Line::from(Span::styled("Analysis", section)),
        Line::from(result.analysis.clone()),
    ];

    if !result.suggestions.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("💡 Suggestions for You", section)));
        for (i, suggestion) in result.suggestions.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("{}. ", i + 1), Style::default().fg(accent)),
                Span::raw(suggestion.clone()),
            ]));
        }
    }
    lines
}

/// Approximate rows after wrapping, used to bound scrolling.
fn wrapped_rows(lines: &[Line<'_>], width: u16) -> usize {
    let width = usize::from(width.max(1));
    lines
        .iter()
        .map(|line| {
            let w: usize = line.spans.iter().map(|s| s.content.width()).sum();
            w.div_ceil(width).max(1)
        })
        .sum()
}

fn result_block(result: &AnalysisResult) -> Block<'static> {
    let theme = theme_for(&result.emotion);
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(theme.gradient.to)))
        .title(" Result ")
        .title_bottom(
            Line::from(Span::styled(
                " PgUp/PgDn scroll ",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Right),
        )
}

/// Largest useful scroll offset for the result card drawn in `area`.
pub fn result_max_scroll(result: &AnalysisResult, area: Rect) -> u16 {
    let inner = result_block(result).inner(area);
    let rows = wrapped_rows(&result_lines(result, inner.width), inner.width);
    let max = rows.saturating_sub(usize::from(inner.height));
    u16::try_from(max).unwrap_or(u16::MAX)
}

fn render_result(state: &AppState, result: &AnalysisResult, frame: &mut Frame, area: Rect) {
    let block = result_block(result);
    let lines = result_lines(result, block.inner(area).width);
    let scroll = state.result_scroll.min(result_max_scroll(result, area));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_error(message: &str, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(Span::styled(
            " ⚠ Error ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::LightRed))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_loading(state: &AppState, frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", spinner_glyph(state)),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            "Analyzing your reflection...",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}

/// Renders whichever panel the current view calls for. Idle draws nothing.
pub fn render_feedback(state: &AppState, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    match &state.view {
        ViewState::Idle => {}
        ViewState::Loading { .. } => render_loading(state, frame, area),
        ViewState::Error(message) => render_error(message, frame, area),
        ViewState::Result(result) => render_result(state, result, frame, area),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            emotion: "Happy".to_string(),
            confidence: 0.9,
            analysis: "You sound upbeat.".to_string(),
            suggestions: vec!["Share it".to_string(), "Write it down".to_string()],
        }
    }

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn result_lines_number_suggestions_in_order() {
        let text: Vec<String> = result_lines(&sample(), 10).iter().map(plain).collect();
        assert_eq!(text[1], "😊 Happy");
        assert_eq!(text[2], "✔ 90% confidence");
        let first = text.iter().position(|l| l == "1. Share it").unwrap();
        let second = text.iter().position(|l| l == "2. Write it down").unwrap();
        assert!(first < second);
    }

    #[test]
    fn result_without_suggestions_omits_section() {
        let mut result = sample();
        result.suggestions.clear();
        let text: Vec<String> = result_lines(&result, 10).iter().map(plain).collect();
        assert!(!text.iter().any(|l| l.contains("Suggestions")));
    }

    #[test]
    fn gradient_bar_spans_full_width() {
        let bar = gradient_bar(theme_for("calm"), 12);
        assert_eq!(bar.spans.len(), 12);
        assert_eq!(bar.spans[0].style.fg, Some(color(theme_for("calm").gradient.from)));
        assert_eq!(bar.spans[11].style.fg, Some(color(theme_for("calm").gradient.to)));
    }

    #[test]
    fn result_max_scroll_is_zero_when_card_fits() {
        assert_eq!(result_max_scroll(&sample(), Rect::new(0, 0, 60, 30)), 0);
    }

    #[test]
    fn result_max_scroll_counts_hidden_rows() {
        // 10 content rows at width 58 inside a 4-row inner area.
        assert_eq!(result_max_scroll(&sample(), Rect::new(0, 0, 60, 6)), 6);
    }

    #[test]
    fn wrapped_rows_counts_overflow() {
        let lines = vec![Line::from("abcdef"), Line::default()];
        assert_eq!(wrapped_rows(&lines, 4), 3);
    }
}
