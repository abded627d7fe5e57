//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use reflect_core::analysis::{AnalysisError, AnalysisResult};
use reflect_core::reflection::ReflectionText;

use crate::common::TaskId;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, ViewState};
use crate::{analysis, form, render};

/// Lines moved per PageUp/PageDown in the result panel.
const RESULT_SCROLL_STEP: u16 = 5;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Frame { width, height } => {
            app.viewport = Rect::new(0, 0, width, height);
            app.result_scroll = app.result_scroll.min(max_result_scroll(app));
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::AnalysisSettled { task, outcome } => {
            handle_settled(app, task, outcome);
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
            handle_key(app, key)
        }
        Event::Paste(text) => {
            if !app.view.is_loading() {
                form::handle_paste(&mut app.form, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl && matches!(key.code, KeyCode::Char('c' | 'q')) {
        return vec![UiEffect::Quit];
    }

    // The field is disabled while a request is in flight.
    if app.view.is_loading() {
        return vec![];
    }

    match key.code {
        KeyCode::Esc => reset(app),
        KeyCode::Char('r') if ctrl => reset(app),
        KeyCode::Enter if shift || alt => app.form.textarea.insert_newline(),
        KeyCode::Char('j') if ctrl => app.form.textarea.insert_newline(),
        KeyCode::Enter => return submit(app),
        KeyCode::PageUp => {
            app.result_scroll = app.result_scroll.saturating_sub(RESULT_SCROLL_STEP);
        }
        KeyCode::PageDown => {
            if app.view.result().is_some() {
                app.result_scroll = app
                    .result_scroll
                    .saturating_add(RESULT_SCROLL_STEP)
                    .min(max_result_scroll(app));
            }
        }
        _ => {
            form::handle_edit_key(&mut app.form, key);
        }
    }
    vec![]
}

/// Scroll bound for the result panel at the last known terminal size.
fn max_result_scroll(app: &AppState) -> u16 {
    app.view.result().map_or(0, |result| {
        analysis::result_max_scroll(result, render::feedback_area(app.viewport))
    })
}

fn reset(app: &mut AppState) {
    if app.view.can_reset() {
        tracing::debug!("form reset");
        app.reset();
    }
}

/// Validates the form and starts a request. Blank text shows the validation message instead.
fn submit(app: &mut AppState) -> Vec<UiEffect> {
    if !app.can_submit() {
        return vec![];
    }

    let text = match ReflectionText::parse(&app.form.text(), app.form.max_chars()) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(kind = %err.kind, "submission rejected");
            app.view = ViewState::Error(err.message);
            return vec![];
        }
    };

    let task = app.task_seq.next_id();
    tracing::info!(task = task.0, chars = text.char_count(), "submitting reflection");
    app.view = ViewState::Loading { task };
    app.result_scroll = 0;
    vec![UiEffect::AnalyzeReflection { task, text }]
}

fn handle_settled(
    app: &mut AppState,
    task: TaskId,
    outcome: Result<AnalysisResult, AnalysisError>,
) {
    match app.view {
        ViewState::Loading { task: active } if active == task => {}
        _ => {
            tracing::debug!(task = task.0, "ignoring stale analysis result");
            return;
        }
    }

    app.view = match outcome {
        Ok(result) => ViewState::Result(result),
        Err(err) => ViewState::Error(err.message),
    };
}
