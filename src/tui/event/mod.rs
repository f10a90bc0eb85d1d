//! Event handling for the TUI.
//!
//! Wraps crossterm events and adds a tick variant for periodic UI refresh.
//! Key handling depends on the app's [`InputMode`].

use crate::dashboard::FormField;
use crate::tui::app::{App, InputMode};
use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;

/// Application-level event variants.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI refresh.
    Tick,
}

/// Event handler that merges terminal input events with periodic ticks.
pub struct EventHandler {
    /// Tick interval duration.
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new EventHandler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event, returning either a terminal event or a tick.
    ///
    /// Key releases and repeats are skipped, as are focus and paste events.
    pub async fn next(&self, reader: &mut EventStream) -> std::io::Result<Event> {
        let mut tick = interval(self.tick_rate);
        // Consume the first immediate tick
        tick.tick().await;

        loop {
            tokio::select! {
                maybe_event = reader.next() => {
                    match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                            return Ok(Event::Key(key));
                        }
                        Some(Ok(CrosstermEvent::Resize(w, h))) => return Ok(Event::Resize(w, h)),
                        Some(Err(e)) => return Err(e),
                        Some(Ok(_)) => continue,
                        None => return Err(std::io::Error::new(
                            std::io::ErrorKind::UnexpectedEof,
                            "event stream ended",
                        )),
                    }
                }
                _ = tick.tick() => {
                    return Ok(Event::Tick);
                }
            }
        }
    }
}

/// Action produced by handling a key event, applied by [`App::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action to take.
    None,
    /// Quit the application.
    Quit,
    /// Remove the widget at these root positions.
    RemoveWidget {
        /// Root category index.
        category: usize,
        /// Root widget index within the category.
        widget: usize,
    },
    /// Submit the add-widget dialog.
    SubmitForm,
}

/// Handles a key event by updating `app` or returning an action for the loop.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Action {
    if is_ctrl_c(key) {
        return Action::Quit;
    }
    match app.mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Search => handle_search_key(app, key),
        InputMode::AddDialog => handle_dialog_key(app, key),
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('/') => {
            app.mode = InputMode::Search;
            Action::None
        }
        KeyCode::Char('t') => {
            app.dashboard.cycle_time_range();
            Action::None
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.focus_next();
            Action::None
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.focus_previous();
            Action::None
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.focus_next_category();
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.focus_previous_category();
            Action::None
        }
        KeyCode::Char(']') => {
            app.next_item();
            Action::None
        }
        KeyCode::Char('[') => {
            app.previous_item();
            Action::None
        }
        KeyCode::Char('a') => {
            app.open_add_dialog();
            Action::None
        }
        KeyCode::Char('d') | KeyCode::Delete => match app.focused_root() {
            Some((category, widget)) => Action::RemoveWidget { category, widget },
            None => Action::None,
        },
        KeyCode::Esc => {
            app.set_search_term(String::new());
            Action::None
        }
        _ => Action::None,
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.mode = InputMode::Normal,
        KeyCode::Backspace => {
            let mut term = app.dashboard.search_term.clone();
            term.pop();
            app.set_search_term(term);
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.set_search_term(String::new());
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let term = format!("{}{c}", app.dashboard.search_term);
            app.set_search_term(term);
        }
        _ => {}
    }
    Action::None
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Action {
    let form = &mut app.dashboard.form;
    match (key.code, form.focus) {
        (KeyCode::Esc, _) => {
            form.close();
            app.mode = InputMode::Normal;
        }
        (KeyCode::Enter, _) => return Action::SubmitForm,
        (KeyCode::Tab | KeyCode::BackTab, _) => form.toggle_focus(),
        (KeyCode::Right, _) | (KeyCode::Char(' '), FormField::Type) => form.next_type(),
        (KeyCode::Left, _) => form.previous_type(),
        (KeyCode::Backspace, FormField::Name) => form.backspace(),
        (KeyCode::Char(c), FormField::Name) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.push_char(c)
        }
        _ => {}
    }
    Action::None
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
}
