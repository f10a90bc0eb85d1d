//! Application state and main event loop for the TUI.
//!
//! Manages terminal setup/teardown, panic hooks, and the core render loop.

mod update;

use crate::chart::render_widget;
use crate::dashboard::Dashboard;
use crate::tui::event::{handle_key_event, Event, EventHandler};
use crate::tui::ui::render_dashboard;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::{Duration, Instant};

/// Default input poll / redraw interval.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(250);

/// How long a footer status message stays visible.
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Which keystroke handler is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation and commands.
    #[default]
    Normal,
    /// Keystrokes edit the search term.
    Search,
    /// Keystrokes edit the add-widget dialog.
    AddDialog,
}

/// Focused card, as positions in the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    /// Position of the category among the visible categories.
    pub category: usize,
    /// Position of the widget among the category's visible widgets.
    pub widget: usize,
}

/// Core application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Dashboard view-model.
    pub dashboard: Dashboard,
    /// Focused card, `None` when nothing is visible.
    pub focus: Option<Focus>,
    /// Data item of the focused card surfaced by the tooltip.
    pub item_index: usize,
    /// Active keystroke handler.
    pub mode: InputMode,
    /// Temporary status message shown in footer, with expiry time.
    pub status_message: Option<(String, Instant)>,
    /// Input poll / redraw interval.
    pub tick_rate: Duration,
    /// Count of ticks processed.
    pub tick_count: u64,
}

impl App {
    /// Creates an app over `dashboard`, focusing the first visible card.
    pub fn new(dashboard: Dashboard) -> Self {
        let mut app = Self {
            should_quit: false,
            dashboard,
            focus: None,
            item_index: 0,
            mode: InputMode::Normal,
            status_message: None,
            tick_rate: DEFAULT_TICK_RATE,
            tick_count: 0,
        };
        app.clamp_focus();
        app
    }

    /// Sets the redraw tick interval.
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Replaces the search term and keeps focus on a visible card.
    pub fn set_search_term(&mut self, term: String) {
        self.dashboard.set_search_term(term);
        self.clamp_focus();
    }

    /// Root `(category, widget)` indices of the focused card.
    pub fn focused_root(&self) -> Option<(usize, usize)> {
        let focus = self.focus?;
        let view = self.dashboard.filtered();
        let category = view.get(focus.category)?;
        let (widget, _) = category.widgets.get(focus.widget)?;
        Some((category.index, *widget))
    }

    /// Number of data items in the focused card.
    fn focused_item_count(&self) -> usize {
        self.focused_root()
            .and_then(|(c, w)| self.dashboard.categories().get(c)?.widgets.get(w))
            .map(|widget| render_widget(widget).items().len())
            .unwrap_or(0)
    }

    /// Visible widget count of each visible category.
    fn view_shape(&self) -> Vec<usize> {
        self.dashboard
            .filtered()
            .iter()
            .map(|c| c.widgets.len())
            .collect()
    }

    /// Pulls `focus` back into the filtered view after it changed shape.
    ///
    /// Focus lands on the first card when nothing was focused, and becomes
    /// `None` when the view is empty.
    pub fn clamp_focus(&mut self) {
        let shape = self.view_shape();
        if shape.is_empty() {
            self.focus = None;
            self.item_index = 0;
            return;
        }
        let focus = self.focus.unwrap_or(Focus {
            category: 0,
            widget: 0,
        });
        let category = focus.category.min(shape.len() - 1);
        let widget = focus.widget.min(shape[category] - 1);
        self.set_focus(Focus { category, widget });
        self.item_index = self
            .item_index
            .min(self.focused_item_count().saturating_sub(1));
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus != Some(focus) {
            self.focus = Some(focus);
            self.item_index = 0;
        }
    }

    /// Moves focus to the next card, continuing into the next category.
    pub fn focus_next(&mut self) {
        let Some(focus) = self.focus else { return };
        let shape = self.view_shape();
        let Some(&count) = shape.get(focus.category) else { return };
        if focus.widget + 1 < count {
            self.set_focus(Focus {
                widget: focus.widget + 1,
                ..focus
            });
        } else if focus.category + 1 < shape.len() {
            self.set_focus(Focus {
                category: focus.category + 1,
                widget: 0,
            });
        }
    }

    /// Moves focus to the previous card, continuing into the previous category.
    pub fn focus_previous(&mut self) {
        let Some(focus) = self.focus else { return };
        let shape = self.view_shape();
        if focus.widget > 0 {
            self.set_focus(Focus {
                widget: focus.widget - 1,
                ..focus
            });
        } else if let Some(&count) = focus.category.checked_sub(1).and_then(|c| shape.get(c)) {
            self.set_focus(Focus {
                category: focus.category - 1,
                widget: count - 1,
            });
        }
    }

    /// Moves focus to the next category, keeping the column where possible.
    pub fn focus_next_category(&mut self) {
        let Some(focus) = self.focus else { return };
        let category = focus.category + 1;
        if let Some(&count) = self.view_shape().get(category) {
            self.set_focus(Focus {
                category,
                widget: focus.widget.min(count - 1),
            });
        }
    }

    /// Moves focus to the previous category, keeping the column where possible.
    pub fn focus_previous_category(&mut self) {
        let Some(focus) = self.focus else { return };
        let Some(category) = focus.category.checked_sub(1) else { return };
        if let Some(&count) = self.view_shape().get(category) {
            self.set_focus(Focus {
                category,
                widget: focus.widget.min(count - 1),
            });
        }
    }

    /// Moves the tooltip to the next data item, wrapping around.
    pub fn next_item(&mut self) {
        let count = self.focused_item_count();
        if count > 0 {
            self.item_index = (self.item_index + 1) % count;
        }
    }

    /// Moves the tooltip to the previous data item, wrapping around.
    pub fn previous_item(&mut self) {
        let count = self.focused_item_count();
        if count > 0 {
            self.item_index = (self.item_index + count - 1) % count;
        }
    }

    /// Opens the add dialog for the focused category, or the first category
    /// when nothing is visible.
    pub fn open_add_dialog(&mut self) {
        let target = match self.focused_root() {
            Some((category, _)) => Some(category),
            None if !self.dashboard.categories().is_empty() => Some(0),
            None => None,
        };
        match target {
            Some(category) => {
                self.dashboard.form.open_for(category);
                self.mode = InputMode::AddDialog;
            }
            None => self.set_status("No category to add a widget to"),
        }
    }

    /// Shows `message` in the footer for [`STATUS_MESSAGE_TTL`].
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now() + STATUS_MESSAGE_TTL));
    }

    /// Clears the status message if its expiry time has passed.
    pub fn expire_status_message(&mut self) {
        if let Some((_, expiry)) = &self.status_message {
            if Instant::now() >= *expiry {
                self.status_message = None;
            }
        }
    }

    /// Runs the TUI application: sets up terminal, enters event loop, restores on exit.
    pub async fn run(&mut self) -> io::Result<()> {
        // Install panic hook that restores terminal before printing panic info
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        setup_terminal()?;

        let result = self.event_loop().await;

        restore_terminal()?;
        result
    }

    /// Main event loop: renders UI and processes events.
    async fn event_loop(&mut self) -> io::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        let event_handler = EventHandler::new(self.tick_rate);
        let mut reader = EventStream::new();

        terminal.draw(|frame| render_dashboard(frame, self))?;

        while !self.should_quit {
            let should_render = match event_handler.next(&mut reader).await? {
                Event::Key(key) => {
                    let action = handle_key_event(self, key);
                    self.dispatch(action);
                    true
                }
                Event::Tick => {
                    self.tick_count += 1;
                    let had_message = self.status_message.is_some();
                    self.expire_status_message();
                    had_message && self.status_message.is_none()
                }
                Event::Resize(_, _) => true,
            };

            if should_render && !self.should_quit {
                terminal.draw(|frame| render_dashboard(frame, self))?;
            }
        }
        tracing::debug!("event loop finished after {} ticks", self.tick_count);
        Ok(())
    }
}

/// Enables raw mode and switches to the alternate screen.
fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests;
