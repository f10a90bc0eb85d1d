//! Main rendering orchestration for the TUI dashboard.
//!
//! Provides the top-level `render_dashboard` function that composes the
//! header, category sections, footer and add-widget dialog.

use crate::dashboard::FormField;
use crate::filter::FilteredCategory;
use crate::tui::app::{App, InputMode};
use crate::tui::views::card::{render_add_card, render_card};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

/// Header text displayed at the top of the dashboard.
pub const HEADER_TEXT: &str = "Security Posture Dashboard";

/// Version string shown in the header (right-aligned).
const VERSION_TEXT: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Footer key hints per input mode.
const FOOTER_NORMAL: &str =
    "[/] Search  [t] Time range  [arrows/hjkl] Focus  [ [ ] ] Item  [a] Add  [d] Remove  [q] Quit";
const FOOTER_SEARCH: &str = "Type to filter  [Backspace] Delete  [Ctrl-U] Clear  [Enter/Esc] Done";
const FOOTER_DIALOG: &str = "[Tab] Field  [Left/Right] Type  [Enter] Add  [Esc] Cancel";

/// Shown in place of the body when the filter leaves nothing.
pub const EMPTY_VIEW_TEXT: &str = "No widgets match";

/// Placeholder in the empty search box.
const SEARCH_PLACEHOLDER: &str = "Search widgets...";

/// Title of the add-widget dialog.
pub const DIALOG_TITLE: &str = " Add Widget ";

/// Height of one card, borders included.
pub const CARD_HEIGHT: u16 = 12;

/// Width of the time range box in the header.
const TIME_RANGE_WIDTH: u16 = 36;

/// Number of card columns for a body `width` columns wide.
pub fn grid_columns(width: u16) -> usize {
    match width {
        w if w >= 120 => 3,
        w if w >= 80 => 2,
        _ => 1,
    }
}

/// Renders the full dashboard: header, category sections and footer, with
/// the add dialog on top when it is open.
pub fn render_dashboard(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(3), // search + time range
            Constraint::Min(0),    // categories
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_title(frame, chunks[0]);
    render_controls(frame, app, chunks[1]);
    render_body(frame, app, chunks[2]);
    render_footer(frame, app, chunks[3]);

    if app.mode == InputMode::AddDialog && app.dashboard.form.open {
        render_add_dialog(frame, app, area);
    }
}

/// Title (left) and version (right-aligned).
fn render_title(frame: &mut Frame, area: Rect) {
    let padding = (area.width as usize)
        .saturating_sub(HEADER_TEXT.len())
        .saturating_sub(VERSION_TEXT.len());
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            HEADER_TEXT,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(padding)),
        Span::styled(VERSION_TEXT, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(header, area);
}

/// Search box and time range selector.
fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(TIME_RANGE_WIDTH)])
        .split(area);

    let searching = app.mode == InputMode::Search;
    let search_border = if searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let term = &app.dashboard.search_term;
    let mut spans = if term.is_empty() && !searching {
        vec![Span::styled(
            SEARCH_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        vec![Span::raw(term.clone())]
    };
    if searching {
        spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
    }
    let search = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(search_border)
            .title(" Search [/] "),
    );
    frame.render_widget(search, chunks[0]);

    let range = app.dashboard.time_range;
    let since = range.start_date(chrono::Local::now());
    let time = Paragraph::new(Line::from(vec![
        Span::raw(range.label()),
        Span::styled(
            format!(" (since {})", since.format("%Y-%m-%d")),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Time range [t] "),
    );
    frame.render_widget(time, chunks[1]);
}

/// Category sections, scrolled so the focused category stays visible.
fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    let view = app.dashboard.filtered();
    if view.is_empty() {
        render_empty_view(frame, app, area);
        return;
    }

    let columns = grid_columns(area.width);
    let heights: Vec<u16> = view
        .iter()
        .map(|fc| section_height(fc.widgets.len() + 1, columns))
        .collect();
    let focused_category = app.focus.map(|f| f.category).unwrap_or(0);
    let first = first_visible_section(&heights, focused_category, area.height);

    let mut y = area.y;
    for (position, category) in view.iter().enumerate().skip(first) {
        if y >= area.bottom() {
            break;
        }
        let height = heights[position].min(area.bottom() - y);
        let section = Rect::new(area.x, y, area.width, height);
        let focused_widget = app
            .focus
            .filter(|f| f.category == position)
            .map(|f| f.widget);
        render_section(frame, section, category, focused_widget, app.item_index, columns);
        y += height;
    }
}

/// Rows taken by a section with `cards` cards laid out in `columns`.
fn section_height(cards: usize, columns: usize) -> u16 {
    let rows = u16::try_from(cards.div_ceil(columns.max(1))).unwrap_or(u16::MAX);
    rows.saturating_mul(CARD_HEIGHT).saturating_add(1)
}

/// First section to draw so that section `focused` ends inside `available` rows.
fn first_visible_section(heights: &[u16], focused: usize, available: u16) -> usize {
    let focused = focused.min(heights.len().saturating_sub(1));
    let mut first = 0;
    while first < focused {
        let needed: u32 = heights[first..=focused].iter().map(|&h| u32::from(h)).sum();
        if needed <= u32::from(available) {
            break;
        }
        first += 1;
    }
    first
}

/// One category: title row, then the card grid closed by the add card.
fn render_section(
    frame: &mut Frame,
    area: Rect,
    category: &FilteredCategory<'_>,
    focused_widget: Option<usize>,
    item_index: usize,
    columns: usize,
) {
    let title_style = if focused_widget.is_some() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let title = Paragraph::new(Line::styled(category.name().to_string(), title_style));
    frame.render_widget(title, Rect::new(area.x, area.y, area.width, 1));

    let grid = Rect::new(
        area.x,
        area.y + 1,
        area.width,
        area.height.saturating_sub(1),
    );
    let cards = category.widgets.len() + 1;
    let rows = cards.div_ceil(columns);
    let visible_rows = usize::from((grid.height / CARD_HEIGHT).max(1));
    let first_row = focused_widget
        .map(|w| (w / columns + 1).saturating_sub(visible_rows))
        .unwrap_or(0);

    let mut y = grid.y;
    for row in first_row..rows {
        if y >= grid.bottom() {
            break;
        }
        let height = CARD_HEIGHT.min(grid.bottom() - y);
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(Rect::new(grid.x, y, grid.width, height));
        for (column, cell) in cells.iter().enumerate() {
            let slot = row * columns + column;
            match category.widgets.get(slot) {
                Some((_, widget)) => {
                    render_card(frame, *cell, widget, focused_widget == Some(slot), item_index)
                }
                None if slot == category.widgets.len() => render_add_card(frame, *cell),
                None => {}
            }
        }
        y += height;
    }
}

fn render_empty_view(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::styled(
            format!("{EMPTY_VIEW_TEXT} \"{}\"", app.dashboard.search_term),
            Style::default().fg(Color::Yellow),
        ),
        Line::styled(
            "Press Esc to clear the search, or [a] to add a widget",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Key hints for the active mode, replaced by a live status message.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status_message {
        Some((msg, expiry)) if Instant::now() < *expiry => {
            Line::styled(msg.clone(), Style::default().fg(Color::Yellow))
        }
        _ => {
            let hints = match app.mode {
                InputMode::Normal => FOOTER_NORMAL,
                InputMode::Search => FOOTER_SEARCH,
                InputMode::AddDialog => FOOTER_DIALOG,
            };
            Line::styled(hints, Style::default().fg(Color::DarkGray))
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Modal dialog with the target category, name input and type selector.
fn render_add_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.dashboard.form;
    let dialog = centered_rect(area, 56, 9);
    frame.render_widget(Clear, dialog);

    let category = form
        .selected_category
        .and_then(|i| app.dashboard.categories().get(i))
        .map(|c| c.name.as_str())
        .unwrap_or("-");
    let field_style = |field: FormField| {
        if form.focus == field {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };
    let cursor = if form.focus == FormField::Name { "_" } else { "" };

    let lines = vec![
        Line::from(vec![
            Span::styled("Category: ", Style::default().fg(Color::DarkGray)),
            Span::raw(category.to_string()),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Name: ", field_style(FormField::Name)),
            Span::raw(format!("{}{cursor}", form.name)),
        ]),
        Line::from(vec![
            Span::styled("Type: ", field_style(FormField::Type)),
            Span::raw(format!("< {} >", form.widget_type.display_name())),
        ]),
        Line::raw(""),
        Line::styled(
            "[Enter] Add  [Tab] Field  [Esc] Cancel",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(DIALOG_TITLE),
    );
    frame.render_widget(paragraph, dialog);
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
