//! Chart card rendering.
//!
//! A card draws one widget's [`Visualization`] inside a bordered block: a
//! braille canvas for pie and donut charts, ratatui's `BarChart` for bars,
//! a legend and a tooltip line for the focused data item.

use crate::chart::{render_widget, BarSeries, PieChart, Visualization, UNSUPPORTED_TEXT};
use crate::model::Widget;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Bar, BarChart, BarGroup, Block, Borders, Paragraph,
    },
    Frame,
};

/// Text shown for a widget with an empty data map.
pub const NO_DATA_TEXT: &str = "No data";

/// Text of the trailing card in each category.
pub const ADD_CARD_TEXT: &str = "+ Add Widget";

/// Legend marker glyph.
const LEGEND_MARKER: &str = "■ ";

/// Gap between bars, in columns.
const BAR_GAP: u16 = 1;

/// Renders `widget` as a card in `area`.
///
/// When `focused`, the border is highlighted and the tooltip shows data
/// item `item_index`.
pub fn render_card(
    frame: &mut Frame,
    area: Rect,
    widget: &Widget,
    focused: bool,
    item_index: usize,
) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", widget.name),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let visualization = render_widget(widget);
    let tooltip = focused.then_some(item_index);
    match &visualization {
        Visualization::Unsupported { type_tag } => render_unsupported(frame, inner, type_tag),
        _ if widget.data.is_empty() => render_centered(
            frame,
            inner,
            vec![Line::styled(NO_DATA_TEXT, Style::default().fg(Color::DarkGray))],
        ),
        Visualization::Pie(pie) => render_pie_card(frame, inner, pie, tooltip),
        Visualization::Bar(series) => render_bar_card(frame, inner, series, tooltip),
    }
}

/// Renders the "+ Add Widget" card closing a category.
pub fn render_add_card(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    render_centered(
        frame,
        inner,
        vec![
            Line::styled(ADD_CARD_TEXT, Style::default().fg(Color::Cyan)),
            Line::styled("[a]", Style::default().fg(Color::DarkGray)),
        ],
    );
}

fn render_unsupported(frame: &mut Frame, area: Rect, type_tag: &str) {
    render_centered(
        frame,
        area,
        vec![
            Line::styled(UNSUPPORTED_TEXT, Style::default().fg(Color::Red)),
            Line::styled(format!("({type_tag})"), Style::default().fg(Color::DarkGray)),
        ],
    );
}

/// Draws `lines` centered horizontally and vertically in `area`.
fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    let height = (lines.len() as u16).min(area.height);
    let top = area.y + (area.height - height) / 2;
    let centered = Rect::new(area.x, top, area.width, height);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
}

fn render_pie_card(frame: &mut Frame, area: Rect, pie: &PieChart, tooltip: Option<usize>) {
    let [body, tooltip_area] = split_tooltip(area);
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(body);

    let points = pie_points(pie, halves[0].width, halves[0].height);
    let aspect = aspect_ratio(halves[0].width, halves[0].height);
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-aspect, aspect])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            for (slice, coords) in pie.slices.iter().zip(&points) {
                ctx.draw(&Points {
                    coords,
                    color: slice.color,
                });
            }
        });
    frame.render_widget(canvas, halves[0]);

    let legend: Vec<Line> = pie
        .slices
        .iter()
        .enumerate()
        .map(|(i, s)| legend_line(&s.label, s.value, s.color, tooltip == Some(i)))
        .collect();
    frame.render_widget(Paragraph::new(legend), halves[1]);

    if let Some(slice) = tooltip.and_then(|i| pie.slices.get(i)) {
        let total = pie.total();
        let share = if total > 0.0 {
            format!(" ({:.1}%)", slice.value / total * 100.0)
        } else {
            String::new()
        };
        let text = format!("{}: {}{share}", slice.label, format_value(slice.value));
        frame.render_widget(tooltip_paragraph(text), tooltip_area);
    }
}

fn render_bar_card(frame: &mut Frame, area: Rect, series: &BarSeries, tooltip: Option<usize>) {
    let [body, tooltip_area] = split_tooltip(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(body);

    let bars: Vec<Bar> = series
        .bars
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let mut style = Style::default().fg(series.fill);
            if tooltip == Some(i) {
                style = style.add_modifier(Modifier::BOLD);
            }
            Bar::default()
                .value(bar_value(point.value))
                .text_value(format_value(point.value))
                .label(Line::from(point.label.clone()))
                .style(style)
        })
        .collect();
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(rows[0].width, bars.len()))
        .bar_gap(BAR_GAP)
        .max(bar_value(series.y_max).max(1));
    frame.render_widget(chart, rows[0]);

    if series.legend {
        let legend = Line::from(vec![
            Span::styled(LEGEND_MARKER, Style::default().fg(series.fill)),
            Span::raw("value"),
        ]);
        frame.render_widget(Paragraph::new(legend), rows[1]);
    }

    if let Some(point) = tooltip.and_then(|i| series.bars.get(i)) {
        let text = format!("{}: {}", point.label, format_value(point.value));
        frame.render_widget(tooltip_paragraph(text), tooltip_area);
    }
}

/// Splits off the bottom row for the tooltip.
fn split_tooltip(area: Rect) -> [Rect; 2] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    [rows[0], rows[1]]
}

fn tooltip_paragraph(text: String) -> Paragraph<'static> {
    Paragraph::new(Line::styled(
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))
}

fn legend_line(label: &str, value: f64, color: Color, highlighted: bool) -> Line<'static> {
    let label_style = if highlighted {
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(LEGEND_MARKER, Style::default().fg(color)),
        Span::styled(label.to_string(), label_style),
        Span::styled(
            format!(" {}", format_value(value)),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

/// Formats a data value, dropping the fraction for whole numbers.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// Bar height in chart units. Negative and non-finite values draw as empty.
fn bar_value(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

/// Widest bar that fits `count` bars with gaps into `width` columns.
fn bar_width(width: u16, count: usize) -> u16 {
    let count = u16::try_from(count).unwrap_or(u16::MAX).max(1);
    let gaps = BAR_GAP.saturating_mul(count - 1);
    (width.saturating_sub(gaps) / count).max(1)
}

/// Half-width of the canvas x range that keeps circles round.
///
/// A cell holds 2x4 braille dots and is about twice as tall as it is
/// wide, so dots are square.
fn aspect_ratio(width: u16, height: u16) -> f64 {
    if height == 0 {
        return 1.0;
    }
    f64::from(width) * 2.0 / (f64::from(height) * 4.0)
}

/// Braille dot centers covered by each slice, indexed like `pie.slices`.
///
/// The ring spans the hole radius to the unit circle.
fn pie_points(pie: &PieChart, width: u16, height: u16) -> Vec<Vec<(f64, f64)>> {
    let mut points = vec![Vec::new(); pie.slices.len()];
    let dots_x = usize::from(width) * 2;
    let dots_y = usize::from(height) * 4;
    if dots_x == 0 || dots_y == 0 {
        return points;
    }
    let aspect = aspect_ratio(width, height);
    let hole = pie.hole_ratio();
    for py in 0..dots_y {
        let y = 1.0 - (py as f64 + 0.5) / dots_y as f64 * 2.0;
        for px in 0..dots_x {
            let x = ((px as f64 + 0.5) / dots_x as f64 * 2.0 - 1.0) * aspect;
            let r = x.hypot(y);
            if r > 1.0 || r < hole {
                continue;
            }
            if let Some(i) = pie.slice_at_angle(y.atan2(x)) {
                points[i].push((x, y));
            }
        }
    }
    points
}
