//! Widget renderer: turns a [`Widget`] into a chart description.
//!
//! [`render_widget`] is a pure function of the widget's type and data. The
//! returned [`Visualization`] carries everything the drawing layer needs
//! (ordered items, colors, radii, axis toggles) and nothing else.
//!
//! | Widget type          | Visualization   | Notes                          |
//! |----------------------|-----------------|--------------------------------|
//! | `pie-chart`          | `Pie`           | inner radius 0                 |
//! | `donut-chart`        | `Pie`           | inner radius 60 of 80          |
//! | `bar-chart`          | `Bar`           | single fill color              |
//! | `stacked-bar-chart`  | `Bar`           | drawn like `bar-chart`         |
//! | anything else        | `Unsupported`   | placeholder text               |

use crate::model::{Widget, WidgetType};
use ratatui::style::Color;
use std::f64::consts::TAU;

/// Slice palette, applied by slice index modulo its length.
pub const PALETTE: [Color; 4] = [
    Color::Rgb(0x00, 0x88, 0xFE),
    Color::Rgb(0x00, 0xC4, 0x9F),
    Color::Rgb(0xFF, 0xBB, 0x28),
    Color::Rgb(0xFF, 0x80, 0x42),
];

/// Fill color of every bar.
pub const BAR_FILL: Color = Color::Rgb(0x88, 0x84, 0xD8);

/// Outer radius of pie and donut charts.
pub const OUTER_RADIUS: u16 = 80;

/// Inner radius of donut charts.
pub const DONUT_INNER_RADIUS: u16 = 60;

/// Text drawn in place of a chart for unknown widget types.
pub const UNSUPPORTED_TEXT: &str = "Unsupported widget type";

/// One pie slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    /// Data label.
    pub label: String,
    /// Data value.
    pub value: f64,
    /// Palette color for this slice position.
    pub color: Color,
}

/// Pie or donut chart description.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    /// Slices in data order.
    pub slices: Vec<Slice>,
    /// Hole radius; 0 for a full pie.
    pub inner_radius: u16,
    /// Outer radius.
    pub outer_radius: u16,
    /// Show a legend of labels.
    pub legend: bool,
    /// Surface label and value of the focused slice.
    pub tooltip: bool,
}

impl PieChart {
    /// Sum of all slice values.
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Hole size as a fraction of the outer radius.
    pub fn hole_ratio(&self) -> f64 {
        if self.outer_radius == 0 {
            0.0
        } else {
            f64::from(self.inner_radius) / f64::from(self.outer_radius)
        }
    }

    /// Index of the slice covering `angle`, in radians counter-clockwise from 3 o'clock.
    ///
    /// Slices are laid out in data order starting at angle 0, each spanning
    /// a share of the full turn proportional to its value. Returns `None`
    /// when the chart has no positive total.
    pub fn slice_at_angle(&self, angle: f64) -> Option<usize> {
        let total = self.total();
        if total.is_nan() || total <= 0.0 {
            return None;
        }
        let target = angle.rem_euclid(TAU) / TAU * total;
        let mut acc = 0.0;
        let mut last_visible = None;
        for (i, slice) in self.slices.iter().enumerate() {
            if slice.value <= 0.0 {
                continue;
            }
            acc += slice.value;
            last_visible = Some(i);
            if target < acc {
                return Some(i);
            }
        }
        // Rounding can leave the very end of the turn uncovered.
        last_visible
    }
}

/// One bar on the categorical axis.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPoint {
    /// Data label (x-axis category).
    pub label: String,
    /// Data value (bar height).
    pub value: f64,
}

/// Bar chart description.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// Bars in data order.
    pub bars: Vec<BarPoint>,
    /// Fill color shared by all bars.
    pub fill: Color,
    /// Top of the y-axis, scaled to the data.
    pub y_max: f64,
    /// Draw the categorical x-axis labels.
    pub x_axis: bool,
    /// Draw the value axis.
    pub y_axis: bool,
    /// Show a legend for the series.
    pub legend: bool,
    /// Surface label and value of the focused bar.
    pub tooltip: bool,
}

/// What to draw for a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Visualization {
    /// Pie or donut chart.
    Pie(PieChart),
    /// Bar chart.
    Bar(BarSeries),
    /// Placeholder for a type this build cannot draw.
    Unsupported {
        /// The unrecognized type tag.
        type_tag: String,
    },
}

impl Visualization {
    /// Ordered `(label, value)` pairs shown by the chart.
    ///
    /// Empty for the unsupported placeholder.
    pub fn items(&self) -> Vec<(&str, f64)> {
        match self {
            Visualization::Pie(pie) => pie
                .slices
                .iter()
                .map(|s| (s.label.as_str(), s.value))
                .collect(),
            Visualization::Bar(series) => series
                .bars
                .iter()
                .map(|b| (b.label.as_str(), b.value))
                .collect(),
            Visualization::Unsupported { .. } => Vec::new(),
        }
    }
}

/// Builds the visualization for `widget`.
pub fn render_widget(widget: &Widget) -> Visualization {
    match &widget.widget_type {
        WidgetType::PieChart => Visualization::Pie(pie_chart(widget, 0)),
        WidgetType::DonutChart => Visualization::Pie(pie_chart(widget, DONUT_INNER_RADIUS)),
        // Stacking is not implemented; both bar tags share one series.
        WidgetType::BarChart | WidgetType::StackedBarChart => {
            Visualization::Bar(bar_series(widget))
        }
        WidgetType::Unsupported(tag) => Visualization::Unsupported {
            type_tag: tag.clone(),
        },
    }
}

/// Palette color for slice position `index`.
pub fn slice_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

fn pie_chart(widget: &Widget, inner_radius: u16) -> PieChart {
    let slices = widget
        .data
        .iter()
        .enumerate()
        .map(|(i, (label, value))| Slice {
            label: label.clone(),
            value: *value,
            color: slice_color(i),
        })
        .collect();
    PieChart {
        slices,
        inner_radius,
        outer_radius: OUTER_RADIUS,
        legend: true,
        tooltip: true,
    }
}

fn bar_series(widget: &Widget) -> BarSeries {
    let bars: Vec<BarPoint> = widget
        .data
        .iter()
        .map(|(label, value)| BarPoint {
            label: label.clone(),
            value: *value,
        })
        .collect();
    let y_max = bars
        .iter()
        .map(|b| b.value)
        .fold(0.0_f64, f64::max)
        .max(1.0);
    BarSeries {
        bars,
        fill: BAR_FILL,
        y_max,
        x_axis: true,
        y_axis: true,
        legend: true,
        tooltip: true,
    }
}
