//! Dashboard data model: categories, widgets and their chart data.
//!
//! A [`Category`] is a named, ordered group of [`Widget`]s. Each widget
//! carries a [`WidgetType`] that selects how its data is charted and a
//! [`WidgetData`] map whose insertion order is the chart order.

use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// Ordered mapping from a data label to its numeric value.
///
/// Iteration order is insertion order, which is also slice/bar order.
pub type WidgetData = IndexMap<String, f64>;

/// Chart kind used to visualize a widget's data.
///
/// Unknown tags are preserved as [`WidgetType::Unsupported`] so a widget
/// with a type this build does not know still renders (as a placeholder).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum WidgetType {
    /// Full pie, no inner hole.
    PieChart,
    /// Pie with an inner hole.
    DonutChart,
    /// Simple bar chart on a categorical axis.
    #[default]
    BarChart,
    /// Accepted as its own tag; currently drawn like [`WidgetType::BarChart`].
    StackedBarChart,
    /// A tag this build does not know how to draw.
    Unsupported(String),
}

impl WidgetType {
    /// Types offered by the add-widget dialog, in menu order.
    pub const SELECTABLE: [WidgetType; 4] = [
        WidgetType::BarChart,
        WidgetType::PieChart,
        WidgetType::DonutChart,
        WidgetType::StackedBarChart,
    ];

    /// Wire tag of this type (e.g. `"donut-chart"`).
    pub fn tag(&self) -> &str {
        match self {
            WidgetType::PieChart => "pie-chart",
            WidgetType::DonutChart => "donut-chart",
            WidgetType::BarChart => "bar-chart",
            WidgetType::StackedBarChart => "stacked-bar-chart",
            WidgetType::Unsupported(tag) => tag,
        }
    }

    /// Human-readable name shown in the add-widget dialog.
    pub fn display_name(&self) -> &str {
        match self {
            WidgetType::PieChart => "Pie Chart",
            WidgetType::DonutChart => "Donut Chart",
            WidgetType::BarChart => "Bar Chart",
            WidgetType::StackedBarChart => "Stacked Bar Chart",
            WidgetType::Unsupported(tag) => tag,
        }
    }

    /// Next selectable type, wrapping around. Unsupported types move to the first entry.
    pub fn next(&self) -> WidgetType {
        let pos = Self::SELECTABLE.iter().position(|t| t == self);
        match pos {
            Some(i) => Self::SELECTABLE[(i + 1) % Self::SELECTABLE.len()].clone(),
            None => Self::SELECTABLE[0].clone(),
        }
    }

    /// Previous selectable type, wrapping around.
    pub fn previous(&self) -> WidgetType {
        let len = Self::SELECTABLE.len();
        let pos = Self::SELECTABLE.iter().position(|t| t == self);
        match pos {
            Some(i) => Self::SELECTABLE[(i + len - 1) % len].clone(),
            None => Self::SELECTABLE[len - 1].clone(),
        }
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<&str> for WidgetType {
    fn from(s: &str) -> Self {
        match s {
            "pie-chart" => WidgetType::PieChart,
            "donut-chart" => WidgetType::DonutChart,
            "bar-chart" => WidgetType::BarChart,
            "stacked-bar-chart" => WidgetType::StackedBarChart,
            other => WidgetType::Unsupported(other.to_string()),
        }
    }
}

impl FromStr for WidgetType {
    type Err = std::convert::Infallible;

    /// Parsing never fails: unknown tags become `Unsupported`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// A single chart card on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    /// Identity key, unique across the whole tree.
    pub id: String,
    /// Display name; also what the search term matches against.
    pub name: String,
    /// Chart kind.
    pub widget_type: WidgetType,
    /// Chart data in display order.
    pub data: WidgetData,
}

impl Widget {
    /// Creates a widget from `(label, value)` pairs, keeping their order.
    pub fn new<I, L>(
        id: impl Into<String>,
        name: impl Into<String>,
        widget_type: WidgetType,
        data: I,
    ) -> Self
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            widget_type,
            data: data.into_iter().map(|(l, v)| (l.into(), v)).collect(),
        }
    }

    /// Case-insensitive substring match of `term` against the widget name.
    ///
    /// An empty term matches every widget.
    pub fn matches(&self, term: &str) -> bool {
        self.matches_lowercase(&term.to_lowercase())
    }

    /// Like [`Widget::matches`] with `needle` already lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }
}

/// A named group of widgets shown as one labeled section.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Section title; identity key among categories.
    pub name: String,
    /// Widgets in display order.
    pub widgets: Vec<Widget>,
}

impl Category {
    /// Creates a category with the given widgets.
    pub fn new(name: impl Into<String>, widgets: Vec<Widget>) -> Self {
        Self {
            name: name.into(),
            widgets,
        }
    }
}

/// Time window selected in the header.
///
/// Advisory only: the seed data is static, so the selection changes the
/// header label but not the charted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    /// Last 24 hours.
    Last24Hours,
    /// Last 7 days.
    #[default]
    Last7Days,
    /// Last 30 days.
    Last30Days,
    /// Last 90 days.
    Last90Days,
}

impl TimeRange {
    /// All ranges in selector order.
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Last24Hours,
        TimeRange::Last7Days,
        TimeRange::Last30Days,
        TimeRange::Last90Days,
    ];

    /// Window length in days.
    pub fn days(self) -> u32 {
        match self {
            TimeRange::Last24Hours => 1,
            TimeRange::Last7Days => 7,
            TimeRange::Last30Days => 30,
            TimeRange::Last90Days => 90,
        }
    }

    /// Selector label.
    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Last24Hours => "Last 24 hours",
            TimeRange::Last7Days => "Last 7 days",
            TimeRange::Last30Days => "Last 30 days",
            TimeRange::Last90Days => "Last 90 days",
        }
    }

    /// Next range in selector order, wrapping around.
    pub fn next(self) -> TimeRange {
        let i = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Local calendar date at which the window starts.
    pub fn start_date(self, now: chrono::DateTime<chrono::Local>) -> chrono::NaiveDate {
        (now - chrono::Duration::days(i64::from(self.days()))).date_naive()
    }
}

impl FromStr for TimeRange {
    type Err = String;

    /// Accepts the config spellings `"24h"`, `"1d"`, `"7d"`, `"30d"`, `"90d"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24h" | "1d" => Ok(TimeRange::Last24Hours),
            "7d" => Ok(TimeRange::Last7Days),
            "30d" => Ok(TimeRange::Last30Days),
            "90d" => Ok(TimeRange::Last90Days),
            _ => Err(format!(
                "invalid time range '{s}' (expected 24h, 7d, 30d or 90d)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_type_tags_parse_back() {
        for t in WidgetType::SELECTABLE {
            assert_eq!(WidgetType::from(t.tag()), t);
        }
    }

    #[test]
    fn unknown_tag_is_unsupported_not_error() {
        let t: WidgetType = "gauge-chart".parse().expect("parsing is total");
        assert_eq!(t, WidgetType::Unsupported("gauge-chart".to_string()));
        assert_eq!(t.to_string(), "gauge-chart");
    }

    #[test]
    fn default_widget_type_is_bar_chart() {
        assert_eq!(WidgetType::default(), WidgetType::BarChart);
    }

    #[test]
    fn widget_type_cycles_through_menu() {
        let mut t = WidgetType::BarChart;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(t.clone());
            t = t.next();
        }
        assert_eq!(t, WidgetType::BarChart);
        assert_eq!(seen, WidgetType::SELECTABLE.to_vec());
        assert_eq!(WidgetType::BarChart.previous(), WidgetType::StackedBarChart);
        assert_eq!(
            WidgetType::Unsupported("x".into()).next(),
            WidgetType::BarChart
        );
    }

    #[test]
    fn widget_data_keeps_insertion_order() {
        let w = Widget::new(
            "w",
            "W",
            WidgetType::PieChart,
            [("Zulu", 1.0), ("Alpha", 2.0), ("Mike", 3.0)],
        );
        let labels: Vec<&str> = w.data.keys().map(String::as_str).collect();
        assert_eq!(labels, ["Zulu", "Alpha", "Mike"]);
    }

    #[test]
    fn matches_is_case_insensitive_substring() {
        let w = Widget::new("w", "Workload Alerts", WidgetType::BarChart, [("a", 1.0)]);
        assert!(w.matches("workload"));
        assert!(w.matches("LOAD al"));
        assert!(w.matches(""));
        assert!(!w.matches("workloads"));
        assert!(!w.matches("alerts workload"));
    }

    #[test]
    fn matches_lowercase_expects_folded_needle() {
        let w = Widget::new("w", "Écran Alerts", WidgetType::BarChart, [("a", 1.0)]);
        assert!(w.matches_lowercase("écran"));
        assert!(w.matches_lowercase(""));
        assert!(!w.matches_lowercase("ÉCRAN"));
        assert!(w.matches("ÉCRAN"));
    }

    #[test]
    fn time_range_defaults_and_cycles() {
        assert_eq!(TimeRange::default(), TimeRange::Last7Days);
        assert_eq!(TimeRange::Last7Days.next(), TimeRange::Last30Days);
        assert_eq!(TimeRange::Last90Days.next(), TimeRange::Last24Hours);
        assert_eq!(TimeRange::Last24Hours.days(), 1);
        assert_eq!(TimeRange::Last90Days.label(), "Last 90 days");
    }

    #[test]
    fn time_range_parses_config_spellings() {
        assert_eq!("24h".parse(), Ok(TimeRange::Last24Hours));
        assert_eq!("30d".parse(), Ok(TimeRange::Last30Days));
        assert!("2w".parse::<TimeRange>().is_err());
    }

    #[test]
    fn time_range_start_date_is_days_before_now() {
        use chrono::TimeZone;
        let now = chrono::Local
            .with_ymd_and_hms(2026, 10, 14, 12, 0, 0)
            .single()
            .expect("unambiguous local time");
        let start = TimeRange::Last7Days.start_date(now);
        assert_eq!(
            start,
            chrono::NaiveDate::from_ymd_opt(2026, 10, 7).expect("valid date")
        );
    }
}
