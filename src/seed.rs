//! Seed dataset loaded once at startup.

use crate::model::{Category, Widget, WidgetType};

/// Returns the initial category tree.
///
/// Every call builds a fresh copy; nothing is shared between dashboards.
pub fn seed_categories() -> Vec<Category> {
    vec![
        Category::new(
            "CNAPP Dashboard",
            vec![
                Widget::new(
                    "cloud-accounts",
                    "Cloud Accounts",
                    WidgetType::PieChart,
                    [("Connected", 2.0), ("Not Connected", 0.0)],
                ),
                Widget::new(
                    "cloud-account-risk-assessment",
                    "Cloud Account Risk Assessment",
                    WidgetType::DonutChart,
                    [
                        ("Failed", 1589.0),
                        ("Warning", 681.0),
                        ("Not Available", 386.0),
                        ("Passed", 7253.0),
                    ],
                ),
            ],
        ),
        Category::new(
            "CWPP Dashboard",
            vec![
                Widget::new(
                    "top-5-namespace-specific-alerts",
                    "Top 5 Namespace Specific Alerts",
                    WidgetType::BarChart,
                    [
                        ("Namespace 1", 5.0),
                        ("Namespace 2", 4.0),
                        ("Namespace 3", 3.0),
                        ("Namespace 4", 2.0),
                        ("Namespace 5", 1.0),
                    ],
                ),
                Widget::new(
                    "workload-alerts",
                    "Workload Alerts",
                    WidgetType::BarChart,
                    [
                        ("Critical", 10.0),
                        ("High", 20.0),
                        ("Medium", 30.0),
                        ("Low", 40.0),
                    ],
                ),
            ],
        ),
        Category::new(
            "Registry Scan",
            vec![
                Widget::new(
                    "image-risk-assessment",
                    "Image Risk Assessment",
                    WidgetType::BarChart,
                    [
                        ("Critical", 5.0),
                        ("High", 150.0),
                        ("Medium", 300.0),
                        ("Low", 500.0),
                    ],
                ),
                Widget::new(
                    "image-security-issues",
                    "Image Security Issues",
                    WidgetType::StackedBarChart,
                    [
                        ("Critical", 2.0),
                        ("High", 2.0),
                        ("Medium", 5.0),
                        ("Low", 10.0),
                    ],
                ),
            ],
        ),
    ]
}
