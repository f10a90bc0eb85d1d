//! Security posture dashboard library
//!
//! This crate provides the view-model and terminal front end for a
//! dashboard of security-posture metric widgets grouped into categories.
//!
//! - [`model`]: categories, widgets, widget types and the time range selector
//! - [`seed`]: the built-in dataset
//! - [`filter`]: case-insensitive search over the category tree
//! - [`chart`]: widget to chart description (pie, donut, bar)
//! - [`dashboard`]: state plus the add-widget and remove-widget operations
//! - [`tui`]: ratatui front end
//!
//! Dashboard state lives in memory only and is rebuilt from the seed on startup.

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod filter;
pub mod logging;
pub mod model;
pub mod seed;
pub mod tui;

pub use dashboard::{Dashboard, DashboardError};
pub use model::{Category, TimeRange, Widget, WidgetData, WidgetType};
