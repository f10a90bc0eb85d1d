//! TUI module for the posture dashboard.
//!
//! Provides a terminal user interface built on ratatui and crossterm that
//! renders the category tree as a grid of chart cards.

pub mod app;
pub mod event;
pub mod ui;
pub mod views;

#[cfg(test)]
pub(crate) mod test_utils;
