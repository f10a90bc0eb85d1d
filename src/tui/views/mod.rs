//! View rendering modules for the TUI.

pub mod card;
