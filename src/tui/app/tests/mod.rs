pub(crate) use super::*;
pub(crate) use crate::tui::event::{handle_key_event, Action};
pub(crate) use crate::tui::test_utils::{key, seeded_app};
pub(crate) use crossterm::event::KeyCode;


/// Presses each key in order, dispatching the resulting actions.
pub(crate) fn press(app: &mut App, keys: &[KeyCode]) {
    for code in keys {
        let action = handle_key_event(app, key(*code));
        app.dispatch(action);
    }
}

/// Types `text` one character at a time.
pub(crate) fn type_text(app: &mut App, text: &str) {
    let keys: Vec<KeyCode> = text.chars().map(KeyCode::Char).collect();
    press(app, &keys);
}

/// Names of the widgets in root category `index`.
pub(crate) fn widget_names(app: &App, index: usize) -> Vec<String> {
    app.dashboard.categories()[index]
        .widgets
        .iter()
        .map(|w| w.name.clone())
        .collect()
}
