use super::*;
use crate::tui::event::Action;

impl App {
    /// Applies an action returned by the key handler.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::RemoveWidget { category, widget } => self.remove_widget(category, widget),
            Action::SubmitForm => self.submit_form(),
        }
    }

    fn remove_widget(&mut self, category: usize, widget: usize) {
        match self.dashboard.remove_widget(category, widget) {
            Ok(removed) => {
                self.set_status(format!("Removed '{}'", removed.name));
                self.clamp_focus();
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Submits the dialog and focuses the new widget when it is visible.
    fn submit_form(&mut self) {
        self.mode = InputMode::Normal;
        let target = self.dashboard.form.selected_category;
        let name = self.dashboard.form.name.clone();
        match self.dashboard.submit_form() {
            Ok(id) => {
                let category = target
                    .and_then(|c| self.dashboard.categories().get(c))
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                self.set_status(format!("Added '{name}' to {category}"));
                self.focus_widget_id(&id);
                self.clamp_focus();
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Focuses the card with `id` if the current filter shows it.
    fn focus_widget_id(&mut self, id: &str) {
        let found = self
            .dashboard
            .filtered()
            .iter()
            .enumerate()
            .find_map(|(ci, fc)| {
                fc.widgets
                    .iter()
                    .position(|(_, w)| w.id == id)
                    .map(|wi| Focus {
                        category: ci,
                        widget: wi,
                    })
            });
        if let Some(focus) = found {
            self.set_focus(focus);
        }
    }
}
