//! Transient state of the add-widget dialog.

use crate::model::WidgetType;

/// Input field that currently receives keystrokes in the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Widget name text input.
    #[default]
    Name,
    /// Widget type selector.
    Type,
}

/// Pending "add widget" input.
///
/// `selected_category` is the root index the add will target; it is set
/// when the dialog is opened from a category and passed explicitly to
/// [`Dashboard::add_widget`](crate::dashboard::Dashboard::add_widget).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddWidgetForm {
    /// New widget name. Not validated; may be empty.
    pub name: String,
    /// New widget type.
    pub widget_type: WidgetType,
    /// Root index of the target category.
    pub selected_category: Option<usize>,
    /// Whether the dialog is showing.
    pub open: bool,
    /// Field with input focus.
    pub focus: FormField,
}

impl AddWidgetForm {
    /// Shows the dialog targeting `category`. Name and type are kept as typed.
    pub fn open_for(&mut self, category: usize) {
        self.selected_category = Some(category);
        self.open = true;
        self.focus = FormField::Name;
    }

    /// Hides the dialog without clearing its fields.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Clears name, type and selection and closes the dialog.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Moves focus to the other field.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Name => FormField::Type,
            FormField::Type => FormField::Name,
        };
    }

    /// Appends a character to the name.
    pub fn push_char(&mut self, c: char) {
        self.name.push(c);
    }

    /// Removes the last character of the name.
    pub fn backspace(&mut self) {
        self.name.pop();
    }

    /// Selects the next widget type in menu order.
    pub fn next_type(&mut self) {
        self.widget_type = self.widget_type.next();
    }

    /// Selects the previous widget type in menu order.
    pub fn previous_type(&mut self) {
        self.widget_type = self.widget_type.previous();
    }
}
