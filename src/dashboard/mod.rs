//! Dashboard view-model.
//!
//! [`Dashboard`] owns the root category tree and the user-facing state
//! around it (search term, time range, add-widget form). The tree is only
//! changed through [`Dashboard::add_widget`] and [`Dashboard::remove_widget`];
//! the filtered tree is recomputed from it on demand.

/// Mutation error types.
pub mod error;

/// Add-widget dialog state.
pub mod form;

pub use error::DashboardError;
pub use form::{AddWidgetForm, FormField};

use crate::filter::{filter_tree, filter_view, FilteredCategory};
use crate::model::{Category, TimeRange, Widget, WidgetData, WidgetType};
use crate::seed::seed_categories;

/// Prefix of generated widget ids.
const NEW_WIDGET_ID_PREFIX: &str = "new-widget-";

/// In-memory dashboard state.
#[derive(Debug, Clone)]
pub struct Dashboard {
    categories: Vec<Category>,
    /// Current search term. Empty matches every widget.
    pub search_term: String,
    /// Selected time window.
    pub time_range: TimeRange,
    /// Add-widget dialog state.
    pub form: AddWidgetForm,
    /// Last sequence number used for a generated widget id.
    id_seq: u64,
}

impl Dashboard {
    /// Creates a dashboard over the given tree.
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            search_term: String::new(),
            time_range: TimeRange::default(),
            form: AddWidgetForm::default(),
            id_seq: 0,
        }
    }

    /// Creates a dashboard populated from the seed dataset.
    pub fn seeded() -> Self {
        Self::new(seed_categories())
    }

    /// Root tree in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Filtered view of the root tree for the current search term.
    pub fn filtered(&self) -> Vec<FilteredCategory<'_>> {
        filter_view(&self.categories, &self.search_term)
    }

    /// Owned copy of the filtered tree for the current search term.
    pub fn filtered_tree(&self) -> Vec<Category> {
        filter_tree(&self.categories, &self.search_term)
    }

    /// Replaces the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        tracing::debug!("search term set to {:?}", self.search_term);
    }

    /// Advances the time range selector.
    pub fn cycle_time_range(&mut self) {
        self.time_range = self.time_range.next();
        tracing::debug!("time range set to {}", self.time_range.label());
    }

    /// Appends a new, empty widget to the category at `category`.
    ///
    /// The widget gets a freshly generated id that is unique in the tree.
    /// Returns the new widget's id. Fails without changing anything when
    /// no category is given or the index is out of range.
    pub fn add_widget(
        &mut self,
        category: Option<usize>,
        name: impl Into<String>,
        widget_type: WidgetType,
    ) -> Result<String, DashboardError> {
        let Some(index) = category else {
            tracing::warn!("add widget ignored: no category selected");
            return Err(DashboardError::NoCategorySelected);
        };
        let len = self.categories.len();
        if index >= len {
            tracing::warn!("add widget ignored: category index {} of {}", index, len);
            return Err(DashboardError::CategoryOutOfRange { index, len });
        }

        let id = self.generate_id();
        let widget = Widget {
            id: id.clone(),
            name: name.into(),
            widget_type,
            data: WidgetData::new(),
        };
        tracing::debug!(
            "adding widget {} ({}) to '{}'",
            widget.id,
            widget.widget_type,
            self.categories[index].name
        );
        self.categories[index].widgets.push(widget);
        Ok(id)
    }

    /// Submits the add-widget form.
    ///
    /// Adds a widget from the form's name, type and selected category, then
    /// resets the form whether or not the add succeeded.
    pub fn submit_form(&mut self) -> Result<String, DashboardError> {
        let form = std::mem::take(&mut self.form);
        self.add_widget(form.selected_category, form.name, form.widget_type)
    }

    /// Removes the widget at `widget` in the category at `category`.
    ///
    /// Later widgets shift down by one. Stale indices leave the tree
    /// unchanged and return an error.
    pub fn remove_widget(&mut self, category: usize, widget: usize) -> Result<Widget, DashboardError> {
        let len = self.categories.len();
        let Some(cat) = self.categories.get_mut(category) else {
            tracing::warn!("remove widget ignored: category index {} of {}", category, len);
            return Err(DashboardError::CategoryOutOfRange {
                index: category,
                len,
            });
        };
        if widget >= cat.widgets.len() {
            tracing::warn!(
                "remove widget ignored: widget index {} of {} in '{}'",
                widget,
                cat.widgets.len(),
                cat.name
            );
            return Err(DashboardError::WidgetOutOfRange {
                category: cat.name.clone(),
                index: widget,
                len: cat.widgets.len(),
            });
        }
        let removed = cat.widgets.remove(widget);
        tracing::debug!("removed widget {} from '{}'", removed.id, cat.name);
        Ok(removed)
    }

    /// Returns true if any widget in the tree has `id`.
    pub fn contains_id(&self, id: &str) -> bool {
        self.categories
            .iter()
            .flat_map(|c| &c.widgets)
            .any(|w| w.id == id)
    }

    /// Next `new-widget-<n>` id not already present in the tree.
    fn generate_id(&mut self) -> String {
        loop {
            self.id_seq += 1;
            let id = format!("{NEW_WIDGET_ID_PREFIX}{}", self.id_seq);
            if !self.contains_id(&id) {
                return id;
            }
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests;
