//! Search filtering over the category tree.
//!
//! The filtered tree is derived state: it is recomputed from the root tree
//! and the search term whenever either changes, and it is never mutated.
//! [`filter_view`] borrows from the root tree and remembers root positions
//! so that actions taken on a filtered screen address the right widget.

use crate::model::{Category, Widget};

/// A category that survived filtering, borrowed from the root tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredCategory<'a> {
    /// Position of the category in the root tree.
    pub index: usize,
    /// The root category.
    pub category: &'a Category,
    /// Matching widgets with their position inside `category.widgets`.
    ///
    /// Never empty.
    pub widgets: Vec<(usize, &'a Widget)>,
}

impl FilteredCategory<'_> {
    /// Category title.
    pub fn name(&self) -> &str {
        &self.category.name
    }
}

/// Filters `categories` by `term`, keeping root positions.
///
/// A widget is kept when its name contains `term` case-insensitively.
/// Categories with no remaining widgets are dropped. Category and widget
/// order follow the root tree.
pub fn filter_view<'a>(categories: &'a [Category], term: &str) -> Vec<FilteredCategory<'a>> {
    let needle = term.to_lowercase();
    categories
        .iter()
        .enumerate()
        .filter_map(|(index, category)| {
            let widgets: Vec<(usize, &Widget)> = category
                .widgets
                .iter()
                .enumerate()
                .filter(|(_, w)| w.matches_lowercase(&needle))
                .collect();
            if widgets.is_empty() {
                None
            } else {
                Some(FilteredCategory {
                    index,
                    category,
                    widgets,
                })
            }
        })
        .collect()
}

/// Filters `categories` by `term` into an owned tree.
///
/// Same rules as [`filter_view`].
pub fn filter_tree(categories: &[Category], term: &str) -> Vec<Category> {
    filter_view(categories, term)
        .into_iter()
        .map(|fc| Category {
            name: fc.category.name.clone(),
            widgets: fc.widgets.into_iter().map(|(_, w)| w.clone()).collect(),
        })
        .collect()
}
