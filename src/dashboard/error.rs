//! Errors for rejected dashboard mutations.

use thiserror::Error;

/// Reasons a mutation was rejected. The dashboard is left unchanged in every case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// Add was submitted without a target category.
    #[error("No category selected for the new widget")]
    NoCategorySelected,

    /// The category index does not exist in the current tree.
    #[error("Category index {index} out of range ({len} categories)")]
    CategoryOutOfRange {
        /// Requested index.
        index: usize,
        /// Current category count.
        len: usize,
    },

    /// The widget index does not exist in the category.
    #[error("Widget index {index} out of range in '{category}' ({len} widgets)")]
    WidgetOutOfRange {
        /// Name of the category that was addressed.
        category: String,
        /// Requested index.
        index: usize,
        /// Current widget count in that category.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_no_category_selected() {
        let msg = DashboardError::NoCategorySelected.to_string();
        assert!(msg.contains("No category selected"));
    }

    #[test]
    fn display_category_out_of_range() {
        let msg = DashboardError::CategoryOutOfRange { index: 5, len: 3 }.to_string();
        assert!(msg.contains('5'), "should include index: {msg}");
        assert!(msg.contains("3 categories"), "should include count: {msg}");
    }

    #[test]
    fn display_widget_out_of_range() {
        let msg = DashboardError::WidgetOutOfRange {
            category: "Registry Scan".to_string(),
            index: 9,
            len: 2,
        }
        .to_string();
        assert!(msg.contains("Registry Scan"));
        assert!(msg.contains("2 widgets"));
    }
}
