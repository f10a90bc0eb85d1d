pub(crate) use super::*;

mod add;

/// Names of the widgets in the root category at `index`.
pub(crate) fn widget_names(dashboard: &Dashboard, index: usize) -> Vec<String> {
    dashboard.categories()[index]
        .widgets
        .iter()
        .map(|w| w.name.clone())
        .collect()
}

/// Total widget count across the root tree.
pub(crate) fn widget_count(dashboard: &Dashboard) -> usize {
    dashboard.categories().iter().map(|c| c.widgets.len()).sum()
}
