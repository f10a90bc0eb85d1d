use super::*;
use std::collections::HashSet;

#[test]
fn test_add_appends_to_target_category_only() {
    let mut dashboard = Dashboard::seeded();
    let before = dashboard.categories().to_vec();

    let id = dashboard
        .add_widget(Some(1), "Runtime Alerts", WidgetType::PieChart)
        .expect("valid category");

    let cwpp = &dashboard.categories()[1];
    assert_eq!(cwpp.widgets.len(), 3);
    let last = cwpp.widgets.last().expect("just added");
    assert_eq!(last.id, id);
    assert_eq!(last.name, "Runtime Alerts");
    assert_eq!(last.widget_type, WidgetType::PieChart);
    assert!(last.data.is_empty(), "new widgets start without data");

    // Existing siblings untouched
    assert_eq!(cwpp.widgets[..2], before[1].widgets[..]);
    // Other categories untouched
    assert_eq!(dashboard.categories()[0], before[0]);
    assert_eq!(dashboard.categories()[2], before[2]);
}

#[test]
fn test_add_without_category_is_rejected() {
    let mut dashboard = Dashboard::seeded();
    let before = dashboard.categories().to_vec();
    let result = dashboard.add_widget(None, "Orphan", WidgetType::BarChart);
    assert_eq!(result, Err(DashboardError::NoCategorySelected));
    assert_eq!(dashboard.categories(), &before[..]);
}

#[test]
fn test_add_with_out_of_range_category_is_rejected() {
    let mut dashboard = Dashboard::seeded();
    let result = dashboard.add_widget(Some(3), "Nowhere", WidgetType::BarChart);
    assert_eq!(
        result,
        Err(DashboardError::CategoryOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(widget_count(&dashboard), 6);
}

#[test]
fn test_add_accepts_empty_name() {
    let mut dashboard = Dashboard::seeded();
    dashboard
        .add_widget(Some(0), "", WidgetType::BarChart)
        .expect("empty names are allowed");
    assert_eq!(widget_names(&dashboard, 0).last().map(String::as_str), Some(""));
}

#[test]
fn test_generated_ids_are_unique_across_tree() {
    let mut dashboard = Dashboard::seeded();
    for i in 0..20 {
        dashboard
            .add_widget(Some(i % 3), format!("w{i}"), WidgetType::BarChart)
            .expect("valid category");
    }
    let ids: Vec<&str> = dashboard
        .categories()
        .iter()
        .flat_map(|c| c.widgets.iter().map(|w| w.id.as_str()))
        .collect();
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());
    assert_eq!(ids.len(), 26);
}

#[test]
fn test_generated_id_skips_existing_id() {
    let seed = vec![Category::new(
        "Only",
        vec![Widget::new(
            "new-widget-1",
            "Taken",
            WidgetType::BarChart,
            [("a", 1.0)],
        )],
    )];
    let mut dashboard = Dashboard::new(seed);
    let id = dashboard
        .add_widget(Some(0), "Next", WidgetType::BarChart)
        .expect("valid category");
    assert_eq!(id, "new-widget-2");
}

#[test]
fn test_ids_are_not_reused_after_remove() {
    let mut dashboard = Dashboard::seeded();
    let first = dashboard
        .add_widget(Some(0), "A", WidgetType::BarChart)
        .expect("valid category");
    dashboard.remove_widget(0, 2).expect("just added");
    let second = dashboard
        .add_widget(Some(0), "B", WidgetType::BarChart)
        .expect("valid category");
    assert_ne!(first, second);
}

#[test]
fn test_submit_form_adds_and_resets() {
    let mut dashboard = Dashboard::seeded();
    dashboard.form.open_for(2);
    dashboard.form.name = "Image Age".to_string();
    dashboard.form.widget_type = WidgetType::DonutChart;

    let id = dashboard.submit_form().expect("form targets a category");

    let added = dashboard.categories()[2]
        .widgets
        .last()
        .expect("widget added");
    assert_eq!(added.id, id);
    assert_eq!(added.name, "Image Age");
    assert_eq!(added.widget_type, WidgetType::DonutChart);
    assert_eq!(dashboard.form, AddWidgetForm::default());
}

#[test]
fn test_submit_form_without_selection_still_resets() {
    let mut dashboard = Dashboard::seeded();
    dashboard.form.name = "Draft".to_string();
    dashboard.form.widget_type = WidgetType::PieChart;
    dashboard.form.open = true;

    let result = dashboard.submit_form();

    assert_eq!(result, Err(DashboardError::NoCategorySelected));
    assert_eq!(dashboard.form, AddWidgetForm::default());
    assert_eq!(widget_count(&dashboard), 6);
}

#[test]
fn test_submit_form_with_empty_name_resets() {
    let mut dashboard = Dashboard::seeded();
    dashboard.form.open_for(0);
    dashboard.submit_form().expect("empty name is allowed");
    assert_eq!(dashboard.form, AddWidgetForm::default());
    assert_eq!(dashboard.categories()[0].widgets.len(), 3);
}

#[test]
fn test_add_then_search_finds_new_widget_last() {
    let mut dashboard = Dashboard::seeded();
    let before = dashboard.filtered_tree();
    let before_count: usize = before.iter().map(|c| c.widgets.len()).sum();

    dashboard
        .add_widget(Some(1), "Workload Runtime", WidgetType::BarChart)
        .expect("valid category");

    let after = dashboard.filtered_tree();
    let after_count: usize = after.iter().map(|c| c.widgets.len()).sum();
    assert_eq!(after_count, before_count + 1);

    dashboard.set_search_term("workload runtime");
    let found = dashboard.filtered_tree();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "CWPP Dashboard");
    assert_eq!(found[0].widgets.len(), 1);
    assert_eq!(
        dashboard.categories()[1]
            .widgets
            .last()
            .map(|w| w.name.as_str()),
        Some("Workload Runtime")
    );
}
