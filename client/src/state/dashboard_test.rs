use super::*;

#[test]
fn dashboard_tab_default_is_overview() {
    assert_eq!(DashboardTab::default(), DashboardTab::Overview);
}

#[test]
fn dashboard_tab_labels_are_distinct() {
    let labels: Vec<_> = DashboardTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Overview", "Matches", "Activity"]);
}

#[test]
fn every_tab_has_stats() {
    for tab in DashboardTab::ALL {
        assert!(!stats_for(tab).is_empty(), "{tab:?} has no stats");
    }
}

#[test]
fn overview_stats_are_stable() {
    let stats = stats_for(DashboardTab::Overview);
    assert_eq!(stats[0], Stat { label: "Vibe score", value: 87, delta: 4 });
    assert_eq!(stats.len(), 4);
}

#[test]
fn format_delta_signs_positive_values() {
    assert_eq!(format_delta(3), "+3");
    assert_eq!(format_delta(-1), "-1");
    assert_eq!(format_delta(0), "0");
}

#[test]
fn delta_class_reflects_direction() {
    assert!(delta_class(2).ends_with("--up"));
    assert!(delta_class(-2).ends_with("--down"));
    assert_eq!(delta_class(0), "stat-card__delta");
}
