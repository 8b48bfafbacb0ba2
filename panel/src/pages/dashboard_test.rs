use super::*;

#[test]
fn sample_covers_a_full_week() {
    let data = DashboardData::sample();
    assert_eq!(data.weekly_trend.len(), 7);
    assert_eq!(data.weekly_published(), 163);
    assert!(data.active_accounts <= data.total_accounts);
}

#[test]
fn peak_day_is_highest_views() {
    let data = DashboardData::sample();
    assert_eq!(data.peak_day().map(|d| d.date.as_str()), Some("Fri"));
}

#[test]
fn activity_kind_serializes_lowercase() {
    let value = serde_json::to_value(ActivityKind::Optimize).unwrap();
    assert_eq!(value, serde_json::json!("optimize"));
}
