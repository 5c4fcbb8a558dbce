use super::*;

fn labels(items: &[NavItem]) -> Vec<&'static str> {
    items.iter().map(|item| item.label).collect()
}

#[test]
fn filter_is_case_insensitive_substring() {
    assert_eq!(labels(&filter_nav("CAMP")), ["Campaign schedule", "Scheduled campaigns"]);
    assert_eq!(labels(&filter_nav("lead")), ["Lead scoring"]);
}

#[test]
fn blank_query_matches_nothing() {
    assert!(filter_nav("").is_empty());
    assert!(filter_nav("   ").is_empty());
}

#[test]
fn unknown_query_matches_nothing() {
    assert!(filter_nav("billing").is_empty());
}

#[test]
fn every_route_is_unique() {
    let mut paths: Vec<&str> = NAV_ITEMS.iter().map(|item| item.path).collect();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), NAV_ITEMS.len());
}
