use super::*;

#[test]
fn active_rules_filters_inactive() {
    let rules = sample_rules();
    let active = active_rules(&rules);
    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|rule| rule.active));
}

#[test]
fn inactive_rule_was_never_applied() {
    let rules = sample_rules();
    let topic = rules.iter().find(|rule| rule.kind == RuleKind::Topic).unwrap();
    assert!(!topic.active);
    assert!(topic.last_applied.is_none());
}
