#[cfg(test)]
#[path = "optimization_test.rs"]
mod optimization_test;

use serde::Serialize;

/// Area of the generation pipeline a rule tunes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Script,
    Visual,
    Topic,
}

/// A prompt-level optimization rule fed back into content generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptimizationRule {
    pub id: String,
    pub kind: RuleKind,
    pub name: String,
    pub description: String,
    pub prompt_template: String,
    pub version: String,
    pub active: bool,
    pub created_at: String,
    pub last_applied: Option<String>,
}

/// Static rule list shown on the optimization page.
#[must_use]
pub fn sample_rules() -> Vec<OptimizationRule> {
    vec![
        OptimizationRule {
            id: "1".into(),
            kind: RuleKind::Script,
            name: "Video opening hook".into(),
            description: "Viewers drop in the first 3 seconds; tighten the opening".into(),
            prompt_template: "Open with a strong hook, speak at 1.2x, avoid silence...".into(),
            version: "v2.1".into(),
            active: true,
            created_at: "2024-01-15 09:00".into(),
            last_applied: Some("2024-01-15 14:30".into()),
        },
        OptimizationRule {
            id: "2".into(),
            kind: RuleKind::Visual,
            name: "Cover click-through".into(),
            description: "Raise cover contrast and use bolder colors".into(),
            prompt_template: "High-contrast cover, clear subject, legible text...".into(),
            version: "v1.3".into(),
            active: true,
            created_at: "2024-01-14 16:20".into(),
            last_applied: Some("2024-01-15 10:15".into()),
        },
        OptimizationRule {
            id: "3".into(),
            kind: RuleKind::Topic,
            name: "Topic selection".into(),
            description: "Skip over-contested trends and look for open niches".into(),
            prompt_template: "Prefer moderately hot topics with little competition...".into(),
            version: "v1.0".into(),
            active: false,
            created_at: "2024-01-13 11:45".into(),
            last_applied: None,
        },
    ]
}

/// Rules currently applied to generation.
#[must_use]
pub fn active_rules(rules: &[OptimizationRule]) -> Vec<&OptimizationRule> {
    rules.iter().filter(|rule| rule.active).collect()
}
