//! Validation rules for generated passwords
//!
//! Each rule checks one policy requirement and returns the failure reason,
//! if any. The validator runs them in order and stops at the first failure.

mod length;
mod pattern;
mod repeat;
mod variety;

pub use length::length_rule;
pub use pattern::pattern_rule;
pub use repeat::repeat_rule;
pub use variety::variety_rule;

/// Result type for rule functions.
/// - `Some(reason)` - Rule failed with reason
/// - `None` - Rule passed
pub type RuleResult = Option<String>;

/// First rule a password failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub rule: &'static str,
    pub reason: String,
}

const RULES: [(&str, fn(&str) -> RuleResult); 4] = [
    ("length", length_rule),
    ("variety", variety_rule),
    ("repeat", repeat_rule),
    ("pattern", pattern_rule),
];

/// Checks `password` against every rule, returning the first violation.
pub fn validate(password: &str) -> Option<Violation> {
    RULES.iter().find_map(|(rule, rule_fn)| {
        rule_fn(password).map(|reason| Violation {
            rule: *rule,
            reason,
        })
    })
}

/// Returns `true` if `password` satisfies every rule.
pub fn is_valid(password: &str) -> bool {
    validate(password).is_none()
}
