//! Pattern rule - rejects passwords containing a weak substring.

use super::RuleResult;
use crate::charset::{WEAK_PATTERNS, contains_weak_pattern};

/// Checks the password against the generator's weak-pattern denylist.
pub fn pattern_rule(password: &str) -> RuleResult {
    if contains_weak_pattern(password, WEAK_PATTERNS) {
        return Some("Password contains a common weak pattern".to_string());
    }
    None
}
