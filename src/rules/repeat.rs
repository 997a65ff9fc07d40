//! Repeat rule - rejects identical adjacent characters.

use super::RuleResult;

/// Checks that no two adjacent characters are identical.
pub fn repeat_rule(password: &str) -> RuleResult {
    let chars: Vec<char> = password.chars().collect();
    if chars.windows(2).any(|pair| pair[0] == pair[1]) {
        return Some("Password contains repeating consecutive characters".to_string());
    }
    None
}
