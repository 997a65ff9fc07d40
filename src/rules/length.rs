//! Length rule - checks the generator's minimum length.

use super::RuleResult;
use crate::policy::MIN_LENGTH;

/// Checks that the password has at least `MIN_LENGTH` characters.
pub fn length_rule(password: &str) -> RuleResult {
    if password.chars().count() < MIN_LENGTH {
        return Some(format!(
            "Password must be at least {} characters",
            MIN_LENGTH
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_rule_too_short() {
        assert_eq!(
            length_rule("Sh0rt!Pwd"),
            Some("Password must be at least 12 characters".to_string())
        );
    }

    #[test]
    fn test_length_rule_exactly_minimum() {
        assert_eq!(length_rule("123456789012"), None);
    }

    #[test]
    fn test_length_rule_counts_chars_not_bytes() {
        // 11 chars, 22 bytes
        assert!(length_rule("ééééééééééé").is_some());
    }
}
