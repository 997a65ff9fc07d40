//! Variety rule - checks every character class is represented.

use super::RuleResult;
use crate::charset::CharacterClass;

/// Checks that the password has at least one character of each class.
pub fn variety_rule(password: &str) -> RuleResult {
    let missing: Vec<_> = CharacterClass::ALL
        .into_iter()
        .filter(|class| !password.chars().any(|c| class.contains(c)))
        .map(CharacterClass::label)
        .collect();

    if !missing.is_empty() {
        return Some(format!("Missing: {}", missing.join(", ")));
    }
    None
}
