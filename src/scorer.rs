//! Strength scorer - evaluates arbitrary input against eight independent criteria.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::{
    DIGIT_CHARS, LOWERCASE_CHARS, SCORER_SPECIAL_CHARS, SCORER_WEAK_PATTERNS, UPPERCASE_CHARS,
    contains_weak_pattern,
};
use crate::policy::{MAX_SCORE, SCORER_LENGTH_THRESHOLD};

/// Number of scoring criteria.
pub const CRITERIA_COUNT: usize = 8;

/// One scoring criterion. Declaration order is the check order and the
/// order suggestions are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    HasLowercase,
    HasUppercase,
    HasNumber,
    HasSpecialChar,
    IsAtLeast8Chars,
    IsMoreThan8Chars,
    HasNoCommonPatterns,
    HasNoRepeatingChars,
}

impl Criterion {
    pub const ALL: [Criterion; CRITERIA_COUNT] = [
        Criterion::HasLowercase,
        Criterion::HasUppercase,
        Criterion::HasNumber,
        Criterion::HasSpecialChar,
        Criterion::IsAtLeast8Chars,
        Criterion::IsMoreThan8Chars,
        Criterion::HasNoCommonPatterns,
        Criterion::HasNoRepeatingChars,
    ];

    /// Wire name of the criterion.
    pub fn name(self) -> &'static str {
        match self {
            Criterion::HasLowercase => "hasLowercase",
            Criterion::HasUppercase => "hasUppercase",
            Criterion::HasNumber => "hasNumber",
            Criterion::HasSpecialChar => "hasSpecialChar",
            Criterion::IsAtLeast8Chars => "isAtLeast8Chars",
            Criterion::IsMoreThan8Chars => "isMoreThan8Chars",
            Criterion::HasNoCommonPatterns => "hasNoCommonPatterns",
            Criterion::HasNoRepeatingChars => "hasNoRepeatingChars",
        }
    }

    /// Remediation text shown when the criterion is not met.
    pub fn suggestion(self) -> &'static str {
        match self {
            Criterion::HasLowercase => "Add at least one lowercase letter (a-z)",
            Criterion::HasUppercase => "Add at least one uppercase letter (A-Z)",
            Criterion::HasNumber => "Add at least one number (0-9)",
            Criterion::HasSpecialChar => "Add at least one special character (!@#$%^&*)",
            Criterion::IsAtLeast8Chars => "Make your password at least 8 characters long",
            Criterion::IsMoreThan8Chars => {
                "Make your password longer than 8 characters for better security"
            }
            Criterion::HasNoCommonPatterns => "Avoid common words and patterns",
            Criterion::HasNoRepeatingChars => "Avoid repeating consecutive characters",
        }
    }

    fn check(self, pwd: &str) -> bool {
        match self {
            Criterion::HasLowercase => pwd.chars().any(|c| LOWERCASE_CHARS.contains(c)),
            Criterion::HasUppercase => pwd.chars().any(|c| UPPERCASE_CHARS.contains(c)),
            Criterion::HasNumber => pwd.chars().any(|c| DIGIT_CHARS.contains(c)),
            Criterion::HasSpecialChar => pwd.chars().any(|c| SCORER_SPECIAL_CHARS.contains(c)),
            Criterion::IsAtLeast8Chars => pwd.chars().count() >= SCORER_LENGTH_THRESHOLD,
            Criterion::IsMoreThan8Chars => pwd.chars().count() > SCORER_LENGTH_THRESHOLD,
            Criterion::HasNoCommonPatterns => !contains_weak_pattern(pwd, SCORER_WEAK_PATTERNS),
            Criterion::HasNoRepeatingChars => {
                let chars: Vec<char> = pwd.chars().collect();
                chars.windows(2).all(|pair| pair[0] != pair[1])
            }
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Qualitative label derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLabel {
    Weak,
    StillWeak,
    Moderate,
    Good,
    Excellent,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLabel::Weak,
            3..=4 => StrengthLabel::StillWeak,
            5..=6 => StrengthLabel::Moderate,
            7 => StrengthLabel::Good,
            _ => StrengthLabel::Excellent,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "weak",
            StrengthLabel::StillWeak => "still weak",
            StrengthLabel::Moderate => "moderate",
            StrengthLabel::Good => "good",
            StrengthLabel::Excellent => "excellent",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one scoring call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    details: [bool; CRITERIA_COUNT],
}

impl StrengthResult {
    /// Builds a result from per-criterion outcomes in [`Criterion::ALL`] order.
    pub fn from_details(details: [bool; CRITERIA_COUNT]) -> Self {
        Self { details }
    }

    /// Result with every criterion failed.
    pub fn empty() -> Self {
        Self::from_details([false; CRITERIA_COUNT])
    }

    pub fn score(&self) -> u8 {
        self.details.iter().filter(|&&passed| passed).count() as u8
    }

    pub fn max_score(&self) -> u8 {
        MAX_SCORE
    }

    pub fn percentage(&self) -> f64 {
        f64::from(self.score()) / f64::from(MAX_SCORE) * 100.0
    }

    pub fn label(&self) -> StrengthLabel {
        StrengthLabel::from_score(self.score())
    }

    pub fn passed(&self, criterion: Criterion) -> bool {
        self.details[criterion as usize]
    }

    /// Raw outcomes indexed by [`Criterion::ALL`] position.
    pub fn flags(&self) -> [bool; CRITERIA_COUNT] {
        self.details
    }

    /// Per-criterion outcomes in check order.
    pub fn details(&self) -> impl Iterator<Item = (Criterion, bool)> + '_ {
        Criterion::ALL.into_iter().zip(self.details.iter().copied())
    }
}

/// Scores `password` against every criterion.
///
/// Empty input scores zero with every criterion false.
pub fn check_password_strength(password: &SecretString) -> StrengthResult {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return StrengthResult::empty();
    }

    let mut details = [false; CRITERIA_COUNT];
    for (slot, criterion) in details.iter_mut().zip(Criterion::ALL) {
        *slot = criterion.check(pwd);
    }
    StrengthResult::from_details(details)
}

/// One remediation string per failed criterion, in check order.
pub fn get_suggestions(result: &StrengthResult) -> Vec<&'static str> {
    result
        .details()
        .filter(|(_, passed)| !passed)
        .map(|(criterion, _)| criterion.suggestion())
        .collect()
}

/// Async version that sends the strength result via channel.
///
/// Nothing is sent if the token is already cancelled.
#[cfg(feature = "async")]
pub async fn check_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthResult>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("strength check cancelled before evaluation");
        return;
    }

    let result = check_password_strength(password);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength result: {}", _e);
    }
}
