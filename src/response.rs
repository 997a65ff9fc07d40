//! Wire shapes for the generation and strength-check calls.
//!
//! These are the payloads a transport layer serialises; no transport is
//! provided here.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;
use crate::scorer::{CRITERIA_COUNT, StrengthResult, check_password_strength, get_suggestions};

/// Payload of the generation call: `{"password": ...}` or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerateResponse {
    Password { password: String },
    Error { error: String },
}

impl GenerateResponse {
    pub fn from_result(result: Result<SecretString, GeneratorError>) -> Self {
        match result {
            Ok(password) => GenerateResponse::Password {
                password: password.expose_secret().to_string(),
            },
            Err(e) => GenerateResponse::Error {
                error: e.to_string(),
            },
        }
    }

    /// HTTP-style status: 200 for a password, 500 for a failure.
    pub fn status(&self) -> u16 {
        match self {
            GenerateResponse::Password { .. } => 200,
            GenerateResponse::Error { .. } => 500,
        }
    }
}

/// Request body of the strength-check call. A missing password scores as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StrengthRequest {
    #[serde(default)]
    pub password: Option<String>,
}

impl StrengthRequest {
    pub fn evaluate(&self) -> StrengthReport {
        let password = SecretString::new(self.password.clone().unwrap_or_default().into());
        StrengthReport::from(&check_password_strength(&password))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaDetails {
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_number: bool,
    pub has_special_char: bool,
    pub is_at_least_8_chars: bool,
    pub is_more_than_8_chars: bool,
    pub has_no_common_patterns: bool,
    pub has_no_repeating_chars: bool,
}

impl CriteriaDetails {
    fn as_array(&self) -> [bool; CRITERIA_COUNT] {
        [
            self.has_lowercase,
            self.has_uppercase,
            self.has_number,
            self.has_special_char,
            self.is_at_least_8_chars,
            self.is_more_than_8_chars,
            self.has_no_common_patterns,
            self.has_no_repeating_chars,
        ]
    }
}

/// Payload of the strength-check call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    pub score: u8,
    pub max_score: u8,
    pub percentage: f64,
    pub strength: String,
    pub details: CriteriaDetails,
}

impl StrengthReport {
    /// The suggestions call: remediation strings for this report.
    pub fn suggestions(&self) -> Vec<&'static str> {
        get_suggestions(&StrengthResult::from(&self.details))
    }
}

impl From<&StrengthResult> for StrengthReport {
    fn from(result: &StrengthResult) -> Self {
        let [
            has_lowercase,
            has_uppercase,
            has_number,
            has_special_char,
            is_at_least_8_chars,
            is_more_than_8_chars,
            has_no_common_patterns,
            has_no_repeating_chars,
        ] = result.flags();
        let details = CriteriaDetails {
            has_lowercase,
            has_uppercase,
            has_number,
            has_special_char,
            is_at_least_8_chars,
            is_more_than_8_chars,
            has_no_common_patterns,
            has_no_repeating_chars,
        };

        Self {
            score: result.score(),
            max_score: result.max_score(),
            percentage: result.percentage(),
            strength: result.label().to_string(),
            details,
        }
    }
}

impl From<&CriteriaDetails> for StrengthResult {
    fn from(details: &CriteriaDetails) -> Self {
        StrengthResult::from_details(details.as_array())
    }
}
