//! Error types for password generation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Character set cannot be empty")]
    EmptyCharacterSet,
    #[error("Invalid random range: {min}..={max}")]
    InvalidRange { min: usize, max: usize },
    #[error("Unable to generate a valid password after {attempts} attempts")]
    GenerationExhausted { attempts: usize },
    #[error("Password generation cancelled")]
    Cancelled,
}

impl GeneratorError {
    /// Returns `true` if the caller may simply invoke generation again.
    ///
    /// Only an exhausted attempt budget is retryable; the other variants
    /// signal a broken invariant or an explicit cancellation.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GeneratorError::GenerationExhausted { .. })
    }
}
