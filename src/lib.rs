//! Policy-constrained password generation and strength scoring
//!
//! Generated passwords are 12 to 20 characters long, contain at least one
//! lowercase letter, uppercase letter, digit and special character, never
//! repeat a character immediately, and contain no known weak substring.
//! Every random draw comes from the operating system CSPRNG.
//!
//! The strength scorer is independent of the generator: it rates any
//! input against eight criteria and suggests improvements.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based generation and scoring with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_forge::{check_password_strength, generate_password, get_suggestions};
//! use secrecy::ExposeSecret;
//!
//! let password = generate_password().expect("generation budget exhausted");
//! println!("Generated: {}", password.expose_secret());
//!
//! let result = check_password_strength(&password);
//! println!("Score: {}/{} ({})", result.score(), result.max_score(), result.label());
//! for suggestion in get_suggestions(&result) {
//!     println!("- {}", suggestion);
//! }
//! ```

// Internal modules
mod charset;
mod error;
mod generator;
mod policy;
mod random;
mod response;
mod rules;
mod scorer;
mod synthesizer;

// Public API
pub use charset::{
    ALL_CHARS, CharacterClass, DIGIT_CHARS, LOWERCASE_CHARS, SCORER_SPECIAL_CHARS,
    SCORER_WEAK_PATTERNS, SPECIAL_CHARS, UPPERCASE_CHARS, WEAK_PATTERNS, contains_weak_pattern,
};
pub use error::GeneratorError;
pub use generator::{generate_password, generate_password_with};
pub use policy::{
    MAX_GENERATION_ATTEMPTS, MAX_LENGTH, MAX_REPAIR_RETRIES, MAX_SCORE, MIN_LENGTH,
    SCORER_LENGTH_THRESHOLD,
};
pub use random::{RandomSource, SystemRandom};
pub use response::{CriteriaDetails, GenerateResponse, StrengthReport, StrengthRequest};
pub use rules::{Violation, is_valid, validate};
pub use scorer::{
    CRITERIA_COUNT, Criterion, StrengthLabel, StrengthResult, check_password_strength,
    get_suggestions,
};
pub use synthesizer::synthesize;

#[cfg(feature = "async")]
pub use generator::generate_password_tx;

#[cfg(feature = "async")]
pub use scorer::check_password_strength_tx;
