//! Password generator - bounded synthesize-then-validate loop.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::error::GeneratorError;
use crate::policy::MAX_GENERATION_ATTEMPTS;
use crate::random::{RandomSource, SystemRandom};
use crate::rules::validate;
use crate::synthesizer::synthesize;

/// Generates a password using the operating system CSPRNG.
///
/// # Errors
/// Returns [`GeneratorError::GenerationExhausted`] if no candidate passed
/// validation within `MAX_GENERATION_ATTEMPTS` attempts.
pub fn generate_password() -> Result<SecretString, GeneratorError> {
    generate_password_with(&mut SystemRandom)
}

/// Generates a password drawing every random value from `rng`.
pub fn generate_password_with<R>(rng: &mut R) -> Result<SecretString, GeneratorError>
where
    R: RandomSource + ?Sized,
{
    run_attempts(|| synthesize(&mut *rng))
}

/// Runs up to `MAX_GENERATION_ATTEMPTS` attempts, returning the first
/// candidate that validates. Errors from `attempt` abort immediately.
fn run_attempts<F>(mut attempt: F) -> Result<SecretString, GeneratorError>
where
    F: FnMut() -> Result<String, GeneratorError>,
{
    for _attempt_no in 1..=MAX_GENERATION_ATTEMPTS {
        let candidate = attempt()?;

        match validate(&candidate) {
            None => return Ok(SecretString::new(candidate.into())),
            Some(_violation) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    "Generation attempt {} rejected by rule: {}",
                    _attempt_no,
                    _violation.rule
                );
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::error!(
        "Password generation exhausted after {} attempts",
        MAX_GENERATION_ATTEMPTS
    );

    Err(GeneratorError::GenerationExhausted {
        attempts: MAX_GENERATION_ATTEMPTS,
    })
}

/// Async version that sends the generated password via channel.
///
/// The token is checked before every attempt; a cancelled generation
/// sends [`GeneratorError::Cancelled`].
#[cfg(feature = "async")]
pub async fn generate_password_tx(
    token: CancellationToken,
    tx: mpsc::Sender<Result<SecretString, GeneratorError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("password generation is about to start...");

    let mut rng = SystemRandom;
    let result = run_attempts(|| {
        if token.is_cancelled() {
            return Err(GeneratorError::Cancelled);
        }
        synthesize(&mut rng)
    });

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send generated password: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::rules::is_valid;
    use secrecy::ExposeSecret;

    #[tokio::test]
    async fn test_generate_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        generate_password_tx(token, tx).await;

        let result = rx.recv().await.expect("Should receive a result");
        let pwd = result.expect("Generation should succeed");
        assert!(is_valid(pwd.expose_secret()));
    }

    #[tokio::test]
    async fn test_generate_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        generate_password_tx(token, tx).await;

        let result = rx.recv().await.expect("Should receive a result");
        assert!(matches!(result, Err(GeneratorError::Cancelled)));
    }

    #[tokio::test]
    async fn test_generate_password_tx_closed_channel() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // must not panic when the receiver is gone
        generate_password_tx(CancellationToken::new(), tx).await;
    }
}
