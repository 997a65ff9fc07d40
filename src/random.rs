//! Random source used by every draw the synthesizer makes.

use rand::Rng;
use rand::rngs::OsRng;

use crate::error::GeneratorError;

/// Source of uniformly distributed integers.
///
/// Production code must use a cryptographically secure implementation;
/// every character choice, the length draw and the shuffle route through
/// [`RandomSource::random_int`].
pub trait RandomSource {
    /// Returns an integer in `[min, max]`, inclusive on both ends.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidRange`] if `min > max`.
    fn random_int(&mut self, min: usize, max: usize) -> Result<usize, GeneratorError>;
}

/// Operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn random_int(&mut self, min: usize, max: usize) -> Result<usize, GeneratorError> {
        if min > max {
            return Err(GeneratorError::InvalidRange { min, max });
        }
        Ok(OsRng.gen_range(min..=max))
    }
}

/// Draws one character uniformly from `set`.
pub fn pick<R>(rng: &mut R, set: &str) -> Result<char, GeneratorError>
where
    R: RandomSource + ?Sized,
{
    let len = set.chars().count();
    if len == 0 {
        return Err(GeneratorError::EmptyCharacterSet);
    }
    let idx = rng.random_int(0, len - 1)?;
    set.chars().nth(idx).ok_or(GeneratorError::EmptyCharacterSet)
}

/// Fisher-Yates shuffle; every permutation is equally likely given a uniform source.
pub fn shuffle<R, T>(rng: &mut R, items: &mut [T]) -> Result<(), GeneratorError>
where
    R: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.random_int(0, i)?;
        items.swap(i, j);
    }
    Ok(())
}

/// Deterministic source for tests: replays `script` cyclically, mapping
/// each value into the requested range by modulo.
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    script: Vec<usize>,
    next: usize,
    pub(crate) calls: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(script: Vec<usize>) -> Self {
        assert!(!script.is_empty(), "script cannot be empty");
        Self {
            script,
            next: 0,
            calls: 0,
        }
    }

    /// A source that always returns the lower bound.
    pub(crate) fn zeros() -> Self {
        Self::new(vec![0])
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn random_int(&mut self, min: usize, max: usize) -> Result<usize, GeneratorError> {
        if min > max {
            return Err(GeneratorError::InvalidRange { min, max });
        }
        let value = self.script[self.next % self.script.len()];
        self.next += 1;
        self.calls += 1;
        Ok(min + value % (max - min + 1))
    }
}
