//! Candidate synthesis: class-covering construction, shuffle, adjacent repair.

use crate::charset::{ALL_CHARS, CharacterClass};
use crate::error::GeneratorError;
use crate::policy::{MAX_LENGTH, MAX_REPAIR_RETRIES, MIN_LENGTH};
use crate::random::{RandomSource, pick, shuffle};

/// Builds one candidate password.
///
/// The candidate always holds one character of every class and has a
/// length in `[MIN_LENGTH, MAX_LENGTH]`. Weak patterns are not checked
/// here; residual adjacent duplicates are possible and left to the
/// validator.
pub fn synthesize<R>(rng: &mut R) -> Result<String, GeneratorError>
where
    R: RandomSource + ?Sized,
{
    let length = rng.random_int(MIN_LENGTH, MAX_LENGTH)?;
    let mut candidate: Vec<char> = Vec::with_capacity(length);

    for class in CharacterClass::ALL {
        candidate.push(pick(rng, class.members())?);
    }
    for _ in CharacterClass::ALL.len()..length {
        candidate.push(pick(rng, ALL_CHARS)?);
    }

    shuffle(rng, &mut candidate)?;
    repair_adjacent(rng, &mut candidate)?;

    Ok(candidate.into_iter().collect())
}

/// Single left-to-right sweep replacing any character equal to its predecessor.
///
/// Each position is compared with the predecessor as it was before the
/// sweep, and the sweep is not iterated to a fixed point: a replacement is
/// only guaranteed to differ from the character it replaces, so it may
/// still collide with a neighbour.
pub fn repair_adjacent<R>(rng: &mut R, candidate: &mut [char]) -> Result<(), GeneratorError>
where
    R: RandomSource + ?Sized,
{
    let Some(&first) = candidate.first() else {
        return Ok(());
    };

    let mut predecessor = first;
    for slot in candidate.iter_mut().skip(1) {
        let current = *slot;
        if current == predecessor {
            *slot = replacement_for(rng, current)?;
        }
        predecessor = current;
    }
    Ok(())
}

fn replacement_for<R>(rng: &mut R, current: char) -> Result<char, GeneratorError>
where
    R: RandomSource + ?Sized,
{
    for _ in 0..MAX_REPAIR_RETRIES {
        let c = pick(rng, ALL_CHARS)?;
        if c != current {
            return Ok(c);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::warn!(
        "Repair retries exhausted after {} draws, drawing from another class",
        MAX_REPAIR_RETRIES
    );

    alternative_char(rng, current)
}

/// Draws from one of the three classes `current` does not belong to.
///
/// Characters outside the registry are treated as special.
fn alternative_char<R>(rng: &mut R, current: char) -> Result<char, GeneratorError>
where
    R: RandomSource + ?Sized,
{
    let class = CharacterClass::of(current).unwrap_or(CharacterClass::Special);
    let others = class.others();
    let chosen = others[rng.random_int(0, others.len() - 1)?];
    pick(rng, chosen.members())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, SystemRandom};
    use crate::rules::{length_rule, variety_rule};

    #[test]
    fn test_synthesize_length_and_coverage() {
        let mut rng = SystemRandom;
        for _ in 0..500 {
            let candidate = synthesize(&mut rng).unwrap();
            let len = candidate.chars().count();
            assert!((MIN_LENGTH..=MAX_LENGTH).contains(&len), "bad length {}", len);
            assert_eq!(length_rule(&candidate), None);
            assert_eq!(variety_rule(&candidate), None, "candidate {:?}", candidate);
        }
    }

    #[test]
    fn test_synthesize_only_uses_registry_chars() {
        let mut rng = SystemRandom;
        for _ in 0..200 {
            let candidate = synthesize(&mut rng).unwrap();
            assert!(candidate.chars().all(|c| ALL_CHARS.contains(c)));
        }
    }

    #[test]
    fn test_synthesize_deterministic_with_zeros() {
        // length 12, seeds "aA0!", filler all 'a', shuffle rotates the
        // seeds to the front, repair falls back to 'A' on every run of 'a'
        let mut rng = ScriptedRandom::zeros();
        let candidate = synthesize(&mut rng).unwrap();
        assert_eq!(candidate, "A0!aAAAAAAAA");
        // 1 length + 4 seeds + 8 filler + 11 swaps + 8 repairs * (10 + 2)
        assert_eq!(rng.calls, 120);
    }

    #[test]
    fn test_repair_replaces_with_distinct_char() {
        // first draw 'a' (rejected), second draw index 1 -> 'b'
        let mut rng = ScriptedRandom::new(vec![0, 1]);
        let mut candidate: Vec<char> = "xaa".chars().collect();
        repair_adjacent(&mut rng, &mut candidate).unwrap();
        assert_eq!(candidate, vec!['x', 'a', 'b']);
    }

    #[test]
    fn test_repair_fallback_switches_class() {
        for (current, expected_class) in [
            ('a', CharacterClass::Uppercase),
            ('Q', CharacterClass::Lowercase),
            ('5', CharacterClass::Lowercase),
            ('!', CharacterClass::Digit),
        ] {
            let index_of_current = ALL_CHARS.chars().position(|c| c == current).unwrap();
            let mut rng = ScriptedRandom::new(vec![index_of_current]);
            let mut candidate = vec![current, current];
            repair_adjacent(&mut rng, &mut candidate).unwrap();

            assert_ne!(candidate[0], candidate[1]);
            assert_eq!(CharacterClass::of(candidate[1]), Some(expected_class));
        }
    }

    #[test]
    fn test_fallback_never_returns_same_class() {
        let mut rng = SystemRandom;
        for c in ALL_CHARS.chars() {
            for _ in 0..20 {
                let alt = alternative_char(&mut rng, c).unwrap();
                assert_ne!(CharacterClass::of(alt), CharacterClass::of(c));
            }
        }
    }

    #[test]
    fn test_repair_is_single_sweep() {
        // "aab": position 1 is replaced with 'b' and collides with its
        // successor; the sweep does not revisit it
        let b_index = ALL_CHARS.chars().position(|c| c == 'b').unwrap();
        let mut rng = ScriptedRandom::new(vec![b_index]);
        let mut candidate: Vec<char> = "aab".chars().collect();
        repair_adjacent(&mut rng, &mut candidate).unwrap();
        assert_eq!(candidate, vec!['a', 'b', 'b']);
        assert_eq!(rng.calls, 1);
    }

    #[test]
    fn test_repair_compares_against_original_predecessor() {
        // "aaa": both positions matched their original predecessor, so both
        // are replaced, and the two replacements may collide
        let b_index = ALL_CHARS.chars().position(|c| c == 'b').unwrap();
        let mut rng = ScriptedRandom::new(vec![b_index]);
        let mut candidate: Vec<char> = "aaa".chars().collect();
        repair_adjacent(&mut rng, &mut candidate).unwrap();
        assert_eq!(candidate, vec!['a', 'b', 'b']);
        assert_eq!(rng.calls, 2);
    }

    #[test]
    fn test_repair_empty_candidate() {
        let mut rng = ScriptedRandom::zeros();
        let mut candidate: Vec<char> = Vec::new();
        repair_adjacent(&mut rng, &mut candidate).unwrap();
        assert_eq!(rng.calls, 0);
    }
}
