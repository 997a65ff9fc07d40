//! Character class registry and weak-pattern denylists.
//!
//! The four generator classes are pairwise disjoint ASCII sets; their
//! concatenation is the filler alphabet. Both denylists are matched
//! case-insensitively as substrings.

pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGIT_CHARS: &str = "0123456789";
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Union of every class, in class order.
pub const ALL_CHARS: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
    "!@#$%^&*()_+-=[]{}|;:,.<>?",
);

/// Special characters recognised by the strength scorer.
///
/// Wider than [`SPECIAL_CHARS`]: user-typed input may contain quotes,
/// slashes and backslashes that the generator never emits.
pub const SCORER_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Substrings a generated password must never contain.
pub const WEAK_PATTERNS: &[&str] = &[
    "123456",
    "password",
    "Pa$$w0rd",
    "p@ssword",
    "qwerty",
    "abc123",
    "password123",
    "admin",
    "letmein",
    "welcome",
    "monkey",
    "dragon",
    "master",
    "hello",
    "freedom",
    "whatever",
    "qazwsx",
    "trustno1",
    "jordan",
    "harley",
    "ranger",
    "buster",
    "thomas",
    "tigger",
    "robert",
    "soccer",
    "batman",
    "test",
    "pass",
    "guest",
    "info",
    "adm",
    "mysql",
    "user",
    "administrator",
    "oracle",
    "ftp",
    "pi",
    "puppet",
    "ansible",
    "ec2-user",
    "vagrant",
    "azureuser",
    "secret",
];

/// The scorer's denylist. Shorter than [`WEAK_PATTERNS`].
pub const SCORER_WEAK_PATTERNS: &[&str] = &[
    "123456",
    "password",
    "qwerty",
    "abc123",
    "password123",
    "admin",
    "letmein",
    "welcome",
    "monkey",
    "dragon",
    "master",
    "hello",
    "freedom",
    "whatever",
    "qazwsx",
    "trustno1",
    "jordan",
    "harley",
    "ranger",
    "buster",
    "thomas",
    "tigger",
    "robert",
    "soccer",
    "batman",
    "test",
    "pass",
    "guest",
    "info",
    "adm",
    "mysql",
    "user",
    "administrator",
    "oracle",
    "ftp",
    "pi",
    "puppet",
    "ansible",
    "ec2-user",
    "vagrant",
    "azureuser",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharacterClass {
    /// All classes in the order the synthesizer seeds them.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    pub fn members(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE_CHARS,
            CharacterClass::Uppercase => UPPERCASE_CHARS,
            CharacterClass::Digit => DIGIT_CHARS,
            CharacterClass::Special => SPECIAL_CHARS,
        }
    }

    /// Human-readable name used in validation reasons.
    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digit => "numbers",
            CharacterClass::Special => "special characters",
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.members().contains(c)
    }

    /// Returns the class `c` belongs to, if any.
    pub fn of(c: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }

    /// The three classes other than `self`, in class order.
    pub fn others(self) -> [CharacterClass; 3] {
        let mut out = [CharacterClass::Lowercase; 3];
        let mut next = 0;
        for class in Self::ALL {
            if class != self {
                out[next] = class;
                next += 1;
            }
        }
        out
    }
}

/// Returns `true` if `input` contains any pattern of `patterns`, ignoring case.
pub fn contains_weak_pattern(input: &str, patterns: &[&str]) -> bool {
    let lowered = input.to_lowercase();
    patterns
        .iter()
        .any(|pattern| lowered.contains(&pattern.to_lowercase()))
}
