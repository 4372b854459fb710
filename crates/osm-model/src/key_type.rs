//! Tag key taxonomy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a `<tag k="...">` key.
///
/// Variants are listed in classification order; the first matching rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    /// Only lowercase letters and underscores (`highway`, `name_1` does not qualify).
    Lower,
    /// Lowercase letters/underscores with at least one colon (`addr:street`).
    LowerColon,
    /// Letters/underscores with at least one non-lowercase letter (`FIXME`).
    AlphaWithUpper,
    /// Word characters and colons (`tiger:name_base_1`).
    WordPlusColon,
    /// Contains a character that is unsafe as a document-store key.
    ProblemChars,
    /// Anything else.
    Other,
}

impl KeyType {
    pub const ALL: [KeyType; 6] = [
        KeyType::Lower,
        KeyType::LowerColon,
        KeyType::AlphaWithUpper,
        KeyType::WordPlusColon,
        KeyType::ProblemChars,
        KeyType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::LowerColon => "lower_colon",
            Self::AlphaWithUpper => "alpha_with_upper",
            Self::WordPlusColon => "word_plus_colon",
            Self::ProblemChars => "problem_chars",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
