//! Tag key classification.
//!
//! Keys are classified by an ordered list of rules; the first rule whose
//! pattern matches decides the [`KeyType`]. The categories overlap (an empty
//! key is both `lower` and `word_plus_colon`), so the order is part of the
//! contract.

use std::sync::LazyLock;

use osm_model::KeyType;
use regex::Regex;
use tracing::warn;

struct KeyRule {
    key_type: KeyType,
    pattern: Regex,
}

impl KeyRule {
    fn new(key_type: KeyType, pattern: &str) -> Self {
        Self {
            key_type,
            pattern: Regex::new(pattern).expect("Invalid key classification regex"),
        }
    }
}

/// Characters that cannot appear in a document-store key.
const PROBLEM_CHARS_PATTERN: &str = r#"[=\+/&<>;'"\?%#$@,\. \t\r\n]"#;

/// Lowercase namespace, a colon, then the (possibly colon-separated) rest.
static LOWER_COLON_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\p{Ll}_]*):([\p{Ll}_:]*)$").expect("Invalid namespaced key regex")
});

static PROBLEM_CHARS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PROBLEM_CHARS_PATTERN).expect("Invalid problem chars regex"));

static KEY_RULES: LazyLock<Vec<KeyRule>> = LazyLock::new(|| {
    vec![
        KeyRule::new(KeyType::Lower, r"^[\p{Ll}_]*$"),
        KeyRule::new(KeyType::LowerColon, r"^[\p{Ll}_]*:[\p{Ll}_:]*$"),
        KeyRule::new(KeyType::AlphaWithUpper, r"^[\p{L}_]*$"),
        KeyRule::new(KeyType::WordPlusColon, r"^[\w:]*$"),
        KeyRule::new(KeyType::ProblemChars, PROBLEM_CHARS_PATTERN),
    ]
});

/// Classify a tag key. Total: every key gets exactly one category.
///
/// Keys falling through to [`KeyType::Other`] are logged, since the rules are
/// expected to cover well-formed input.
pub fn classify_key(key: &str) -> KeyType {
    match KEY_RULES.iter().find(|rule| rule.pattern.is_match(key)) {
        Some(rule) => rule.key_type,
        None => {
            warn!(key = %key, "tag key did not match any known key type");
            KeyType::Other
        }
    }
}

/// Whether `key` contains a character that is unsafe as a record key.
pub fn has_problem_chars(key: &str) -> bool {
    PROBLEM_CHARS_REGEX.is_match(key)
}

/// Split a lowercase namespaced key into `(namespace, rest)`.
///
/// `rest` may itself contain colons (`addr:street:name` gives
/// `("addr", "street:name")`). Keys that are not lowercase-namespaced give
/// `None`.
pub fn split_namespace(key: &str) -> Option<(&str, &str)> {
    let caps = LOWER_COLON_REGEX.captures(key)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}
