//! Street name splitting, normalization and suffix correction.

use std::sync::LazyLock;

use osm_model::SuffixMapping;
use regex::Regex;

/// Longest prefix ending in whitespace, then a final non-whitespace run
/// (optionally ending in a period) anchored at the end.
static STREET_TYPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*\s)(\S+\.?)$").expect("Invalid street type regex"));

/// Words shorter than this are left as written (`St`, `NW`, `Rd.`).
const MIN_CAPITALIZED_LEN: usize = 4;

/// Split a street name into its base and trailing suffix token.
///
/// The base keeps its separating whitespace, so `base + suffix` rebuilds
/// the input. A name without a split point (a single word, or one ending in
/// whitespace, a trailing newline included) comes back whole with no suffix.
///
/// ```
/// use osm_normalization::split_street;
///
/// assert_eq!(split_street("Washington Ave."), ("Washington ", Some("Ave.")));
/// assert_eq!(split_street("Broadway"), ("Broadway", None));
/// ```
pub fn split_street(name: &str) -> (&str, Option<&str>) {
    match STREET_TYPE_REGEX.captures(name) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(base), Some(suffix)) => (base.as_str(), Some(suffix.as_str())),
            _ => (name, None),
        },
        None => (name, None),
    }
}

/// The suffix token of a street name, if it has one.
pub fn street_type(name: &str) -> Option<&str> {
    split_street(name).1
}

/// Collapse whitespace and capitalize the first letter of every word of
/// four or more characters.
///
/// Only the first character changes; `"mcDonald"` becomes `"McDonald"` and
/// `"NW"` stays as is. The result is a fixed point: normalizing it again
/// returns the same string.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    if word.chars().count() < MIN_CAPITALIZED_LEN {
        return word.to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Normalize a street name, then replace its suffix when the mapping has a
/// correction for it.
///
/// Unknown suffixes and suffix-less names are returned normalized but
/// otherwise unchanged.
pub fn update_name(name: &str, mapping: &SuffixMapping) -> String {
    let normalized = normalize_name(name);
    if let (base, Some(suffix)) = split_street(&normalized)
        && let Some(replacement) = mapping.get(suffix)
    {
        return format!("{base}{replacement}");
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> SuffixMapping {
        [("St", "Street"), ("St.", "Street"), ("Ave", "Avenue"), ("Rd.", "Road")]
            .into_iter()
            .collect()
    }

    #[test]
    fn splits_last_token() {
        assert_eq!(
            split_street("West Lexington St."),
            ("West Lexington ", Some("St."))
        );
        assert_eq!(split_street("Main  Street"), ("Main  ", Some("Street")));
    }

    #[test]
    fn single_word_has_no_suffix() {
        assert_eq!(split_street("Broadway"), ("Broadway", None));
        assert_eq!(split_street(""), ("", None));
    }

    #[test]
    fn trailing_whitespace_has_no_suffix() {
        assert_eq!(split_street("Main St "), ("Main St ", None));
        assert_eq!(split_street("   "), ("   ", None));
        assert_eq!(split_street("Main St\n"), ("Main St\n", None));
    }

    #[test]
    fn normalizes_whitespace() {
        assert_eq!(normalize_name("  main \t street  "), "Main Street");
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name(" \n "), "");
    }

    #[test]
    fn short_words_untouched() {
        assert_eq!(normalize_name("north lincoln ave"), "North Lincoln ave");
        assert_eq!(normalize_name("elm st NW"), "elm st NW");
    }

    #[test]
    fn only_first_letter_changes() {
        assert_eq!(normalize_name("mcDonald DRIVE"), "McDonald DRIVE");
    }

    #[test]
    fn capitalizes_non_ascii() {
        assert_eq!(normalize_name("ébène road"), "Ébène Road");
    }

    #[test]
    fn update_name_applies_mapping() {
        let mapping = mapping();
        assert_eq!(
            update_name("West Lexington St.", &mapping),
            "West Lexington Street"
        );
        assert_eq!(update_name("Baldwin Rd.", &mapping), "Baldwin Road");
        assert_eq!(update_name("  vine   St ", &mapping), "Vine Street");
    }

    #[test]
    fn update_name_without_match_only_normalizes() {
        let mapping = mapping();
        assert_eq!(update_name("Main Street", &mapping), "Main Street");
        assert_eq!(update_name("main street", &mapping), "Main Street");
        assert_eq!(update_name("Broadway", &mapping), "Broadway");
        assert_eq!(update_name("Elm st.", &mapping), "Elm st.");
    }

    #[test]
    fn street_type_reads_suffix() {
        assert_eq!(street_type("Washington Ave."), Some("Ave."));
        assert_eq!(street_type("Broadway"), None);
    }
}
