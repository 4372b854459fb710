//! Street suffix correction table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Known-bad suffix token to canonical replacement.
///
/// Keys are matched case-sensitively and may carry a trailing period
/// (`"St."` and `"St"` are distinct entries). The table is read-only once
/// loaded and is passed explicitly to whatever needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuffixMapping {
    entries: BTreeMap<String, String>,
}

impl SuffixMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of string to string, e.g. `{"St.": "Street"}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Canonical replacement for `suffix`, if one is configured.
    pub fn get(&self, suffix: &str) -> Option<&str> {
        self.entries.get(suffix).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for SuffixMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelError;

    #[test]
    fn parses_json_object() {
        let mapping = SuffixMapping::from_json_str(r#"{"St.": "Street", "Ave": "Avenue"}"#)
            .expect("parse mapping");
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("St."), Some("Street"));
        assert_eq!(mapping.get("st."), None);
        assert_eq!(mapping.get("St"), None);
    }

    #[test]
    fn rejects_non_string_values() {
        let err = SuffixMapping::from_json_str(r#"{"St.": 1}"#).unwrap_err();
        assert!(matches!(err, ModelError::InvalidMapping(_)));
    }

    #[test]
    fn rejects_arrays() {
        assert!(SuffixMapping::from_json_str(r#"["St."]"#).is_err());
    }
}
