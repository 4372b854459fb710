//! Shaped output records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::element::ElementKind;

/// Top-level keys owned by the record structure itself.
///
/// Attributes or tags with one of these names would break the record's
/// invariants and are never copied as plain fields.
pub const RESERVED_KEYS: &[&str] = &["type", "created", "pos", "address", "node_refs"];

/// Latitude/longitude pair, serialized as `[lat, lon]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position(pub f64, pub f64);

impl Position {
    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lon(self) -> f64 {
        self.1
    }
}

/// Nested record shaped from one `node` or `way` element.
///
/// Serializes as a flat JSON object: `type`, then `created`, `pos`,
/// `address` and `node_refs` when present, then the plain fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapedRecord {
    #[serde(rename = "type")]
    pub kind: ElementKind,

    /// Provenance attributes (version, changeset, timestamp, user, uid).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub created: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Position>,

    /// `addr:*` tags keyed by the part after the colon.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub address: BTreeMap<String, String>,

    /// Way node references in document order; never present but empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_refs: Option<Vec<String>>,

    /// Remaining attributes and tags, copied verbatim.
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl ShapedRecord {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            created: BTreeMap::new(),
            pos: None,
            address: BTreeMap::new(),
            node_refs: None,
            fields: BTreeMap::new(),
        }
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn street(&self) -> Option<&str> {
        self.address.get("street").map(String::as_str)
    }

    /// Append a node reference, creating the list on first use.
    pub fn push_node_ref(&mut self, node_ref: impl Into<String>) {
        self.node_refs
            .get_or_insert_with(Vec::new)
            .push(node_ref.into());
    }
}

/// Whether `key` collides with a structural record key.
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sections_are_omitted() {
        let record = ShapedRecord::new(ElementKind::Node);
        let json = serde_json::to_string(&record).expect("serialize record");
        assert_eq!(json, r#"{"type":"node"}"#);
    }

    #[test]
    fn position_serializes_as_pair() {
        let mut record = ShapedRecord::new(ElementKind::Node);
        record.pos = Some(Position(41.5, -87.25));
        record.fields.insert("id".to_string(), "7".to_string());
        let json = serde_json::to_string(&record).expect("serialize record");
        assert_eq!(json, r#"{"type":"node","pos":[41.5,-87.25],"id":"7"}"#);
    }

    #[test]
    fn node_refs_created_on_first_push() {
        let mut record = ShapedRecord::new(ElementKind::Way);
        assert!(record.node_refs.is_none());
        record.push_node_ref("10");
        record.push_node_ref("20");
        assert_eq!(
            record.node_refs.as_deref(),
            Some(&["10".to_string(), "20".to_string()][..])
        );
    }

    #[test]
    fn reserved_keys() {
        assert!(is_reserved_key("type"));
        assert!(is_reserved_key("node_refs"));
        assert!(!is_reserved_key("name"));
    }
}
