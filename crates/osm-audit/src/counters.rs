//! Streaming tag, key type and contributor statistics.

use std::collections::{BTreeMap, BTreeSet};

use osm_model::{KeyType, RawElement, TAG_TAG};
use osm_normalization::classify_key;

/// Occurrences of every element name in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCounts {
    counts: BTreeMap<String, u64>,
}

impl TagCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count `element` and all of its descendants.
    pub fn observe(&mut self, element: &RawElement) {
        for node in element.descendants() {
            self.observe_name(&node.tag);
        }
    }

    /// Count a single element name, e.g. the document root.
    pub fn observe_name(&mut self, name: &str) {
        match self.counts.get_mut(name) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(name.to_string(), 1);
            }
        }
    }

    pub fn get(&self, name: &str) -> u64 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Element names with their counts, alphabetically.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn merge(&mut self, other: TagCounts) {
        for (name, count) in other.counts {
            *self.counts.entry(name).or_insert(0) += count;
        }
    }
}

/// Number of `tag` keys per [`KeyType`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyTypeCounts {
    counts: BTreeMap<KeyType, u64>,
}

impl KeyTypeCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the key of every `tag` element in the subtree. Tags without
    /// a `k` attribute are not counted.
    pub fn observe(&mut self, element: &RawElement) {
        for tag in element.descendants().filter(|e| e.tag == TAG_TAG) {
            if let Some(key) = tag.attr("k") {
                *self.counts.entry(classify_key(key)).or_insert(0) += 1;
            }
        }
    }

    pub fn get(&self, key_type: KeyType) -> u64 {
        self.counts.get(&key_type).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Observed categories, most frequent first; ties in classification order.
    pub fn most_common(&self) -> Vec<(KeyType, u64)> {
        let mut entries: Vec<_> = self.counts.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }

    pub fn merge(&mut self, other: KeyTypeCounts) {
        for (key_type, count) in other.counts {
            *self.counts.entry(key_type).or_insert(0) += count;
        }
    }
}

/// Distinct contributor ids (`uid` attributes) seen anywhere in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSet {
    users: BTreeSet<String>,
}

impl UserSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, element: &RawElement) {
        for node in element.descendants() {
            if let Some(uid) = node.attr("uid")
                && !self.users.contains(uid)
            {
                self.users.insert(uid.to_string());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn contains(&self, uid: &str) -> bool {
        self.users.contains(uid)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.users.iter().map(String::as_str)
    }

    pub fn merge(&mut self, other: UserSet) {
        self.users.extend(other.users);
    }
}
