//! Raw XML elements as produced by the streaming reader.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Element name of an OSM point.
pub const NODE_TAG: &str = "node";
/// Element name of an OSM polyline/polygon.
pub const WAY_TAG: &str = "way";
/// Element name of a key/value child.
pub const TAG_TAG: &str = "tag";
/// Element name of a way's node reference child.
pub const ND_TAG: &str = "nd";

/// The two top-level element kinds that carry address data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
}

impl ElementKind {
    /// Resolve an element name; anything other than `node`/`way` is `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            NODE_TAG => Some(Self::Node),
            WAY_TAG => Some(Self::Way),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Node => NODE_TAG,
            Self::Way => WAY_TAG,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One XML element with its attributes and child elements.
///
/// Elements are owned values; the reader hands each top-level element over
/// by value and the core drops it once processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawElement {
    /// Element name (`node`, `way`, `tag`, `nd`, ...).
    pub tag: String,
    /// Attribute name to unescaped value.
    pub attributes: BTreeMap<String, String>,
    /// Child elements in document order.
    pub children: Vec<RawElement>,
}

impl RawElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute insertion.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder-style child insertion.
    #[must_use]
    pub fn with_child(mut self, child: RawElement) -> Self {
        self.children.push(child);
        self
    }

    /// Convenience for `<tag k=".." v=".."/>` children.
    #[must_use]
    pub fn with_tag(self, key: &str, value: &str) -> Self {
        self.with_child(RawElement::new(TAG_TAG).with_attr("k", key).with_attr("v", value))
    }

    /// Convenience for `<nd ref=".."/>` children.
    #[must_use]
    pub fn with_node_ref(self, node_ref: &str) -> Self {
        self.with_child(RawElement::new(ND_TAG).with_attr("ref", node_ref))
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn kind(&self) -> Option<ElementKind> {
        ElementKind::from_tag(&self.tag)
    }

    /// Direct children with the given element name, in document order.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a RawElement> {
        self.children.iter().filter(move |child| child.tag == tag)
    }

    /// This element followed by all of its descendants, in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Pre-order walk over an element subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a RawElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a RawElement;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}
