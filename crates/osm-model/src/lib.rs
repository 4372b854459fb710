//! Shared data model for OpenStreetMap auditing and reshaping.
//!
//! # Overview
//!
//! - [`RawElement`]: one XML element with its attributes and children, as
//!   handed over by the streaming reader.
//! - [`ShapedRecord`]: the nested, document-store friendly record produced
//!   from a `node` or `way`.
//! - [`SuffixMapping`]: the read-only street suffix correction table.
//! - [`KeyType`]: the tag key taxonomy used by the classifier and counters.

pub mod element;
pub mod error;
pub mod key_type;
pub mod mapping;
pub mod record;

pub use element::{Descendants, ElementKind, ND_TAG, NODE_TAG, RawElement, TAG_TAG, WAY_TAG};
pub use error::{ModelError, Result};
pub use key_type::KeyType;
pub use mapping::SuffixMapping;
pub use record::{Position, RESERVED_KEYS, ShapedRecord, is_reserved_key};
