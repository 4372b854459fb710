//! Street name normalization and tag key classification.
//!
//! # Overview
//!
//! - **Street splitting**: [`split_street`] separates the trailing suffix
//!   token (`"Ave."`) from the rest of a street name.
//! - **Name normalization**: [`normalize_name`] collapses whitespace and
//!   capitalizes longer words; it is idempotent.
//! - **Suffix correction**: [`update_name`] normalizes, then rewrites a known
//!   bad suffix through a [`SuffixMapping`](osm_model::SuffixMapping).
//! - **Key classification**: [`classify_key`] sorts tag keys into the
//!   [`KeyType`](osm_model::KeyType) taxonomy.
//!
//! All functions are pure and infallible.

mod keys;
mod street;

pub use keys::{classify_key, has_problem_chars, split_namespace};
pub use street::{normalize_name, split_street, street_type, update_name};
