//! Read-only diagnostics over OSM element streams.
//!
//! # Overview
//!
//! - [`StreetAuditor`]: collects unexpected street suffixes (with a bounded
//!   sample of example names each) and street names that are not normalized.
//! - [`TagCounts`], [`KeyTypeCounts`], [`UserSet`]: simple streaming
//!   statistics over element names, tag key categories and contributors.
//!
//! Every aggregate is fed one top-level element at a time and keeps no
//! reference to it. Partial aggregates from separate slices of a stream can
//! be combined with `merge`.

mod bounded;
mod counters;
mod street;

pub use bounded::BoundedSet;
pub use counters::{KeyTypeCounts, TagCounts, UserSet};
pub use street::{
    AuditConfig, DEFAULT_EXPECTED_SUFFIXES, DEFAULT_SAMPLE_LIMIT, STREET_KEY, StreetAudit,
    StreetAuditor, audit_streets, street_name,
};
