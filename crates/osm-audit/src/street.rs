//! Street name auditing.
//!
//! A read-only pass over `node`/`way` elements that collects, per unexpected
//! suffix, a few example street names, plus every street name that is not
//! already in normalized form.

use std::collections::{BTreeMap, BTreeSet};

use osm_model::{RawElement, TAG_TAG};
use osm_normalization::{normalize_name, street_type};
use tracing::trace;

use crate::bounded::BoundedSet;

/// Tag key carrying the street name.
pub const STREET_KEY: &str = "addr:street";

/// Canonical suffixes that are not reported as unexpected.
pub const DEFAULT_EXPECTED_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Boulevard", "Drive", "Court", "Place", "Square", "Lane", "Road", "Trail",
    "Parkway", "Commons",
];

/// Examples kept per unexpected suffix.
pub const DEFAULT_SAMPLE_LIMIT: usize = 5;

/// Auditor configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    /// Suffix tokens considered canonical (case-sensitive).
    pub expected_suffixes: BTreeSet<String>,
    /// Maximum example names kept per unexpected suffix.
    pub sample_limit: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            expected_suffixes: DEFAULT_EXPECTED_SUFFIXES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }
}

impl AuditConfig {
    /// Replace the expected suffix list.
    #[must_use]
    pub fn with_expected_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected_suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_sample_limit(mut self, limit: usize) -> Self {
        self.sample_limit = limit;
        self
    }

    pub fn is_expected(&self, suffix: &str) -> bool {
        self.expected_suffixes.contains(suffix)
    }
}

/// Accumulated audit results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetAudit {
    sample_limit: usize,
    /// Unexpected suffix to example street names.
    pub unexpected: BTreeMap<String, BoundedSet<String>>,
    /// Raw street names that change under normalization.
    pub unnormalized: BTreeSet<String>,
}

impl StreetAudit {
    pub fn new(sample_limit: usize) -> Self {
        Self {
            sample_limit,
            unexpected: BTreeMap::new(),
            unnormalized: BTreeSet::new(),
        }
    }

    pub fn sample_limit(&self) -> usize {
        self.sample_limit
    }

    fn record_unexpected(&mut self, suffix: &str, name: &str) {
        let limit = self.sample_limit;
        self.unexpected
            .entry(suffix.to_string())
            .or_insert_with(|| BoundedSet::new(limit))
            .insert(name.to_string());
    }

    /// Combine with a partial audit of another slice of the stream.
    pub fn merge(&mut self, other: StreetAudit) {
        for (suffix, samples) in other.unexpected {
            let limit = self.sample_limit;
            self.unexpected
                .entry(suffix)
                .or_insert_with(|| BoundedSet::new(limit))
                .merge(samples);
        }
        self.unnormalized.extend(other.unnormalized);
    }

    pub fn is_clean(&self) -> bool {
        self.unexpected.is_empty() && self.unnormalized.is_empty()
    }
}

/// Streaming street name auditor.
#[derive(Debug, Clone)]
pub struct StreetAuditor {
    config: AuditConfig,
    audit: StreetAudit,
}

impl StreetAuditor {
    pub fn new(config: AuditConfig) -> Self {
        let audit = StreetAudit::new(config.sample_limit);
        Self { config, audit }
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Audit one top-level element. Elements other than `node`/`way`, and
    /// elements without a street name, are ignored.
    pub fn observe(&mut self, element: &RawElement) {
        if element.kind().is_none() {
            return;
        }
        let Some(name) = street_name(element) else {
            return;
        };

        if let Some(suffix) = street_type(name)
            && !self.config.is_expected(suffix)
        {
            trace!(suffix, name, "unexpected street suffix");
            self.audit.record_unexpected(suffix, name);
        }

        if name != normalize_name(name) {
            self.audit.unnormalized.insert(name.to_string());
        }
    }

    pub fn audit(&self) -> &StreetAudit {
        &self.audit
    }

    pub fn finish(self) -> StreetAudit {
        self.audit
    }
}

/// Value of the first `addr:street` tag of `element`.
pub fn street_name(element: &RawElement) -> Option<&str> {
    element
        .children_named(TAG_TAG)
        .find(|tag| tag.attr("k") == Some(STREET_KEY))
        .and_then(|tag| tag.attr("v"))
}

/// Audit a whole element sequence with the given configuration.
pub fn audit_streets<'a, I>(elements: I, config: AuditConfig) -> StreetAudit
where
    I: IntoIterator<Item = &'a RawElement>,
{
    let mut auditor = StreetAuditor::new(config);
    for element in elements {
        auditor.observe(element);
    }
    auditor.finish()
}
