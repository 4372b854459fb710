//! Suffix mapping loading.

use std::path::Path;

use osm_model::SuffixMapping;
use tracing::info;

use crate::error::{IngestError, Result};

/// Load a suffix mapping from a JSON object file.
///
/// A missing or malformed file is fatal: the caller should abort before
/// processing any element.
pub fn load_suffix_mapping(path: &Path) -> Result<SuffixMapping> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::from_io(path, e))?;
    let mapping =
        SuffixMapping::from_json_str(&contents).map_err(|source| IngestError::InvalidMapping {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        path = %path.display(),
        entries = mapping.len(),
        "loaded suffix mapping"
    );
    Ok(mapping)
}
