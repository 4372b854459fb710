//! OSM data ingestion utilities.
//!
//! This crate provides the streaming side of the pipeline: reading an
//! OpenStreetMap XML export one top-level element at a time, logging progress
//! over long streams, and loading the suffix mapping configuration.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use osm_ingest::{OsmReader, ProgressIter, load_suffix_mapping};
//!
//! let mapping = load_suffix_mapping(Path::new("street_mapping.json"))?;
//! let reader = OsmReader::from_path(Path::new("map.osm"))?;
//! for element in ProgressIter::with_default_step(reader) {
//!     let element = element?;
//!     // ...
//! }
//! ```

mod error;
mod mapping;
mod progress;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === XML Reading ===
pub use reader::OsmReader;

// === Progress ===
pub use progress::{DEFAULT_PROGRESS_STEP, ProgressIter};

// === Configuration ===
pub use mapping::load_suffix_mapping;
