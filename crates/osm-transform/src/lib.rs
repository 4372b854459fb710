//! Reshaping of OSM elements into document-store records.
//!
//! # Overview
//!
//! - [`ElementShaper`] turns a `node` or `way` element into a
//!   [`ShapedRecord`](osm_model::ShapedRecord): provenance attributes under
//!   `created`, coordinates under `pos`, `addr:*` tags under `address`, way
//!   node references under `node_refs`, everything else copied as is.
//! - [`RecordWriter`] streams records out as JSON lines.
//!
//! # Example
//!
//! ```ignore
//! use osm_transform::{ElementShaper, RecordWriter};
//!
//! let shaper = ElementShaper::new(mapping);
//! let mut writer = RecordWriter::new(std::io::stdout());
//! if let Some(record) = shaper.shape(&element) {
//!     writer.write(&record)?;
//! }
//! ```

mod error;
mod shaper;
mod writer;

pub use error::{Result, TransformError};
pub use shaper::{ADDRESS_NAMESPACE, CREATED_ATTRIBUTES, ElementShaper};
pub use writer::RecordWriter;
