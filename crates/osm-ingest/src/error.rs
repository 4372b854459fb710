//! Error types for OSM data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while opening or streaming an OSM document.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === XML Errors ===
    /// Syntax error reported by the XML tokenizer.
    #[error("XML syntax error at byte {position}: {message}")]
    Xml { position: u64, message: String },

    /// Document ended while elements were still open.
    #[error("unexpected end of document inside <{open}>")]
    UnexpectedEof { open: String },

    /// Document has no root element.
    #[error("XML document has no root element")]
    EmptyDocument,

    // === Configuration Errors ===
    /// Suffix mapping file is not a JSON object of strings.
    #[error("invalid suffix mapping in {path}: {source}")]
    InvalidMapping {
        path: PathBuf,
        #[source]
        source: osm_model::ModelError,
    },
}

impl IngestError {
    /// Map an I/O error on `path` to `FileNotFound` or `FileRead`.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
