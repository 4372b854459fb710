use thiserror::Error;

/// Errors raised while writing shaped records.
///
/// Shaping itself cannot fail; only the output sink can.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to write record: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TransformError>;
