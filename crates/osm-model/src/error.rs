use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid suffix mapping: {0}")]
    InvalidMapping(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
