use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("encryption failure")]
    Crypto,
}

pub type Result<T> = std::result::Result<T, StoreError>;
