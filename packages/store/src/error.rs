use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("browser storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write `{key}` to storage: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to remove `{key}` from storage: {reason}")]
    Remove { key: String, reason: String },
    #[error("refusing to store an empty token")]
    EmptyToken,
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}
