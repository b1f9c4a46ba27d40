use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),

    #[error("An error occurred during JSON serialization/deserialization: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("No profile found for owner {0}")]
    UnknownOwner(uuid::Uuid),
}
