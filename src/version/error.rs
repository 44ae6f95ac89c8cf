use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database lock poisoned")]
    LockPoisoned,

    #[error("Invalid release data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("No versions to resolve the latest version from")]
    EmptyInput,

    #[error("Selected version not found: {focal}")]
    FocalNotFound { focal: String },

    #[error("Invalid release version format: {0}")]
    InvalidPrefix(String),

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("No releases found for {prefix}")]
    NoMatchingVersions { prefix: String },

    #[error("Unknown owner: {0}")]
    UnknownOwner(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
