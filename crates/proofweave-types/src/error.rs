//! Error types shared across the pipeline.

use thiserror::Error;

/// Result type alias for ontology-level operations.
pub type Result<T> = std::result::Result<T, TypesError>;

/// Errors raised while constructing or mutating ontology entities.
#[derive(Debug, Error)]
pub enum TypesError {
    #[error("entity has no id")]
    MissingId,

    #[error("unknown schema: {0}")]
    UnknownSchema(String),

    #[error("value could not be cleaned for property type {0}")]
    CleanFailed(String),
}
