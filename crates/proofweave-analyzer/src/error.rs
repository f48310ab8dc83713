//! Errors raised by the analyzer (§7.1: only missing-id failures escape to
//! the caller; backend loading happens before a `NerBackend`/`Extractor` is
//! handed to `Analyzer::new`, so `ExtractorLoadError` surfaces there instead
//! — see `proofweave_extract::ExtractError`. Every other taxonomy entry is
//! logged and skipped, or turned into a `Mention::reject`.)

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// InputInvalid (missing id), fatal.
    #[error("source entity has no id")]
    MissingId(#[from] proofweave_types::TypesError),
}
