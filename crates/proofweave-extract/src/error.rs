//! Errors raised by extractors (§7: ExtractorLoadError is fatal,
//! ExtractorRuntimeError is logged-and-skipped).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// A requested model/backend could not be loaded. Fatal — the caller
    /// must abort the run rather than continue with a missing recognizer.
    #[error("failed to load extractor backend {backend}: {reason}")]
    BackendLoad { backend: String, reason: String },

    /// A recognizer failed while processing one chunk. Non-fatal — the
    /// caller logs and skips this chunk for this extractor only.
    #[error("extractor {extractor} failed on chunk: {reason}")]
    Runtime { extractor: String, reason: String },
}
