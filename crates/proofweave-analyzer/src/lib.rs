//! The top-level orchestrator crate (§2, §4.A–§4.F):
//!
//! ```text
//!   EntityProxy (source, schema-checked for analyzability)
//!        │
//!        ▼
//!   TextChunker ──► per chunk ──► LanguageDetector
//!        │                              │
//!        ▼                              ▼
//!   Extractor (NER) + PatternExtractor ──► Aggregator
//!        │
//!        ▼
//!   ResolutionPipeline (RigourStage → JudithaClassifierStage →
//!                        JudithaValidatorStage → GeonamesStage →
//!                        JudithaLookupStage)
//!        │
//!        ▼
//!   EntityFactory + Annotator ──► derived entities + mutated output entity
//! ```
//!
//! `Analyzer` wires every other crate in the workspace together behind one
//! `analyze` call; `ExtractionTracer` observes the run for diagnostics.

pub mod analyzer;
pub mod chunker;
pub mod error;
pub mod language;
pub mod tracer;

pub use analyzer::{Analyzer, DETECTED_LANGUAGE_PROPERTY, TEXT_PROPERTY};
pub use chunker::TextChunker;
pub use error::{AnalyzerError, Result};
pub use language::LanguageDetector;
pub use tracer::{ExtractionTracer, TraceSummary};
