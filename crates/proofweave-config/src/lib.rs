//! Typed configuration surface (§6 "Configuration surface", §6.1).
//!
//! This crate holds only the *shape* of configuration: a plain struct with a
//! `Default` matching the original system's defaults. File discovery, env
//! layering, and CLI parsing are deliberately not here (§1: "configuration
//! loading" is an external collaborator) — callers build or deserialize a
//! [`Settings`] however suits their deployment.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which NER extractor variant the analyzer should assemble (§4.B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NerEngineKind {
    Statistical,
    SequenceTagger,
    Transformer,
    ZeroShot,
}

impl Default for NerEngineKind {
    fn default() -> Self {
        NerEngineKind::ZeroShot
    }
}

/// Root configuration structure for one analyzer run.
///
/// ```toml
/// ner_engine = "zero-shot"
/// use_confidence = true
/// ner_type_model_confidence = 0.5
/// annotate = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which NER variant to use (§6 configuration surface).
    pub ner_engine: NerEngineKind,

    /// Enable confidence filtering in the aggregator (§4.C). Default on.
    pub use_confidence: bool,

    /// Float threshold for the confidence scorer (§4.C, §9 entropy formula).
    pub ner_type_model_confidence: f32,

    /// Enable RigourStage (heuristic classifier, §4.E.1).
    pub use_rigour: bool,
    /// Enable JudithaClassifierStage (ML reclassifier, §4.E.2).
    pub use_juditha_classifier: bool,
    /// Enable JudithaValidatorStage (PER name validation, §4.E.3).
    pub use_juditha_validator: bool,
    /// Enable GeonamesStage (LOC canonicalization, §4.E.4).
    pub use_geonames: bool,
    /// Enable JudithaLookupStage (external entity linking, §4.E.5).
    pub use_juditha_lookup: bool,

    /// Enable annotated indexText output (§4.F).
    pub annotate: bool,

    /// Collect per-run counters for diagnostics (§7 tracer).
    pub enable_tracing: bool,

    /// Language to fall back to when none is detected (§4.A).
    pub ner_default_lang: String,

    /// Score threshold below which JudithaLookupStage treats a hit as a miss (§4.E.5).
    pub juditha_lookup_threshold: f32,
    /// Score threshold for JudithaClassifierStage's confident-prediction cutoff (§4.E.2).
    pub juditha_classifier_threshold: f32,
    /// Jaro-similarity threshold for GeonamesStage matches (§4.E.4).
    pub geonames_jaro_threshold: f32,
    /// Whether GeonamesStage rejects mentions with no gazetteer match (§4.E.4).
    pub geonames_reject_unmatched: bool,

    /// Maximum distinct (key, tag) pairs the aggregator retains per source entity (§4.C).
    pub aggregator_max_results: usize,
    /// Capacity of each stage's per-name memoization LRU (§4.E, §9).
    pub memoization_capacity: usize,
    /// Per-stage timeout for external-service calls (§5); a timeout is a non-match.
    pub stage_timeout: Duration,

    /// Model/tokenizer identifiers for the zero-shot GLiNER backend (§4.B variant 4).
    pub ner_model_path: Option<String>,
    pub ner_tokenizer_path: Option<String>,
    /// Minimum span confidence accepted from the zero-shot backend.
    pub ner_zero_shot_threshold: f32,

    /// Maximum chunk length in characters before the chunker slices again (§4.A).
    pub chunk_max_chars: usize,
    /// Minimum language-detection confidence retained (§4.A).
    pub language_confidence_floor: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ner_engine: NerEngineKind::default(),
            use_confidence: true,
            ner_type_model_confidence: 0.5,
            use_rigour: true,
            use_juditha_classifier: true,
            use_juditha_validator: true,
            use_geonames: true,
            use_juditha_lookup: true,
            annotate: true,
            enable_tracing: true,
            ner_default_lang: "eng".to_string(),
            juditha_lookup_threshold: 0.8,
            juditha_classifier_threshold: 0.9,
            geonames_jaro_threshold: 0.9,
            geonames_reject_unmatched: false,
            aggregator_max_results: 10_000,
            memoization_capacity: 10_000,
            stage_timeout: Duration::from_secs(5),
            ner_model_path: None,
            ner_tokenizer_path: None,
            ner_zero_shot_threshold: 0.5,
            chunk_max_chars: 5_000,
            language_confidence_floor: 0.5,
        }
    }
}
