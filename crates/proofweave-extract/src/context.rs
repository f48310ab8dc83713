//! `ExtractionContext` and `ExtractionResult` (§3, §4.B).

use std::collections::BTreeMap;

use proofweave_types::Tag;

/// What an extractor sees for one text chunk: the chunk itself, the output
/// entity's detected languages, and the entity's id for provenance.
#[derive(Debug, Clone)]
pub struct ExtractionContext {
    pub entity_id: String,
    pub text: String,
    pub languages: Vec<String>,
}

impl ExtractionContext {
    pub fn new(entity_id: impl Into<String>, text: impl Into<String>, languages: Vec<String>) -> Self {
        Self { entity_id: entity_id.into(), text: text.into(), languages }
    }
}

/// One candidate produced by one extractor (§3 `ExtractionResult`).
///
/// Invariant upheld by every `Extractor` implementation: `tag` is never
/// [`Tag::Other`] by the time a result leaves `extract()` — OTHER candidates
/// are filtered internally and never constructed here.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub value: String,
    pub tag: Tag,
    pub source: String,
    pub confidence: Option<f32>,
    pub metadata: BTreeMap<String, String>,
}

impl ExtractionResult {
    pub fn new(value: impl Into<String>, tag: Tag, source: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            tag,
            source: source.into(),
            confidence: None,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
