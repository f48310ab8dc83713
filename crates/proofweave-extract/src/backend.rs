//! Injectable NER model backends (§1: "the underlying NER model runtimes ...
//! specified as a common capability, not as particular models") and the
//! three extractor variants built on top of them (§4.B variants 1–3).
//!
//! The statistical/sequence-tagger/transformer variants differ only in how
//! they pick which backend(s) to call for a chunk, not in how a backend's
//! raw output becomes `ExtractionResult`s — that conversion (label
//! normalization, `test_name` filtering, LOC→COUNTRY side effect, dedup by
//! normalized value) is shared in [`spans_to_results`], mirroring the
//! teacher's `ner_output_to_extracted` dedup-by-key-keep-highest-score idiom.

use std::collections::BTreeMap;
use std::sync::Arc;

use proofweave_names::{remove_org_prefixes, remove_person_prefixes};
use proofweave_types::Tag;

use crate::context::{ExtractionContext, ExtractionResult};
use crate::error::{ExtractError, Result};
use crate::extractor::{test_name, Extractor};
use crate::gazetteer::CountryGazetteer;

/// One labeled span as reported by a backend, before normalization.
#[derive(Debug, Clone)]
pub struct RawSpan {
    pub text: String,
    pub label: String,
    pub score: Option<f32>,
}

/// A pluggable NER model runtime. Concrete implementations wrap whatever
/// statistical/sequence/transformer model a deployment chooses to load;
/// this crate ships none of them as production backends (only a zero-shot
/// GLiNER backend behind the `zero-shot-gliner` feature in [`crate::zero_shot`]).
pub trait NerBackend: Send + Sync {
    fn tag(&self, text: &str) -> Result<Vec<RawSpan>>;
}

/// Shared span→result conversion used by every NER extractor variant.
pub fn spans_to_results(
    spans: Vec<RawSpan>,
    source: &str,
    gazetteer: &dyn CountryGazetteer,
) -> Vec<ExtractionResult> {
    let mut best: BTreeMap<(Tag, String), ExtractionResult> = BTreeMap::new();
    let mut countries: Vec<ExtractionResult> = Vec::new();

    for span in spans {
        let tag = Tag::from_ner_label(&span.label);
        if !tag.is_ner() {
            continue;
        }
        // Mirrors `clean_entity_prefix`: strip org prefixes, then person
        // prefixes, before the length/alphabetic acceptance check.
        let stripped = remove_person_prefixes(&remove_org_prefixes(span.text.trim()));
        if !test_name(&stripped) {
            continue;
        }
        if tag == Tag::Loc {
            for country in gazetteer.countries_for(span.text.trim()) {
                countries.push(
                    ExtractionResult::new(country, Tag::Country, source)
                        .with_meta("derived_from", "location"),
                );
            }
        }
        let key = (tag, span.text.trim().to_lowercase());
        let candidate = ExtractionResult::new(span.text.trim(), tag, source);
        let candidate = match span.score {
            Some(score) => candidate.with_confidence(score),
            None => candidate,
        };
        match best.get(&key) {
            Some(existing) if existing.confidence.unwrap_or(0.0) >= span.score.unwrap_or(0.0) => {}
            _ => {
                best.insert(key, candidate);
            }
        }
    }

    best.into_values().chain(countries).collect()
}

/// Variant 1: per-language statistical models. Picks one backend per
/// language tag present on the context, falling back to a default-language
/// backend when none of the context's languages has a loaded model.
pub struct StatisticalNerExtractor {
    name: String,
    models: BTreeMap<String, Arc<dyn NerBackend>>,
    default_lang: String,
    gazetteer: Arc<dyn CountryGazetteer>,
}

impl StatisticalNerExtractor {
    pub fn new(
        models: BTreeMap<String, Arc<dyn NerBackend>>,
        default_lang: impl Into<String>,
        gazetteer: Arc<dyn CountryGazetteer>,
    ) -> Self {
        Self { name: "statistical-ner".to_string(), models, default_lang: default_lang.into(), gazetteer }
    }
}

impl Extractor for StatisticalNerExtractor {
    fn name(&self) -> &str {
        &self.name
    }

    fn extract(&self, ctx: &ExtractionContext) -> Result<Vec<ExtractionResult>> {
        let mut selected: Vec<&Arc<dyn NerBackend>> = ctx
            .languages
            .iter()
            .filter_map(|lang| self.models.get(lang))
            .collect();
        if selected.is_empty() {
            if let Some(default_model) = self.models.get(&self.default_lang) {
                selected.push(default_model);
            }
        }
        if selected.is_empty() {
            return Err(ExtractError::BackendLoad {
                backend: self.name.clone(),
                reason: "no statistical model loaded for context languages or default".to_string(),
            });
        }

        let mut spans = Vec::new();
        for model in selected {
            spans.extend(model.tag(&ctx.text)?);
        }
        Ok(spans_to_results(spans, &self.name, self.gazetteer.as_ref()))
    }
}

/// Variant 2: a single multilingual sequence tagger, run per sentence.
pub struct SequenceTaggerNerExtractor {
    name: String,
    backend: Arc<dyn NerBackend>,
    gazetteer: Arc<dyn CountryGazetteer>,
}

impl SequenceTaggerNerExtractor {
    pub fn new(backend: Arc<dyn NerBackend>, gazetteer: Arc<dyn CountryGazetteer>) -> Self {
        Self { name: "sequence-tagger-ner".to_string(), backend, gazetteer }
    }
}

fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if matches!(b, b'.' | b'!' | b'?') {
            let end = i + 1;
            let candidate = text[start..end].trim();
            if !candidate.is_empty() {
                sentences.push(candidate);
            }
            start = end;
        }
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    if sentences.is_empty() {
        sentences.push(text.trim());
    }
    sentences
}

impl Extractor for SequenceTaggerNerExtractor {
    fn name(&self) -> &str {
        &self.name
    }

    fn extract(&self, ctx: &ExtractionContext) -> Result<Vec<ExtractionResult>> {
        let mut spans = Vec::new();
        for sentence in split_sentences(&ctx.text) {
            spans.extend(self.backend.tag(sentence)?);
        }
        Ok(spans_to_results(spans, &self.name, self.gazetteer.as_ref()))
    }
}

/// Variant 3: a token-classification transformer with span aggregation
/// assumed to already be performed by the injected backend.
pub struct TransformerNerExtractor {
    name: String,
    backend: Arc<dyn NerBackend>,
    gazetteer: Arc<dyn CountryGazetteer>,
}

impl TransformerNerExtractor {
    pub fn new(backend: Arc<dyn NerBackend>, gazetteer: Arc<dyn CountryGazetteer>) -> Self {
        Self { name: "transformer-ner".to_string(), backend, gazetteer }
    }
}

impl Extractor for TransformerNerExtractor {
    fn name(&self) -> &str {
        &self.name
    }

    fn extract(&self, ctx: &ExtractionContext) -> Result<Vec<ExtractionResult>> {
        let spans = self.backend.tag(&ctx.text)?;
        Ok(spans_to_results(spans, &self.name, self.gazetteer.as_ref()))
    }
}
