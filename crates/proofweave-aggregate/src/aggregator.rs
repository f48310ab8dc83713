//! `Aggregator` (§4.C): dedups extraction results into `AggregatedResult`
//! buckets, enforces a size cap, and optionally filters NER-tagged buckets
//! by confidence before yielding them to the resolution pipeline.
//!
//! Grounded on `original_source/ftm_analyze/analysis/aggregate/aggregator.py`:
//! overflow is checked *before* key computation (so a key that would have
//! been rejected anyway doesn't consume the counter), rejection reasons are
//! tallied by name, and confidence filtering in `iter_results` only ever
//! applies to [`Tag::NER_TAGS`].

use std::collections::BTreeMap;

use proofweave_types::Tag;

use crate::aggregated::AggregatedResult;
use crate::confidence::ConfidenceScorer;
use crate::key::make_key;

/// Snapshot of what happened across every `add()` call, for diagnostics
/// (§7 tracer).
#[derive(Debug, Clone, Default)]
pub struct TraceSummary {
    pub total_added: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub unique_results: usize,
    pub rejection_reasons: BTreeMap<String, usize>,
}

pub struct Aggregator {
    results: BTreeMap<(String, Tag), AggregatedResult>,
    max_results: usize,
    scorer: Option<ConfidenceScorer>,
    total_added: usize,
    accepted: usize,
    rejected: usize,
    rejection_reasons: BTreeMap<String, usize>,
}

impl Aggregator {
    pub fn new(max_results: usize) -> Self {
        Self {
            results: BTreeMap::new(),
            max_results,
            scorer: None,
            total_added: 0,
            accepted: 0,
            rejected: 0,
            rejection_reasons: BTreeMap::new(),
        }
    }

    pub fn with_confidence_scorer(mut self, scorer: ConfidenceScorer) -> Self {
        self.scorer = Some(scorer);
        self
    }

    fn reject(&mut self, reason: &str) {
        self.rejected += 1;
        *self.rejection_reasons.entry(reason.to_string()).or_insert(0) += 1;
    }

    /// Fold one raw candidate into the aggregator. Mirrors the Python's
    /// ordering exactly: the overflow check runs before the key is even
    /// computed, so an overflowing call never reaches "invalid_key". Returns
    /// whether the candidate was accepted, mirroring the original's
    /// `aggregator.add(result) -> bool`.
    pub fn add(&mut self, value: &str, tag: Tag, source: &str, confidence: Option<f32>) -> bool {
        self.total_added += 1;

        if self.results.len() >= self.max_results {
            self.reject("max_results_exceeded");
            return false;
        }

        let Some(key) = make_key(tag, value) else {
            self.reject("invalid_key");
            return false;
        };

        self.accepted += 1;
        self.results
            .entry((key.clone(), tag))
            .or_insert_with(|| AggregatedResult::new(key, tag))
            .add_value(value, source, confidence);
        true
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Yield every surviving bucket, applying confidence filtering only to
    /// NER-tagged buckets and only when a scorer is attached (§4.C). A
    /// bucket is dropped if *any* of its values fails, not just its
    /// best/representative one.
    pub fn iter_results(&self) -> impl Iterator<Item = &AggregatedResult> {
        self.results.values().filter(move |r| {
            if !r.tag.is_ner() {
                return true;
            }
            match &self.scorer {
                Some(scorer) => scorer.is_valid(r.values.iter().map(String::as_str)),
                None => true,
            }
        })
    }

    pub fn trace_summary(&self) -> TraceSummary {
        TraceSummary {
            total_added: self.total_added,
            accepted: self.accepted,
            rejected: self.rejected,
            unique_results: self.results.len(),
            rejection_reasons: self.rejection_reasons.clone(),
        }
    }
}
