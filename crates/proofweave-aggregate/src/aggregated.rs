//! `AggregatedResult` (§4.C): one surviving dedup bucket, accumulating every
//! raw value and source extractor that hashed to the same key.

use std::collections::BTreeSet;

use proofweave_types::Tag;

/// Everything the aggregator has seen for one `(key, tag)` bucket.
///
/// `values`/`sources` are `BTreeSet`s rather than insertion-ordered vectors
/// per the deterministic-tie-break Open Question resolution (SPEC_FULL.md
/// §9.1): "first value" downstream consumers want is the lexicographically
/// smallest, not whichever extractor happened to run first.
#[derive(Debug, Clone)]
pub struct AggregatedResult {
    pub key: String,
    pub tag: Tag,
    pub values: BTreeSet<String>,
    pub sources: BTreeSet<String>,
    pub confidence: Option<f32>,
}

impl AggregatedResult {
    pub fn new(key: impl Into<String>, tag: Tag) -> Self {
        Self {
            key: key.into(),
            tag,
            values: BTreeSet::new(),
            sources: BTreeSet::new(),
            confidence: None,
        }
    }

    /// Fold one raw observation into this bucket. Confidence is kept as the
    /// maximum seen across every contributing observation.
    pub fn add_value(&mut self, value: impl Into<String>, source: impl Into<String>, confidence: Option<f32>) {
        self.values.insert(value.into());
        self.sources.insert(source.into());
        if let Some(c) = confidence {
            self.confidence = Some(self.confidence.map_or(c, |existing| existing.max(c)));
        }
    }

    /// The canonical value for this bucket: deterministically the smallest
    /// under lexicographic order (§9.1 Open Question resolution).
    pub fn best_value(&self) -> Option<&str> {
        self.values.iter().next().map(String::as_str)
    }
}
