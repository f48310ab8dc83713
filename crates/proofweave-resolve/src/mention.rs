//! `Mention` (§4.D): a pure data carrier threaded through the resolution
//! pipeline. Resolution logic lives in the stages, not here.

use std::collections::BTreeSet;

use proofweave_names::pick_name_set;
use proofweave_types::Tag;

#[derive(Debug, Clone)]
pub struct Mention {
    pub key: String,
    pub tag: Tag,
    pub values: BTreeSet<String>,
    pub entity_id: String,
    pub sources: BTreeSet<String>,

    /// Resolution state, mutated by stages as the mention moves through
    /// the pipeline.
    pub ner_tag: Tag,
    pub resolved_values: Option<BTreeSet<String>>,
    pub canonical_value: Option<String>,
    pub resolved_schema: Option<String>,
    pub resolved_entity_id: Option<String>,

    pub is_rejected: bool,
    pub rejection_reason: Option<String>,
    pub rejection_stage: Option<String>,
}

impl Mention {
    /// Build a `Mention` from one aggregated bucket. `ner_tag` starts as
    /// `tag` when it's an NER tag, else `Other` (§4.D).
    pub fn from_aggregated(
        key: impl Into<String>,
        tag: Tag,
        values: BTreeSet<String>,
        entity_id: impl Into<String>,
        sources: BTreeSet<String>,
    ) -> Self {
        let ner_tag = if tag.is_ner() { tag } else { Tag::Other };
        Self {
            key: key.into(),
            tag,
            values,
            entity_id: entity_id.into(),
            sources,
            ner_tag,
            resolved_values: None,
            canonical_value: None,
            resolved_schema: None,
            resolved_entity_id: None,
            is_rejected: false,
            rejection_reason: None,
            rejection_stage: None,
        }
    }

    /// Mark this mention as rejected (§4.D). Idempotent — a later reject
    /// call never overwrites the first reason/stage.
    pub fn reject(&mut self, reason: impl Into<String>, stage: impl Into<String>) {
        if self.is_rejected {
            return;
        }
        self.is_rejected = true;
        self.rejection_reason = Some(reason.into());
        self.rejection_stage = Some(stage.into());
    }

    /// The values a stage should operate on: resolved values if any stage
    /// has set them, else the raw aggregated values.
    pub fn current_values(&self) -> &BTreeSet<String> {
        self.resolved_values.as_ref().unwrap_or(&self.values)
    }

    /// "The first value" per any iteration order (§5 ordering guarantees):
    /// deterministically the lexicographically smallest, since `values`
    /// and `resolved_values` are `BTreeSet`s (§9.1 Open Question).
    pub fn first_value(&self) -> Option<&str> {
        self.current_values().iter().next().map(String::as_str)
    }

    /// The best display name: `canonical_value` if a stage set one,
    /// else the pick-best-name choice over the current values.
    pub fn caption(&self) -> Option<String> {
        if let Some(canonical) = &self.canonical_value {
            return Some(canonical.clone());
        }
        pick_name_set(self.current_values()).map(str::to_string)
    }

    /// Union of caption, raw values, and resolved values.
    pub fn all_names(&self) -> BTreeSet<String> {
        let mut names: BTreeSet<String> = BTreeSet::new();
        if let Some(caption) = self.caption() {
            names.insert(caption);
        }
        names.extend(self.values.iter().cloned());
        if let Some(resolved) = &self.resolved_values {
            names.extend(resolved.iter().cloned());
        }
        names.retain(|n| !n.is_empty());
        names
    }

    /// Values suitable for annotation (§4.F): resolved if available.
    pub fn annotate_values(&self) -> &BTreeSet<String> {
        self.current_values()
    }
}
