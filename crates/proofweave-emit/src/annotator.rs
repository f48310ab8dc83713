//! `Annotator` (§4.F): accumulates one `Annotation` per distinct value seen
//! on a source entity, then stamps annotated text for search indexing.

use std::collections::BTreeMap;

use proofweave_types::Schema;

use crate::annotation::{Annotation, clean_text, mention_props};

/// Marker prefix on annotated `indexText` output (§6).
pub const ANNOTATED: &str = "__annotated__";

#[derive(Debug, Default)]
pub struct Annotator {
    annotations: BTreeMap<String, Annotation>,
}

impl Annotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one annotation, merging into any existing entry for the same
    /// value. Annotations carrying none of the mention-worthy property
    /// roles are dropped (§4.F `Annotator.add`: "skip non mentions").
    pub fn add(&mut self, annotation: Annotation) {
        let props = mention_props();
        if !annotation.props.iter().any(|p| props.contains(p.as_str())) {
            return;
        }
        self.annotations
            .entry(annotation.value.clone())
            .and_modify(|existing| existing.merge(&annotation))
            .or_insert(annotation);
    }

    /// Tag a single extracted value with one property role (§4.F
    /// `Annotator.add_tag`).
    pub fn add_tag(&mut self, prop: impl Into<String>, value: impl Into<String>) {
        self.add(Annotation::new(value).with_prop(prop));
    }

    /// Tag a value as a mention of a resolved entity (§4.F
    /// `Annotator.add_mention`). No-op if the schema isn't a `LegalEntity`.
    pub fn add_mention(&mut self, value: impl Into<String>, schema: &Schema, names: std::collections::BTreeSet<String>) {
        let value = value.into();
        if let Some(annotation) = Annotation::from_entity(value, schema, names) {
            self.add(annotation);
        }
    }

    /// Apply every recorded annotation's substitution to `text`, in
    /// deterministic (by-value) order.
    pub fn annotate_text(&self, text: &str) -> String {
        let mut text = text.to_string();
        for annotation in self.annotations.values() {
            text = annotation.annotate(&text);
        }
        text
    }

    /// `clean_text` then `annotate_text`, stamped with the `__annotated__`
    /// marker (§4.F, §6). Returns `None` if the cleaned text is empty.
    pub fn to_index_text(&self, text: &str) -> Option<String> {
        let cleaned = clean_text(text);
        if cleaned.is_empty() {
            return None;
        }
        let annotated = self.annotate_text(&cleaned);
        Some(format!("{ANNOTATED} {annotated}"))
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proofweave_types::Tag;

    use crate::factory::property_for_tag;

    #[test]
    fn non_mention_props_are_dropped() {
        let mut annotator = Annotator::new();
        annotator.add_tag("someOtherProp", "whatever");
        assert!(annotator.is_empty());
    }

    #[test]
    fn repeated_value_merges_into_one_annotation() {
        let mut annotator = Annotator::new();
        annotator.add_tag(property_for_tag(Tag::Per), "Jane Doe");
        annotator.add_tag(property_for_tag(Tag::Per), "Jane Doe");
        assert_eq!(annotator.len(), 1);
    }

    #[test]
    fn annotate_text_substitutes_tagged_values() {
        let mut annotator = Annotator::new();
        annotator.add_tag(property_for_tag(Tag::Per), "Jane Doe");
        let out = annotator.annotate_text("Jane Doe visited Berlin.");
        assert!(out.starts_with("[Jane Doe]("));
    }

    #[test]
    fn to_index_text_is_none_for_blank_text() {
        let annotator = Annotator::new();
        assert_eq!(annotator.to_index_text("   ()[]  "), None);
    }

    #[test]
    fn to_index_text_carries_the_marker() {
        let mut annotator = Annotator::new();
        annotator.add_tag(property_for_tag(Tag::Org), "Acme Inc");
        let indexed = annotator.to_index_text("Acme Inc signed the contract.").unwrap();
        assert!(indexed.starts_with("__annotated__ "));
    }
}
