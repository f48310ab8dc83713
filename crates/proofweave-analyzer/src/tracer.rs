//! `ExtractionTracer` (§7): per-run counters over every extraction,
//! aggregation, resolution, and entity-creation event, for diagnostics.
//!
//! Grounded on `original_source/ftm_analyze/analysis/tracer.py`: one
//! `ExtractionTracer` instance per analyzed source entity, a disableable
//! `enabled` flag, and a `TraceSummary` snapshot logged at `info` level
//! once the run completes.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceSummary {
    pub extractions_total: usize,
    pub extractions_accepted: usize,
    pub extractions_rejected: usize,
    pub extractions_by_source: BTreeMap<String, usize>,
    pub extractions_by_tag: BTreeMap<String, usize>,

    pub aggregated_total: usize,
    pub aggregated_by_tag: BTreeMap<String, usize>,

    pub resolution_total: usize,
    pub resolution_accepted: usize,
    pub resolution_rejected: usize,
    pub rejection_by_stage: BTreeMap<String, usize>,
    pub rejection_by_reason: BTreeMap<String, usize>,

    pub entities_created: usize,
    pub entities_by_schema: BTreeMap<String, usize>,
}

#[derive(Debug, Default)]
pub struct ExtractionTracer {
    enabled: bool,

    extractions_total: usize,
    extractions_accepted: usize,
    extractions_rejected: usize,
    extractions_by_source: BTreeMap<String, usize>,
    extractions_by_tag: BTreeMap<String, usize>,

    aggregated_total: usize,
    aggregated_by_tag: BTreeMap<String, usize>,

    resolution_total: usize,
    resolution_accepted: usize,
    resolution_rejected: usize,
    rejection_by_stage: BTreeMap<String, usize>,
    rejection_by_reason: BTreeMap<String, usize>,

    entities_created: usize,
    entities_by_schema: BTreeMap<String, usize>,
}

impl ExtractionTracer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, ..Default::default() }
    }

    pub fn trace_extraction(&mut self, value: &str, tag: &str, source: &str, accepted: bool, reason: Option<&str>) {
        if !self.enabled {
            return;
        }
        self.extractions_total += 1;
        *self.extractions_by_source.entry(source.to_string()).or_insert(0) += 1;

        if accepted {
            self.extractions_accepted += 1;
            *self.extractions_by_tag.entry(tag.to_string()).or_insert(0) += 1;
            tracing::debug!(tag, value, source, "extraction accepted");
        } else {
            self.extractions_rejected += 1;
            tracing::debug!(tag, value, source, reason, "extraction rejected");
        }
    }

    pub fn trace_aggregation(&mut self, key: &str, tag: &str, value_count: usize) {
        if !self.enabled {
            return;
        }
        self.aggregated_total += 1;
        *self.aggregated_by_tag.entry(tag.to_string()).or_insert(0) += 1;
        tracing::debug!(key, tag, value_count, "aggregated");
    }

    pub fn trace_resolution(&mut self, mention_key: &str, stage: &str, accepted: bool, reason: Option<&str>) {
        if !self.enabled {
            return;
        }
        self.resolution_total += 1;
        if accepted {
            self.resolution_accepted += 1;
        } else {
            self.resolution_rejected += 1;
            *self.rejection_by_stage.entry(stage.to_string()).or_insert(0) += 1;
            if let Some(reason) = reason {
                *self.rejection_by_reason.entry(reason.to_string()).or_insert(0) += 1;
            }
            tracing::debug!(stage, mention_key, reason, "resolution rejected");
        }
    }

    pub fn trace_entity_created(&mut self, schema: &str, entity_id: &str) {
        if !self.enabled {
            return;
        }
        self.entities_created += 1;
        *self.entities_by_schema.entry(schema.to_string()).or_insert(0) += 1;
        tracing::debug!(schema, entity_id, "entity created");
    }

    pub fn get_summary(&self) -> TraceSummary {
        TraceSummary {
            extractions_total: self.extractions_total,
            extractions_accepted: self.extractions_accepted,
            extractions_rejected: self.extractions_rejected,
            extractions_by_source: self.extractions_by_source.clone(),
            extractions_by_tag: self.extractions_by_tag.clone(),
            aggregated_total: self.aggregated_total,
            aggregated_by_tag: self.aggregated_by_tag.clone(),
            resolution_total: self.resolution_total,
            resolution_accepted: self.resolution_accepted,
            resolution_rejected: self.resolution_rejected,
            rejection_by_stage: self.rejection_by_stage.clone(),
            rejection_by_reason: self.rejection_by_reason.clone(),
            entities_created: self.entities_created,
            entities_by_schema: self.entities_by_schema.clone(),
        }
    }

    pub fn log_summary(&self) {
        if !self.enabled {
            return;
        }
        let summary = self.get_summary();
        tracing::info!(
            extractions_accepted = summary.extractions_accepted,
            extractions_total = summary.extractions_total,
            aggregated = summary.aggregated_total,
            resolved = summary.resolution_accepted,
            resolution_total = summary.resolution_total,
            entities = summary.entities_created,
            "pipeline summary"
        );
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_tracer_counts_nothing() {
        let mut tracer = ExtractionTracer::new(false);
        tracer.trace_extraction("Jane Doe", "PER", "ner", true, None);
        assert_eq!(tracer.get_summary(), TraceSummary::default());
    }

    #[test]
    fn tracks_accepted_and_rejected_extractions() {
        let mut tracer = ExtractionTracer::new(true);
        tracer.trace_extraction("Jane Doe", "PER", "ner", true, None);
        tracer.trace_extraction("x", "PER", "ner", false, Some("too_short"));
        let summary = tracer.get_summary();
        assert_eq!(summary.extractions_total, 2);
        assert_eq!(summary.extractions_accepted, 1);
        assert_eq!(summary.extractions_rejected, 1);
        assert_eq!(summary.extractions_by_tag.get("PER"), Some(&1));
    }

    #[test]
    fn tracks_resolution_rejections_by_stage_and_reason() {
        let mut tracer = ExtractionTracer::new(true);
        tracer.trace_resolution("jane doe", "juditha_validator", false, Some("not_a_name"));
        let summary = tracer.get_summary();
        assert_eq!(summary.resolution_rejected, 1);
        assert_eq!(summary.rejection_by_stage.get("juditha_validator"), Some(&1));
        assert_eq!(summary.rejection_by_reason.get("not_a_name"), Some(&1));
    }

    #[test]
    fn tracks_entity_creation_by_schema() {
        let mut tracer = ExtractionTracer::new(true);
        tracer.trace_entity_created("Organization", "org-1");
        tracer.trace_entity_created("Mention", "mention-1");
        let summary = tracer.get_summary();
        assert_eq!(summary.entities_created, 2);
        assert_eq!(summary.entities_by_schema.get("Organization"), Some(&1));
    }

    #[test]
    fn reset_clears_all_counters_but_keeps_enabled_flag() {
        let mut tracer = ExtractionTracer::new(true);
        tracer.trace_extraction("Jane Doe", "PER", "ner", true, None);
        tracer.reset();
        assert_eq!(tracer.get_summary(), TraceSummary::default());
        tracer.trace_extraction("Jane Doe", "PER", "ner", true, None);
        assert_eq!(tracer.get_summary().extractions_total, 1);
    }
}
