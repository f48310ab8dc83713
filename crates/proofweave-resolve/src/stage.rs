//! `Stage` trait and `ResolutionPipeline` (§4.E): a linear, composable
//! sequence of mention transformations. Processing a mention stops early
//! the moment any stage rejects it.

use crate::context::ResolutionContext;
use crate::mention::Mention;

pub trait Stage: Send + Sync {
    fn name(&self) -> &str;

    /// Process one mention, possibly rewriting its resolution state or
    /// rejecting it in place.
    fn process(&self, mention: &mut Mention, context: &mut ResolutionContext);
}

#[derive(Default)]
pub struct ResolutionPipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl ResolutionPipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn with_stage(mut self, stage: Box<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run one mention through every stage, stopping as soon as it's
    /// rejected (§4.E).
    pub fn resolve(&self, mention: &mut Mention, context: &mut ResolutionContext) {
        for stage in &self.stages {
            if mention.is_rejected {
                tracing::debug!(
                    stage = mention.rejection_stage.as_deref(),
                    reason = mention.rejection_reason.as_deref(),
                    "mention rejected"
                );
                break;
            }
            stage.process(mention, context);
        }
    }

    /// Resolve every mention, yielding only the ones that survive (§4.E
    /// `resolve_all`).
    pub fn resolve_all(&self, mentions: Vec<Mention>, context: &mut ResolutionContext) -> Vec<Mention> {
        mentions
            .into_iter()
            .map(|mut mention| {
                self.resolve(&mut mention, context);
                mention
            })
            .filter(|mention| !mention.is_rejected)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proofweave_types::Tag;
    use std::collections::BTreeSet;

    struct AlwaysReject;
    impl Stage for AlwaysReject {
        fn name(&self) -> &str {
            "always-reject"
        }
        fn process(&self, mention: &mut Mention, _context: &mut ResolutionContext) {
            mention.reject("nope", self.name());
        }
    }

    struct CountingStage(std::sync::atomic::AtomicUsize);
    impl Stage for CountingStage {
        fn name(&self) -> &str {
            "counting"
        }
        fn process(&self, _mention: &mut Mention, _context: &mut ResolutionContext) {
            self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        }
    }

    fn mention() -> Mention {
        Mention::from_aggregated("k", Tag::Per, BTreeSet::from(["Jane Doe".to_string()]), "e1", BTreeSet::new())
    }

    #[test]
    fn stops_processing_after_rejection() {
        let pipeline = ResolutionPipeline::new()
            .with_stage(Box::new(AlwaysReject))
            .with_stage(Box::new(CountingStage(std::sync::atomic::AtomicUsize::new(0))));
        let mut m = mention();
        let mut ctx = ResolutionContext::new("e1", vec![]);
        pipeline.resolve(&mut m, &mut ctx);
        assert!(m.is_rejected);
    }

    #[test]
    fn resolve_all_filters_out_rejected() {
        let pipeline = ResolutionPipeline::new().with_stage(Box::new(AlwaysReject));
        let mut ctx = ResolutionContext::new("e1", vec![]);
        let survivors = pipeline.resolve_all(vec![mention(), mention()], &mut ctx);
        assert!(survivors.is_empty());
    }

    #[test]
    fn empty_pipeline_passes_through_unchanged() {
        let pipeline = ResolutionPipeline::new();
        let mut m = mention();
        let mut ctx = ResolutionContext::new("e1", vec![]);
        pipeline.resolve(&mut m, &mut ctx);
        assert!(!m.is_rejected);
    }
}
