//! JudithaClassifierStage (§4.E.2): reclassifies mentions against the
//! NameDB's ML schema prediction, falling back to the rigour heuristic when
//! no prediction clears the confidence bar.

use std::sync::Arc;
use std::time::Duration;

use proofweave_names::classify_name_rigour;
use proofweave_names::RigourClass;
use proofweave_types::Tag;

use crate::context::ResolutionContext;
use crate::memo::Memo;
use crate::mention::Mention;
use crate::namedb::NameDb;
use crate::stage::Stage;
use crate::timeout::call_with_budget;

pub struct JudithaClassifierStage {
    name_db: Arc<dyn NameDb>,
    confidence_threshold: f32,
    stage_timeout: Duration,
    memo: Memo<Tag>,
}

impl JudithaClassifierStage {
    pub fn new(name_db: Arc<dyn NameDb>, confidence_threshold: f32, stage_timeout: Duration, memoization_capacity: usize) -> Self {
        Self { name_db, confidence_threshold, stage_timeout, memo: Memo::new(memoization_capacity) }
    }

    /// Mirrors `classify_mention_juditha`: the first prediction clearing
    /// the threshold wins (not the highest-scoring one), with two overrides
    /// on its tag, else fall back to the rigour heuristic — which only ever
    /// returns ORG from this fallback, never PER (§4.E.2).
    fn classify(&self, name: &str, original_tag: Tag) -> Tag {
        let cache_key = format!("{name}\u{0}{original_tag}");
        self.memo.get_or_compute(&cache_key, || {
            let predictions = call_with_budget(self.stage_timeout, || self.name_db.predict_schema(name)).unwrap_or_default();
            for prediction in predictions {
                if prediction.score < self.confidence_threshold {
                    continue;
                }
                let mut tag = prediction.ner_tag;
                if matches!(tag, Tag::Loc | Tag::Other) && original_tag != Tag::Loc {
                    tag = Tag::Other;
                }
                if original_tag == Tag::Org && tag == Tag::Per && name.chars().count() > 20 {
                    tag = Tag::Org;
                }
                return tag;
            }
            match classify_name_rigour(name) {
                RigourClass::Org => Tag::Org,
                _ => Tag::Other,
            }
        })
    }
}

impl Stage for JudithaClassifierStage {
    fn name(&self) -> &str {
        "juditha_classifier"
    }

    fn process(&self, mention: &mut Mention, _context: &mut ResolutionContext) {
        let Some(name) = mention.first_value().map(str::to_string) else { return };

        let classified = self.classify(&name, mention.ner_tag);
        if classified != mention.ner_tag {
            mention.ner_tag = classified;
        }
        if mention.ner_tag == Tag::Other {
            mention.reject("classified as OTHER", self.name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namedb::{InMemoryNameDb, SchemaPrediction};
    use std::collections::BTreeSet;

    fn mention(tag: Tag, name: &str) -> Mention {
        Mention::from_aggregated("k", tag, BTreeSet::from([name.to_string()]), "e1", BTreeSet::new())
    }

    #[test]
    fn confident_prediction_overrides_tag() {
        let mut db = InMemoryNameDb::new();
        db.seed_prediction("Jane Doe", SchemaPrediction { ner_tag: Tag::Per, score: 0.95 });
        let stage = JudithaClassifierStage::new(Arc::new(db), 0.9, std::time::Duration::from_secs(5), 100);
        let mut m = mention(Tag::Other, "Jane Doe");
        let mut ctx = ResolutionContext::new("e1", vec![]);
        stage.process(&mut m, &mut ctx);
        assert_eq!(m.ner_tag, Tag::Per);
        assert!(!m.is_rejected);
    }

    #[test]
    fn loc_or_other_prediction_downgrades_to_other_unless_already_loc() {
        let mut db = InMemoryNameDb::new();
        db.seed_prediction("Weird Co", SchemaPrediction { ner_tag: Tag::Loc, score: 0.95 });
        let stage = JudithaClassifierStage::new(Arc::new(db), 0.9, std::time::Duration::from_secs(5), 100);
        let mut m = mention(Tag::Org, "Weird Co");
        let mut ctx = ResolutionContext::new("e1", vec![]);
        stage.process(&mut m, &mut ctx);
        assert_eq!(m.ner_tag, Tag::Other);
        assert!(m.is_rejected);
    }

    #[test]
    fn long_name_keeps_org_despite_per_prediction() {
        let long_name = "International Consolidated Holdings";
        let mut db = InMemoryNameDb::new();
        db.seed_prediction(long_name, SchemaPrediction { ner_tag: Tag::Per, score: 0.95 });
        let stage = JudithaClassifierStage::new(Arc::new(db), 0.9, std::time::Duration::from_secs(5), 100);
        let mut m = mention(Tag::Org, long_name);
        let mut ctx = ResolutionContext::new("e1", vec![]);
        stage.process(&mut m, &mut ctx);
        assert_eq!(m.ner_tag, Tag::Org);
        assert!(!m.is_rejected);
    }

    #[test]
    fn no_prediction_falls_back_to_rigour_org_only() {
        let db = InMemoryNameDb::new();
        let stage = JudithaClassifierStage::new(Arc::new(db), 0.9, std::time::Duration::from_secs(5), 100);
        let mut m = mention(Tag::Other, "Jane Doe");
        let mut ctx = ResolutionContext::new("e1", vec![]);
        stage.process(&mut m, &mut ctx);
        assert_eq!(m.ner_tag, Tag::Other);
        assert!(m.is_rejected);
    }

    #[test]
    fn no_prediction_with_org_shape_survives_via_rigour_fallback() {
        let db = InMemoryNameDb::new();
        let stage = JudithaClassifierStage::new(Arc::new(db), 0.9, std::time::Duration::from_secs(5), 100);
        let mut m = mention(Tag::Other, "IDIO Daten Import Export GmbH");
        let mut ctx = ResolutionContext::new("e1", vec![]);
        stage.process(&mut m, &mut ctx);
        assert_eq!(m.ner_tag, Tag::Org);
        assert!(!m.is_rejected);
    }
}
