//! JudithaLookupStage (§4.E.5): external entity-linking lookup, last in the
//! pipeline. Unlike the other three ML-backed stages this one is not
//! memoized in the original system — the lookup's score threshold varies
//! per configured instance, so a plain name-keyed cache would silently
//! ignore it; we keep that behavior rather than invent a composite key.

use std::sync::Arc;
use std::time::Duration;

use crate::context::ResolutionContext;
use crate::mention::Mention;
use crate::namedb::NameDb;
use crate::stage::Stage;
use crate::timeout::call_with_budget;

pub struct JudithaLookupStage {
    name_db: Arc<dyn NameDb>,
    threshold: f32,
    stage_timeout: Duration,
}

impl JudithaLookupStage {
    pub fn new(name_db: Arc<dyn NameDb>, threshold: f32, stage_timeout: Duration) -> Self {
        Self { name_db, threshold, stage_timeout }
    }
}

impl Stage for JudithaLookupStage {
    fn name(&self) -> &str {
        "juditha_lookup"
    }

    fn process(&self, mention: &mut Mention, context: &mut ResolutionContext) {
        let Some(name) = mention.first_value().map(str::to_string) else { return };

        // A network/lookup error or timeout is caught and yields no
        // mutation (§4.E.5: "non-fatal").
        let Some(hit) = call_with_budget(self.stage_timeout, || self.name_db.lookup(&name, self.threshold)).flatten() else {
            return;
        };
        if hit.score < self.threshold {
            return;
        }

        mention.canonical_value = Some(hit.caption);
        if !hit.names.is_empty() {
            mention.resolved_values.get_or_insert_with(Default::default).extend(hit.names);
        }
        if let Some(schema) = hit.schemata.into_iter().next() {
            mention.resolved_schema = Some(schema);
        }
        context.countries.extend(hit.countries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namedb::{InMemoryNameDb, LookupResult};
    use proofweave_types::Tag;
    use std::collections::BTreeSet;

    fn mention(name: &str) -> Mention {
        Mention::from_aggregated("k", Tag::Org, BTreeSet::from([name.to_string()]), "e1", BTreeSet::new())
    }

    #[test]
    fn hit_sets_canonical_value_and_schema() {
        let stage = JudithaLookupStage::new(Arc::new(InMemoryNameDb::new()), 0.8, std::time::Duration::from_secs(5));
        let mut m = mention("circular plastics alliance");
        let mut ctx = ResolutionContext::new("e1", vec![]);
        stage.process(&mut m, &mut ctx);
        assert_eq!(m.canonical_value.as_deref(), Some("Circular Plastics Alliance"));
        assert_eq!(m.resolved_schema.as_deref(), Some("Organization"));
    }

    #[test]
    fn miss_does_not_mutate_mention() {
        let stage = JudithaLookupStage::new(Arc::new(InMemoryNameDb::new()), 0.8, std::time::Duration::from_secs(5));
        let mut m = mention("nobody here");
        let mut ctx = ResolutionContext::new("e1", vec![]);
        stage.process(&mut m, &mut ctx);
        assert!(m.canonical_value.is_none());
        assert!(!m.is_rejected);
    }

    #[test]
    fn hit_adds_countries_to_context() {
        let mut db = InMemoryNameDb::new();
        db.seed_lookup(
            "global exports inc",
            LookupResult {
                caption: "Global Exports Inc".to_string(),
                score: 0.9,
                names: vec![],
                schemata: vec!["Organization".to_string()],
                countries: vec!["gb".to_string()],
            },
        );
        let stage = JudithaLookupStage::new(Arc::new(db), 0.8, std::time::Duration::from_secs(5));
        let mut m = mention("global exports inc");
        let mut ctx = ResolutionContext::new("e1", vec![]);
        stage.process(&mut m, &mut ctx);
        assert!(ctx.countries.contains("gb"));
    }
}
