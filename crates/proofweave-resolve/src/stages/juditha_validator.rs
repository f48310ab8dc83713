//! JudithaValidatorStage (§4.E.3): validates PER mentions against the
//! NameDB's name validator. Non-PER mentions pass through untouched.

use std::sync::Arc;
use std::time::Duration;

use proofweave_types::Tag;

use crate::context::ResolutionContext;
use crate::mention::Mention;
use crate::namedb::NameDb;
use crate::stage::Stage;
use crate::timeout::call_with_budget;

pub struct JudithaValidatorStage {
    name_db: Arc<dyn NameDb>,
    stage_timeout: Duration,
}

impl JudithaValidatorStage {
    pub fn new(name_db: Arc<dyn NameDb>, stage_timeout: Duration) -> Self {
        Self { name_db, stage_timeout }
    }
}

impl Stage for JudithaValidatorStage {
    fn name(&self) -> &str {
        "juditha_validator"
    }

    fn process(&self, mention: &mut Mention, _context: &mut ResolutionContext) {
        if mention.ner_tag != Tag::Per {
            return;
        }
        let Some(name) = mention.first_value().map(str::to_string) else { return };
        // A timeout is a non-match (§5); here that means "don't reject".
        let valid = call_with_budget(self.stage_timeout, || self.name_db.validate_name(&name)).unwrap_or(true);
        if !valid {
            mention.reject("name validation failed", self.name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namedb::InMemoryNameDb;
    use std::collections::BTreeSet;

    fn mention(tag: Tag, name: &str) -> Mention {
        Mention::from_aggregated("k", tag, BTreeSet::from([name.to_string()]), "e1", BTreeSet::new())
    }

    #[test]
    fn non_per_mentions_pass_through() {
        let stage = JudithaValidatorStage::new(Arc::new(InMemoryNameDb::new()), std::time::Duration::from_secs(5));
        let mut m = mention(Tag::Org, "###");
        let mut ctx = ResolutionContext::new("e1", vec![]);
        stage.process(&mut m, &mut ctx);
        assert!(!m.is_rejected);
    }

    #[test]
    fn invalid_name_is_rejected() {
        let mut db = InMemoryNameDb::new();
        db.seed_invalid("###");
        let stage = JudithaValidatorStage::new(Arc::new(db), std::time::Duration::from_secs(5));
        let mut m = mention(Tag::Per, "###");
        let mut ctx = ResolutionContext::new("e1", vec![]);
        stage.process(&mut m, &mut ctx);
        assert!(m.is_rejected);
    }

    #[test]
    fn valid_name_passes() {
        let stage = JudithaValidatorStage::new(Arc::new(InMemoryNameDb::new()), std::time::Duration::from_secs(5));
        let mut m = mention(Tag::Per, "Jane Doe");
        let mut ctx = ResolutionContext::new("e1", vec![]);
        stage.process(&mut m, &mut ctx);
        assert!(!m.is_rejected);
    }
}
