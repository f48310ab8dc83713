//! RigourStage (§4.E.1): cheap heuristic classifier, first in the pipeline.
//! Never rejects.

use std::collections::BTreeSet;

use proofweave_names::{classify_name_rigour, remove_obj_prefixes, remove_org_prefixes, remove_person_prefixes, RigourClass};
use proofweave_types::Tag;

use crate::context::ResolutionContext;
use crate::mention::Mention;
use crate::memo::Memo;
use crate::stage::Stage;

pub struct RigourStage {
    memo: Memo<RigourClass>,
}

impl RigourStage {
    pub fn new(memoization_capacity: usize) -> Self {
        Self { memo: Memo::new(memoization_capacity) }
    }

    fn classify(&self, name: &str) -> RigourClass {
        self.memo.get_or_compute(name, || classify_name_rigour(name))
    }
}

fn strip_all(values: &BTreeSet<String>, f: impl Fn(&str) -> String) -> BTreeSet<String> {
    values.iter().map(|v| f(v)).collect()
}

impl Stage for RigourStage {
    fn name(&self) -> &str {
        "rigour"
    }

    fn process(&self, mention: &mut Mention, _context: &mut ResolutionContext) {
        let values = mention.current_values().clone();
        let Some(name) = values.iter().next() else { return };

        match self.classify(name) {
            RigourClass::Per => {
                mention.ner_tag = Tag::Per;
                mention.resolved_values = Some(strip_all(&values, remove_person_prefixes));
            }
            RigourClass::Org => {
                mention.ner_tag = Tag::Org;
                mention.resolved_values = Some(strip_all(&values, remove_org_prefixes));
            }
            RigourClass::Other => {
                let stripped = match mention.ner_tag {
                    Tag::Org => strip_all(&values, remove_org_prefixes),
                    Tag::Per => strip_all(&values, remove_person_prefixes),
                    _ => strip_all(&values, remove_obj_prefixes),
                };
                mention.resolved_values = Some(stripped);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn mention(tag: Tag, values: &[&str]) -> Mention {
        Mention::from_aggregated("k", tag, set(values), "e1", BTreeSet::new())
    }

    #[test]
    fn classifies_person_and_strips_prefixes() {
        let stage = RigourStage::new(100);
        let mut m = mention(Tag::Other, &["Mrs. Jane Doe"]);
        let mut ctx = ResolutionContext::new("e1", vec![]);
        stage.process(&mut m, &mut ctx);
        assert_eq!(m.ner_tag, Tag::Per);
        assert!(m.resolved_values.unwrap().contains("Jane Doe"));
    }

    #[test]
    fn classifies_org_and_strips_prefixes() {
        let stage = RigourStage::new(100);
        let mut m = mention(Tag::Other, &["IDIO Daten Import Export GmbH"]);
        let mut ctx = ResolutionContext::new("e1", vec![]);
        stage.process(&mut m, &mut ctx);
        assert_eq!(m.ner_tag, Tag::Org);
    }

    #[test]
    fn gibberish_keeps_original_tag_and_still_strips_generic_prefixes() {
        let stage = RigourStage::new(100);
        let mut m = mention(Tag::Org, &["the european union"]);
        let mut ctx = ResolutionContext::new("e1", vec![]);
        stage.process(&mut m, &mut ctx);
        assert_eq!(m.ner_tag, Tag::Org);
        assert!(m.resolved_values.unwrap().contains("european union"));
    }

    #[test]
    fn never_rejects() {
        let stage = RigourStage::new(100);
        let mut m = mention(Tag::Other, &["jhkl fsd dsf"]);
        let mut ctx = ResolutionContext::new("e1", vec![]);
        stage.process(&mut m, &mut ctx);
        assert!(!m.is_rejected);
    }
}
