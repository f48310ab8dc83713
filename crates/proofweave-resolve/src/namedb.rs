//! `NameDb` (§4.E): the external ML classifier/validator/lookup surface that
//! JudithaClassifierStage, JudithaValidatorStage, and JudithaLookupStage
//! consult. Modeled as a trait per SPEC_FULL.md §4.E's Rust expansion note,
//! with one in-memory reference implementation for determinism in tests.

use std::collections::BTreeMap;

use proofweave_names::normalize_name;
use proofweave_types::Tag;

/// One schema-prediction candidate from the classifier (§4.E.2).
#[derive(Debug, Clone)]
pub struct SchemaPrediction {
    pub ner_tag: Tag,
    pub score: f32,
}

/// One hit from the entity-linking lookup (§4.E.5).
#[derive(Debug, Clone)]
pub struct LookupResult {
    pub caption: String,
    pub score: f32,
    pub names: Vec<String>,
    pub schemata: Vec<String>,
    pub countries: Vec<String>,
}

pub trait NameDb: Send + Sync {
    /// Schema predictions for a name, highest-confidence candidates first.
    fn predict_schema(&self, name: &str) -> Vec<SchemaPrediction>;

    /// Whether a PER candidate looks like a recognizable person name.
    fn validate_name(&self, name: &str) -> bool;

    /// Entity-linking lookup; `None` on a miss.
    fn lookup(&self, name: &str, threshold: f32) -> Option<LookupResult>;
}

/// Seeded in-memory reference `NameDb`. Ships no ML model — `predict_schema`
/// only answers for names explicitly seeded, so JudithaClassifierStage's
/// rigour fallback is exercised for everything else, matching how a
/// deployment with no confident prediction behaves.
#[derive(Default)]
pub struct InMemoryNameDb {
    predictions: BTreeMap<String, Vec<SchemaPrediction>>,
    lookups: BTreeMap<String, LookupResult>,
    invalid_names: Vec<String>,
}

impl InMemoryNameDb {
    pub fn new() -> Self {
        let mut db = Self::default();
        db.seed_lookup(
            "circular plastics alliance",
            LookupResult {
                caption: "Circular Plastics Alliance".to_string(),
                score: 0.95,
                names: vec!["Circular Plastics Alliance".to_string()],
                schemata: vec!["Organization".to_string()],
                countries: vec![],
            },
        );
        db
    }

    pub fn seed_prediction(&mut self, name: &str, prediction: SchemaPrediction) {
        self.predictions.entry(normalize_name(name)).or_default().push(prediction);
    }

    pub fn seed_lookup(&mut self, name: &str, result: LookupResult) {
        self.lookups.insert(normalize_name(name), result);
    }

    pub fn seed_invalid(&mut self, name: &str) {
        self.invalid_names.push(normalize_name(name));
    }
}

impl NameDb for InMemoryNameDb {
    fn predict_schema(&self, name: &str) -> Vec<SchemaPrediction> {
        self.predictions.get(&normalize_name(name)).cloned().unwrap_or_default()
    }

    fn validate_name(&self, name: &str) -> bool {
        if self.invalid_names.contains(&normalize_name(name)) {
            return false;
        }
        name.chars().any(|c| c.is_alphabetic())
    }

    fn lookup(&self, name: &str, threshold: f32) -> Option<LookupResult> {
        let hit = self.lookups.get(&normalize_name(name))?;
        if hit.score < threshold {
            return None;
        }
        Some(hit.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_lookup_is_found_case_insensitively() {
        let db = InMemoryNameDb::new();
        let hit = db.lookup("Circular Plastics Alliance", 0.8).unwrap();
        assert_eq!(hit.caption, "Circular Plastics Alliance");
        assert_eq!(hit.schemata, vec!["Organization".to_string()]);
    }

    #[test]
    fn lookup_below_threshold_misses() {
        let db = InMemoryNameDb::new();
        assert!(db.lookup("Circular Plastics Alliance", 0.99).is_none());
    }

    #[test]
    fn unseeded_name_has_no_prediction() {
        let db = InMemoryNameDb::new();
        assert!(db.predict_schema("Jane Doe").is_empty());
    }

    #[test]
    fn validate_rejects_seeded_invalid_names() {
        let mut db = InMemoryNameDb::new();
        db.seed_invalid("###");
        assert!(!db.validate_name("###"));
        assert!(db.validate_name("Jane Doe"));
    }
}
