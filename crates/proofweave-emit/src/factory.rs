//! `EntityFactory` (§4.F): builds ontology entities from resolved mentions.

use std::collections::{BTreeSet, hash_map::DefaultHasher};
use std::hash::{Hash, Hasher};

use proofweave_names::{RigourClass, normalize_name, strip_prefixes_for_tag};
use proofweave_resolve::Mention;
use proofweave_types::{EntityProxy, Schema, Tag};

/// The output property a tag's mentions are folded into on the source
/// entity (§6 "Output Entity properties set by the core").
pub fn property_for_tag(tag: Tag) -> &'static str {
    match tag {
        Tag::Per => "namesMentioned",
        Tag::Org => "companiesMentioned",
        Tag::Loc => "locationMentioned",
        Tag::Email => "emailMentioned",
        Tag::Phone => "phoneMentioned",
        Tag::Iban => "ibanMentioned",
        Tag::Country => "country",
        Tag::Other => "namesMentioned",
    }
}

fn rigour_class_for(tag: Tag) -> RigourClass {
    match tag {
        Tag::Per => RigourClass::Per,
        Tag::Org => RigourClass::Org,
        _ => RigourClass::Other,
    }
}

/// The Mention-entity `detectedSchema` for a tag, or `None` for any tag
/// other than PER/ORG (§4.F: "LOC mentions without a resolved schema do
/// NOT produce mention entities").
fn detected_schema_for(tag: Tag) -> Option<Schema> {
    match tag {
        Tag::Per => Some(Schema::Person),
        Tag::Org => Some(Schema::Organization),
        _ => None,
    }
}

/// `clean_name_for_tag` (§4.F): normalize, then strip the prefix set that
/// applies to this tag's rigour class. Empty results are filtered by
/// callers, mirroring the original's "drop on null cleanup" rule.
pub fn clean_name_for_tag(name: &str, tag: Tag) -> String {
    let normalized = normalize_name(name);
    strip_prefixes_for_tag(&normalized, rigour_class_for(tag))
}

/// A short, stable id derived from a handful of string parts. Stands in for
/// the ontology's entity-id hashing (§1: Ontology is an external
/// collaborator specified by role only) — any deterministic function of the
/// same inputs satisfies the contract.
fn deterministic_id(parts: &[&str]) -> String {
    let mut hasher = DefaultHasher::new();
    for part in parts {
        part.hash(&mut hasher);
        0u8.hash(&mut hasher);
    }
    format!("{:016x}", hasher.finish())
}

pub struct EntityFactory;

impl EntityFactory {
    pub fn new() -> Self {
        Self
    }

    /// Build the zero-or-one entity a surviving mention yields (§4.F).
    /// Returns `None` for rejected mentions, or when the mention carries no
    /// usable name.
    pub fn create_from_mention(&self, mention: &Mention, countries: &BTreeSet<String>) -> Option<EntityProxy> {
        if mention.is_rejected {
            tracing::debug!(key = %mention.key, "skipping rejected mention");
            return None;
        }
        if mention.resolved_schema.is_some() {
            return self.create_resolved_entity(mention, countries);
        }
        self.create_mention_entity(mention, countries)
    }

    fn create_resolved_entity(&self, mention: &Mention, countries: &BTreeSet<String>) -> Option<EntityProxy> {
        let schema_name = mention.resolved_schema.as_deref()?;
        let names = self.cleaned_names(mention);
        if names.is_empty() {
            return None;
        }

        let id = mention.resolved_entity_id.clone().unwrap_or_else(|| deterministic_id(&[mention.key.as_str()]));
        let schema = Schema::from_name(schema_name);
        let mut entity = EntityProxy::new(id, schema.clone()).ok()?;
        for name in &names {
            entity.add("name", name.as_str());
        }
        entity.add("proof", mention.entity_id.as_str());
        if !schema.is_a(&Schema::Address) {
            for country in countries {
                entity.add("country", country.as_str());
            }
        }

        tracing::debug!(schema = %schema_name, caption = ?mention.caption(), "created resolved entity");
        Some(entity)
    }

    fn create_mention_entity(&self, mention: &Mention, countries: &BTreeSet<String>) -> Option<EntityProxy> {
        let detected_schema = detected_schema_for(mention.ner_tag)?;
        let names = self.cleaned_names(mention);
        if names.is_empty() {
            return None;
        }

        let prop_name = property_for_tag(mention.ner_tag);
        let id = deterministic_id(&["mention", mention.entity_id.as_str(), prop_name, mention.key.as_str()]);
        let mut entity = EntityProxy::new(id, Schema::Mention).ok()?;
        entity.add("resolved", deterministic_id(&[mention.key.as_str()]));
        entity.add("document", mention.entity_id.as_str());
        for name in &names {
            entity.add("name", name.as_str());
        }
        entity.add("detectedSchema", detected_schema.name());
        for country in countries {
            entity.add("contextCountry", country.as_str());
        }

        tracing::debug!(schema = %detected_schema, caption = ?mention.caption(), "created mention entity");
        Some(entity)
    }

    /// Caption/canonical value (uncleaned) plus every raw and resolved
    /// value cleaned for the mention's NER tag, deduplicated.
    fn cleaned_names(&self, mention: &Mention) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        if let Some(caption) = mention.caption() {
            names.insert(caption);
        }
        for value in &mention.values {
            let cleaned = clean_name_for_tag(value, mention.ner_tag);
            if !cleaned.is_empty() {
                names.insert(cleaned);
            }
        }
        if let Some(resolved) = &mention.resolved_values {
            for value in resolved {
                let cleaned = clean_name_for_tag(value, mention.ner_tag);
                if !cleaned.is_empty() {
                    names.insert(cleaned);
                }
            }
        }
        names
    }

    /// `create_bank_account` (§4.F): IBAN → BankAccount entity.
    pub fn create_bank_account(&self, iban: &str, country: &str, proof_entity_id: &str) -> EntityProxy {
        let id = slug::slugify(format!("iban {iban}"));
        let mut entity = EntityProxy::new(id, Schema::BankAccount).expect("slugified iban id is never empty");
        entity.add("proof", proof_entity_id);
        entity.add("accountNumber", iban);
        entity.add("iban", iban);
        entity.add("country", country);
        tracing::debug!(iban, "created bank account");
        entity
    }
}

impl Default for EntityFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn values(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn rejected_mention_yields_no_entity() {
        let factory = EntityFactory::new();
        let mut m = Mention::from_aggregated("k", Tag::Per, values(&["Jane Doe"]), "e1", BTreeSet::new());
        m.reject("bad name", "stage");
        assert!(factory.create_from_mention(&m, &BTreeSet::new()).is_none());
    }

    #[test]
    fn per_mention_without_resolution_yields_mention_entity() {
        let factory = EntityFactory::new();
        let m = Mention::from_aggregated("k", Tag::Per, values(&["Jane Doe"]), "e1", BTreeSet::new());
        let entity = factory.create_from_mention(&m, &BTreeSet::new()).unwrap();
        assert_eq!(entity.schema(), &Schema::Mention);
        assert_eq!(entity.first("detectedSchema"), Some("Person"));
        assert!(entity.get("name").contains(&"jane doe".to_string()) || entity.has("name"));
    }

    #[test]
    fn loc_mention_without_resolved_schema_yields_nothing() {
        let factory = EntityFactory::new();
        let m = Mention::from_aggregated("k", Tag::Loc, values(&["Zurich"]), "e1", BTreeSet::new());
        assert!(factory.create_from_mention(&m, &BTreeSet::new()).is_none());
    }

    #[test]
    fn resolved_entity_uses_resolved_schema_and_entity_id() {
        let factory = EntityFactory::new();
        let mut m = Mention::from_aggregated("k", Tag::Org, values(&["Circular Plastics Alliance"]), "e1", BTreeSet::new());
        m.resolved_schema = Some("Organization".to_string());
        m.resolved_entity_id = Some("org-42".to_string());
        let countries = BTreeSet::from(["ch".to_string()]);
        let entity = factory.create_from_mention(&m, &countries).unwrap();
        assert_eq!(entity.id(), "org-42");
        assert_eq!(entity.schema(), &Schema::Organization);
        assert!(entity.get("country").contains(&"ch".to_string()));
        assert_eq!(entity.first("proof"), Some("e1"));
    }

    #[test]
    fn address_schema_does_not_get_country() {
        let factory = EntityFactory::new();
        let mut m = Mention::from_aggregated("k", Tag::Loc, values(&["10 Downing Street"]), "e1", BTreeSet::new());
        m.resolved_schema = Some("Address".to_string());
        let countries = BTreeSet::from(["gb".to_string()]);
        let entity = factory.create_from_mention(&m, &countries).unwrap();
        assert!(!entity.has("country"));
    }

    #[test]
    fn mention_entity_id_is_deterministic() {
        let factory = EntityFactory::new();
        let m1 = Mention::from_aggregated("k", Tag::Per, values(&["Jane Doe"]), "e1", BTreeSet::new());
        let m2 = Mention::from_aggregated("k", Tag::Per, values(&["Jane Doe"]), "e1", BTreeSet::new());
        let a = factory.create_from_mention(&m1, &BTreeSet::new()).unwrap();
        let b = factory.create_from_mention(&m2, &BTreeSet::new()).unwrap();
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn bank_account_id_is_slugified_iban() {
        let factory = EntityFactory::new();
        let entity = factory.create_bank_account("CH5604835012345678009", "ch", "e1");
        assert_eq!(entity.id(), "iban-ch5604835012345678009");
        assert_eq!(entity.first("iban"), Some("CH5604835012345678009"));
        assert_eq!(entity.first("country"), Some("ch"));
    }

    #[test]
    fn clean_name_strips_honorific_for_person() {
        assert_eq!(clean_name_for_tag("Dr. Jane Doe", Tag::Per), "jane doe");
    }
}
