//! A minimal, closed slice of the ontology's schema hierarchy — just enough
//! to construct and classify the entities this pipeline emits. The real
//! schema library (`Ontology`, §1) owns the full hierarchy; this registry
//! mirrors only the ancestry the pipeline itself inspects.

use std::fmt;

/// A schema name. Known schemas are interned as variants; anything returned
/// by an external lookup (JudithaLookupStage) that isn't one of these is
/// carried as `Other`, since the pipeline treats lookup-provided schemas
/// opaquely (it never needs their own ancestry, only their name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Schema {
    PlainText,
    Person,
    Organization,
    LegalEntity,
    Mention,
    BankAccount,
    Address,
    Other(String),
}

impl Schema {
    pub fn name(&self) -> &str {
        match self {
            Schema::PlainText => "PlainText",
            Schema::Person => "Person",
            Schema::Organization => "Organization",
            Schema::LegalEntity => "LegalEntity",
            Schema::Mention => "Mention",
            Schema::BankAccount => "BankAccount",
            Schema::Address => "Address",
            Schema::Other(name) => name.as_str(),
        }
    }

    pub fn from_name(name: &str) -> Schema {
        match name {
            "PlainText" => Schema::PlainText,
            "Person" => Schema::Person,
            "Organization" => Schema::Organization,
            "LegalEntity" => Schema::LegalEntity,
            "Mention" => Schema::Mention,
            "BankAccount" => Schema::BankAccount,
            "Address" => Schema::Address,
            other => Schema::Other(other.to_string()),
        }
    }

    /// Schemas whose instances carry text worth extracting from (§GLOSSARY:
    /// Analyzable). Only `PlainText` qualifies in this closed registry; a
    /// real ontology would include many document/message schemas.
    pub fn is_analyzable(&self) -> bool {
        matches!(self, Schema::PlainText)
    }

    /// Ancestry used by the factory to decide whether a resolved schema is
    /// a `LegalEntity` (Person and Organization both are, per §8 scenario 6
    /// expecting `s_LegalEntity` alongside `s_Organization`).
    pub fn ancestors(&self) -> Vec<Schema> {
        match self {
            Schema::Person | Schema::Organization => {
                vec![self.clone(), Schema::LegalEntity]
            }
            other => vec![other.clone()],
        }
    }

    pub fn is_a(&self, other: &Schema) -> bool {
        self.ancestors().contains(other)
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
