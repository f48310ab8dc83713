//! A minimal `EntityProxy`-shaped record (§6 "Input": an ontology entity
//! with at minimum `id`, `schema`, and text-typed properties).

use std::collections::BTreeMap;

use crate::error::{Result, TypesError};
use crate::schema::Schema;

/// An ontology entity: an id, a schema, and multi-valued properties.
///
/// Used for both the immutable Source Entity and the mutable Output Entity
/// (§3): the core clones a source entity into an output entity and mutates
/// only the clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityProxy {
    id: String,
    schema: Schema,
    properties: BTreeMap<String, Vec<String>>,
}

impl EntityProxy {
    pub fn new(id: impl Into<String>, schema: Schema) -> Result<EntityProxy> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TypesError::MissingId);
        }
        Ok(EntityProxy { id, schema, properties: BTreeMap::new() })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn set_schema(&mut self, schema: Schema) {
        self.schema = schema;
    }

    /// Append a value to a property, skipping it if already present
    /// (properties are append-only sets in insertion order of first sight).
    pub fn add(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        let values = self.properties.entry(property.into()).or_default();
        if !values.contains(&value) {
            values.push(value);
        }
    }

    pub fn get(&self, property: &str) -> &[String] {
        self.properties.get(property).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn first(&self, property: &str) -> Option<&str> {
        self.get(property).first().map(String::as_str)
    }

    pub fn has(&self, property: &str) -> bool {
        !self.get(property).is_empty()
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
