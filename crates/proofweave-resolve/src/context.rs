//! `ResolutionContext` (§4.E): threaded through every stage call for one
//! source entity, accumulating country evidence discovered along the way.

use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct ResolutionContext {
    pub entity_id: String,
    pub languages: Vec<String>,
    pub countries: BTreeSet<String>,
}

impl ResolutionContext {
    pub fn new(entity_id: impl Into<String>, languages: Vec<String>) -> Self {
        Self { entity_id: entity_id.into(), languages, countries: BTreeSet::new() }
    }
}
