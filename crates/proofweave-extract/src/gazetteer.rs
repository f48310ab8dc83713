//! The `CountryGazetteer` capability: mapping a location string to ISO
//! country codes for NER's "location side effect" (§4.B). This is a thin
//! slice of the external GeoDB contract (§6), used only for this one
//! side-effect lookup — GeonamesStage (§4.E.4) consults a richer `GeoDb`
//! trait in `proofweave-resolve` for fuzzy canonicalization.

use std::collections::BTreeMap;

/// Resolves a location name to zero or more ISO country codes.
pub trait CountryGazetteer: Send + Sync {
    fn countries_for(&self, location: &str) -> Vec<String>;
}

/// A small fixed gazetteer covering the handful of place names this
/// pipeline's own test scenarios and common fixtures need. A production
/// deployment would inject a real GeoDB-backed implementation instead.
pub struct StaticCountryGazetteer {
    entries: BTreeMap<String, Vec<String>>,
}

impl StaticCountryGazetteer {
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert("new york city".to_string(), vec!["us".to_string()]);
        entries.insert("new york".to_string(), vec!["us".to_string()]);
        entries.insert("berlin".to_string(), vec!["de".to_string()]);
        entries.insert("paris".to_string(), vec!["fr".to_string()]);
        entries.insert("zurich".to_string(), vec!["ch".to_string()]);
        entries.insert("london".to_string(), vec!["gb".to_string()]);
        Self { entries }
    }
}

impl Default for StaticCountryGazetteer {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryGazetteer for StaticCountryGazetteer {
    fn countries_for(&self, location: &str) -> Vec<String> {
        self.entries.get(&location.to_lowercase()).cloned().unwrap_or_default()
    }
}
