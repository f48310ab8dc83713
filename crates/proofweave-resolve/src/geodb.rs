//! `GeoDb` (§4.E.4): the gazetteer tagger GeonamesStage consults to
//! canonicalize LOC mentions. Modeled as a trait with a small static
//! reference implementation, mirroring `proofweave_extract`'s
//! `CountryGazetteer` shape but returning canonical names, not just
//! country codes.

use proofweave_names::normalize_name;

#[derive(Debug, Clone)]
pub struct GeoMatch {
    pub name: String,
    pub country_code: Option<String>,
}

pub trait GeoDb: Send + Sync {
    /// Every known gazetteer entry whose name plausibly matches `query`.
    /// GeonamesStage itself applies the Jaro-similarity acceptance test
    /// (§4.E.4) — this returns raw candidates only.
    fn tag_locations(&self, query: &str) -> Vec<GeoMatch>;
}

const GAZETTEER: &[(&str, &str, &str)] = &[
    ("new york city", "New York City", "us"),
    ("new york", "New York City", "us"),
    ("berlin", "Berlin", "de"),
    ("paris", "Paris", "fr"),
    ("zurich", "Zurich", "ch"),
    ("london", "London", "gb"),
];

#[derive(Default)]
pub struct StaticGeoDb;

impl StaticGeoDb {
    pub fn new() -> Self {
        Self
    }
}

impl GeoDb for StaticGeoDb {
    fn tag_locations(&self, query: &str) -> Vec<GeoMatch> {
        let normalized = normalize_name(query);
        GAZETTEER
            .iter()
            .filter(|(key, _, _)| *key == normalized)
            .map(|(_, name, country)| GeoMatch { name: name.to_string(), country_code: Some(country.to_string()) })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_city_resolves_with_country() {
        let db = StaticGeoDb::new();
        let matches = db.tag_locations("Zurich");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].country_code.as_deref(), Some("ch"));
    }

    #[test]
    fn unknown_place_has_no_matches() {
        let db = StaticGeoDb::new();
        assert!(db.tag_locations("Atlantis").is_empty());
    }
}
