//! GeonamesStage (§4.E.4): canonicalizes LOC mentions against a gazetteer,
//! filtering out person names that happen to collide with a place name
//! (e.g. "Christina" in Canada).

use std::sync::Arc;
use std::time::Duration;

use proofweave_names::{is_rigour_person, jaro_similarity, normalize_name};
use proofweave_types::Tag;

use crate::context::ResolutionContext;
use crate::geodb::{GeoDb, GeoMatch};
use crate::memo::Memo;
use crate::mention::Mention;
use crate::stage::Stage;
use crate::timeout::call_with_budget;

pub struct GeonamesStage {
    geo_db: Arc<dyn GeoDb>,
    reject_unmatched: bool,
    stage_timeout: Duration,
    memo: Memo<Option<GeoMatch>>,
}

impl GeonamesStage {
    pub fn new(geo_db: Arc<dyn GeoDb>, reject_unmatched: bool, stage_timeout: Duration, memoization_capacity: usize) -> Self {
        Self { geo_db, reject_unmatched, stage_timeout, memo: Memo::new(memoization_capacity) }
    }

    fn refine(&self, name: &str) -> Option<GeoMatch> {
        self.memo.get_or_compute(name, || {
            if is_rigour_person(name) {
                return None;
            }
            let normalized_query = normalize_name(name);
            call_with_budget(self.stage_timeout, || self.geo_db.tag_locations(name))
                .unwrap_or_default()
                .into_iter()
                .find(|candidate| jaro_similarity(&normalized_query, &normalize_name(&candidate.name)) > 0.9)
        })
    }
}

impl Stage for GeonamesStage {
    fn name(&self) -> &str {
        "geonames"
    }

    fn process(&self, mention: &mut Mention, context: &mut ResolutionContext) {
        if mention.ner_tag != Tag::Loc {
            return;
        }
        let values = mention.current_values().clone();
        if values.is_empty() {
            return;
        }

        for value in &values {
            if let Some(location) = self.refine(value) {
                mention.canonical_value = Some(location.name);
                if let Some(country) = location.country_code {
                    context.countries.insert(country);
                }
                return;
            }
        }

        if self.reject_unmatched {
            mention.reject("location not found in geonames", self.name());
        }
    }
}
