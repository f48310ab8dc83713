//! Variant 5: `PatternExtractor` (§4.B) — three fixed regular expressions
//! run in order over each chunk, cleaned through the ontology's type
//! cleaner, with country hints emitted alongside matches that carry one.

use once_cell::sync::Lazy;
use regex::Regex;

use proofweave_types::{PropertyType, Tag};

use crate::context::{ExtractionContext, ExtractionResult};
use crate::error::Result;
use crate::extractor::Extractor;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}").unwrap());

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?[\d\-\(\)/\s]{5,}\d{2}").unwrap());

static IBAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b[A-Z]{2} ?[0-9]{2} ?[A-Z0-9]{4} ?[0-9]{7} ?([A-Z0-9]?){0,16}\b").unwrap());

pub struct PatternExtractor {
    name: String,
}

impl PatternExtractor {
    pub fn new() -> Self {
        Self { name: "pattern-extractor".to_string() }
    }
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn push_cleaned(
    results: &mut Vec<ExtractionResult>,
    raw: &str,
    prop: PropertyType,
    tag: Tag,
    source: &str,
) {
    let Some(cleaned) = prop.clean(raw) else { return };
    for country in prop.country_hint(&cleaned) {
        results.push(ExtractionResult::new(country, Tag::Country, source).with_meta("derived_from", tag.as_str()));
    }
    results.push(ExtractionResult::new(cleaned, tag, source));
}

impl Extractor for PatternExtractor {
    fn name(&self) -> &str {
        &self.name
    }

    fn extract(&self, ctx: &ExtractionContext) -> Result<Vec<ExtractionResult>> {
        let mut results = Vec::new();

        for m in EMAIL_RE.find_iter(&ctx.text) {
            push_cleaned(&mut results, m.as_str(), PropertyType::Email, Tag::Email, &self.name);
        }

        for m in PHONE_RE.find_iter(&ctx.text) {
            push_cleaned(&mut results, m.as_str(), PropertyType::Phone, Tag::Phone, &self.name);
        }

        for m in IBAN_RE.find_iter(&ctx.text) {
            let compact: String = m.as_str().chars().filter(|c| !c.is_whitespace()).collect();
            if compact.parse::<iban_validate::Iban>().is_err() {
                continue;
            }
            push_cleaned(&mut results, m.as_str(), PropertyType::Iban, Tag::Iban, &self.name);
        }

        Ok(results)
    }
}
