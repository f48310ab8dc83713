//! `Analyzer` (§2, §4.A–§4.F): the top-level orchestrator wiring
//! chunking, extraction, aggregation, resolution, and emission together for
//! one source entity at a time.
//!
//! Grounded on `original_source/ftm_analyze/analysis/analyzer.py`'s
//! `Analyzer.feed`/`Analyzer.flush`, merged into a single `analyze` call
//! since every caller in the original (`logic.analyze_entity`) invokes them
//! back to back with no intervening state a caller could usefully observe.
//! Unlike the original, which constructs a new `Analyzer` per entity, this
//! `Analyzer` is built once per process and reused across calls — the
//! pluggable NER backend, NameDB, and GeoDB, plus each resolution stage's
//! memoization cache, are genuinely process-wide (§9 "Process-wide caches
//! and lazy model loading"). Only the aggregator, resolution context, and
//! annotator are fresh per `analyze` call, matching §3's "every
//! intermediate structure lives only for the duration of analyzing one
//! source entity".

use std::collections::BTreeSet;
use std::sync::Arc;

use proofweave_aggregate::{Aggregator, ConfidenceScorer, HeuristicTrashClassifier};
use proofweave_config::Settings;
use proofweave_emit::{Annotator, EntityFactory, property_for_tag};
use proofweave_extract::{Extractor, ExtractionContext, PatternExtractor};
use proofweave_names::normalize_name;
use proofweave_resolve::{
    GeoDb, GeonamesStage, JudithaClassifierStage, JudithaLookupStage, JudithaValidatorStage, Mention, NameDb,
    ResolutionContext, ResolutionPipeline, RigourStage,
};
use proofweave_types::{EntityProxy, PropertyType, Schema, Tag};

use crate::chunker::TextChunker;
use crate::error::Result;
use crate::language::LanguageDetector;
use crate::tracer::ExtractionTracer;

/// The entity property holding the raw text to analyze (§3 "Source
/// Entity" — a stand-in for the ontology's `registry.text`-typed property
/// enumeration, collapsed to one conventional property name since
/// `EntityProxy` here has no notion of property *types*).
pub const TEXT_PROPERTY: &str = "text";

/// The output property languages are recorded under (§4.A, §8 scenarios:
/// literal `detectedLanguage`).
pub const DETECTED_LANGUAGE_PROPERTY: &str = "detectedLanguage";

pub struct Analyzer {
    settings: Settings,
    chunker: TextChunker,
    language_detector: LanguageDetector,
    ner_extractor: Arc<dyn Extractor>,
    pattern_extractor: PatternExtractor,
    pipeline: ResolutionPipeline,
    factory: EntityFactory,
}

impl Analyzer {
    /// Assemble an analyzer from settings plus the injected, already-loaded
    /// pluggable services (§1: model runtimes, NameDB, GeoDB are external
    /// collaborators specified by contract, not constructed here).
    pub fn new(settings: Settings, ner_extractor: Arc<dyn Extractor>, name_db: Arc<dyn NameDb>, geo_db: Arc<dyn GeoDb>) -> Self {
        let mut pipeline = ResolutionPipeline::new();
        if settings.use_rigour {
            pipeline = pipeline.with_stage(Box::new(RigourStage::new(settings.memoization_capacity)));
        }
        if settings.use_juditha_classifier {
            pipeline = pipeline.with_stage(Box::new(JudithaClassifierStage::new(
                name_db.clone(),
                settings.juditha_classifier_threshold,
                settings.stage_timeout,
                settings.memoization_capacity,
            )));
        }
        if settings.use_juditha_validator {
            pipeline = pipeline.with_stage(Box::new(JudithaValidatorStage::new(name_db.clone(), settings.stage_timeout)));
        }
        if settings.use_geonames {
            pipeline = pipeline.with_stage(Box::new(GeonamesStage::new(
                geo_db,
                settings.geonames_reject_unmatched,
                settings.stage_timeout,
                settings.memoization_capacity,
            )));
        }
        if settings.use_juditha_lookup {
            pipeline = pipeline.with_stage(Box::new(JudithaLookupStage::new(
                name_db,
                settings.juditha_lookup_threshold,
                settings.stage_timeout,
            )));
        }

        Self {
            chunker: TextChunker::new(settings.chunk_max_chars),
            language_detector: LanguageDetector::new(settings.language_confidence_floor),
            ner_extractor,
            pattern_extractor: PatternExtractor::new(),
            pipeline,
            factory: EntityFactory::new(),
            settings,
        }
    }

    /// Analyze one source entity, returning every derived entity plus the
    /// mutated output entity (last), or an empty vec if the entity's schema
    /// isn't analyzable or it yielded no results at all (§4.F, mirroring
    /// the original's "only yield the output entity if anything happened").
    pub fn analyze(&self, entity: &EntityProxy) -> Result<Vec<EntityProxy>> {
        if !entity.schema().is_analyzable() {
            return Ok(Vec::new());
        }

        let mut output = EntityProxy::new(entity.id(), entity.schema().clone())?;
        let mut tracer = ExtractionTracer::new(self.settings.enable_tracing);
        let mut aggregator = Aggregator::new(self.settings.aggregator_max_results);
        if self.settings.use_confidence {
            aggregator = aggregator.with_confidence_scorer(ConfidenceScorer::new(
                Box::new(HeuristicTrashClassifier::new()),
                self.settings.ner_type_model_confidence,
            ));
        }
        let mut annotator = self.settings.annotate.then(Annotator::new);

        let texts: Vec<String> = entity.get(TEXT_PROPERTY).to_vec();
        let mut languages: Vec<String> = Vec::new();

        for text in &texts {
            for chunk in self.chunker.chunk(text) {
                if let Some(lang) = self.language_detector.detect(chunk) {
                    output.add(DETECTED_LANGUAGE_PROPERTY, lang.as_str());
                    if !languages.contains(&lang) {
                        languages.push(lang);
                    }
                }

                let ctx = ExtractionContext::new(entity.id(), chunk, languages.clone());
                self.run_extractor(self.ner_extractor.as_ref(), &ctx, &mut aggregator, &mut tracer);
                self.run_extractor(&self.pattern_extractor, &ctx, &mut aggregator, &mut tracer);
            }
        }

        let mut resolution_context = ResolutionContext::new(entity.id(), languages);
        let mut derived = Vec::new();
        let mut results_count = 0usize;

        for agg in aggregator.iter_results() {
            tracer.trace_aggregation(&agg.key, agg.tag.as_str(), agg.values.len());

            match agg.tag {
                Tag::Country => {
                    resolution_context.countries.extend(agg.values.iter().cloned());
                    results_count += 1;
                    continue;
                }
                Tag::Iban => {
                    for value in &agg.values {
                        if let Some(country) = PropertyType::Iban.country_hint(value).into_iter().next() {
                            let bank_account = self.factory.create_bank_account(value, &country, entity.id());
                            tracer.trace_entity_created(bank_account.schema().name(), bank_account.id());
                            derived.push(bank_account);
                        }
                        output.add(property_for_tag(Tag::Iban), value.as_str());
                        if let Some(ann) = &mut annotator {
                            ann.add_tag(property_for_tag(Tag::Iban), value.as_str());
                        }
                    }
                    results_count += 1;
                    continue;
                }
                Tag::Email | Tag::Phone => {
                    let prop = property_for_tag(agg.tag);
                    for value in &agg.values {
                        output.add(prop, value.as_str());
                        if let Some(ann) = &mut annotator {
                            ann.add_tag(prop, value.as_str());
                        }
                    }
                    results_count += 1;
                    continue;
                }
                _ => {}
            }

            let mut mention = Mention::from_aggregated(agg.key.clone(), agg.tag, agg.values.clone(), entity.id(), agg.sources.clone());
            self.pipeline.resolve(&mut mention, &mut resolution_context);
            tracer.trace_resolution(
                &mention.key,
                mention.rejection_stage.as_deref().unwrap_or("complete"),
                !mention.is_rejected,
                mention.rejection_reason.as_deref(),
            );

            if mention.is_rejected {
                continue;
            }

            let created = self.factory.create_from_mention(&mention, &resolution_context.countries);
            if let Some(created) = &created {
                tracer.trace_entity_created(created.schema().name(), created.id());
                derived.push(created.clone());
            }

            self.annotate_mention(&mut annotator, &mention, created.as_ref());

            let prop_name = property_for_tag(mention.ner_tag);
            let values = mention.resolved_values.as_ref().unwrap_or(&mention.values);
            for value in values {
                if !value.is_empty() {
                    output.add(prop_name, normalize_name(value));
                }
            }

            results_count += 1;
        }

        if results_count > 0 {
            for country in &resolution_context.countries {
                output.add("country", country.as_str());
            }
            if let Some(ann) = &annotator {
                for text in &texts {
                    if let Some(index_text) = ann.to_index_text(text) {
                        output.add("indexText", index_text);
                    }
                }
            }
            derived.push(output);
        }

        tracer.log_summary();
        Ok(derived)
    }

    fn run_extractor(
        &self,
        extractor: &dyn Extractor,
        ctx: &ExtractionContext,
        aggregator: &mut Aggregator,
        tracer: &mut ExtractionTracer,
    ) {
        match extractor.extract(ctx) {
            Ok(results) => {
                for result in results {
                    let accepted = aggregator.add(&result.value, result.tag, &result.source, result.confidence);
                    tracer.trace_extraction(&result.value, result.tag.as_str(), &result.source, accepted, None);
                }
            }
            Err(err) => {
                tracing::warn!(extractor = extractor.name(), error = %err, "extractor failed on chunk");
            }
        }
    }

    /// `_annotate_mention` (§4.F): annotate via the created entity's names
    /// when it's a LegalEntity, else fall back to tagging the raw values
    /// with the mention's NER-tag property role.
    fn annotate_mention(&self, annotator: &mut Option<Annotator>, mention: &Mention, created: Option<&EntityProxy>) {
        let Some(annotator) = annotator else { return };

        match created {
            Some(entity) if entity.schema().is_a(&Schema::LegalEntity) => {
                let names: BTreeSet<String> = entity.get("name").iter().cloned().collect();
                for value in mention.annotate_values() {
                    annotator.add_mention(value.clone(), entity.schema(), names.clone());
                }
            }
            _ => {
                let prop = property_for_tag(mention.ner_tag);
                for value in &mention.values {
                    annotator.add_tag(prop, value.as_str());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use proofweave_extract::ExtractionResult;
    use proofweave_resolve::{LookupResult, SchemaPrediction, StaticGeoDb};

    struct FixedExtractor {
        spans: Vec<(String, Tag)>,
    }

    impl Extractor for FixedExtractor {
        fn name(&self) -> &str {
            "fixture-ner"
        }
        fn extract(&self, _ctx: &ExtractionContext) -> proofweave_extract::Result<Vec<ExtractionResult>> {
            Ok(self
                .spans
                .iter()
                .map(|(value, tag)| ExtractionResult::new(value.clone(), *tag, "fixture-ner"))
                .collect())
        }
    }

    struct EmptyNameDb;
    impl NameDb for EmptyNameDb {
        fn predict_schema(&self, _name: &str) -> Vec<SchemaPrediction> {
            Vec::new()
        }
        fn validate_name(&self, _name: &str) -> bool {
            true
        }
        fn lookup(&self, _name: &str, _threshold: f32) -> Option<LookupResult> {
            None
        }
    }

    fn analyzer(settings: Settings, ner: Arc<dyn Extractor>) -> Analyzer {
        Analyzer::new(settings, ner, Arc::new(EmptyNameDb), Arc::new(StaticGeoDb::new()))
    }

    #[test]
    fn unanalyzable_schema_yields_nothing() {
        let settings = Settings::default();
        let ner: Arc<dyn Extractor> = Arc::new(FixedExtractor { spans: vec![] });
        let a = analyzer(settings, ner);
        let entity = EntityProxy::new("e1", Schema::Person).unwrap();
        assert!(a.analyze(&entity).unwrap().is_empty());
    }

    #[test]
    fn person_mention_is_emitted_and_annotated() {
        let mut settings = Settings::default();
        settings.use_juditha_lookup = false;
        settings.use_juditha_classifier = false;
        let ner: Arc<dyn Extractor> = Arc::new(FixedExtractor { spans: vec![("Angela Merkel".to_string(), Tag::Per)] });
        let a = analyzer(settings, ner);

        let mut entity = EntityProxy::new("test1", Schema::PlainText).unwrap();
        entity.add(TEXT_PROPERTY, "Das ist der Pudel von Angela Merkel. ".repeat(5));

        let results = a.analyze(&entity).unwrap();
        let output = results.last().unwrap();
        assert!(output.get("namesMentioned").contains(&"angela merkel".to_string()));
        assert!(output.get("detectedLanguage").contains(&"deu".to_string()));
        assert!(output.has("indexText"));
    }

    #[test]
    fn phone_pattern_emits_country_and_annotation() {
        let settings = Settings::default();
        let ner: Arc<dyn Extractor> = Arc::new(FixedExtractor { spans: vec![] });
        let a = analyzer(settings, ner);

        let mut entity = EntityProxy::new("test3", Schema::PlainText).unwrap();
        entity.add(TEXT_PROPERTY, "Mr. Flubby Flubber called the number tel:+919988111222 twice");

        let results = a.analyze(&entity).unwrap();
        let output = results.last().unwrap();
        assert!(output.get("phoneMentioned").contains(&"+919988111222".to_string()));
        assert!(output.get("country").contains(&"in".to_string()));
        let index_text = output.first("indexText").unwrap();
        assert!(index_text.contains("+919988111222"));
    }

    #[test]
    fn iban_emits_bank_account() {
        let settings = Settings::default();
        let ner: Arc<dyn Extractor> = Arc::new(FixedExtractor { spans: vec![] });
        let a = analyzer(settings, ner);

        let mut entity = EntityProxy::new("test", Schema::PlainText).unwrap();
        entity.add(TEXT_PROPERTY, "bank account CH5604835012345678009");

        let results = a.analyze(&entity).unwrap();
        let bank_account = results.iter().find(|e| e.schema() == &Schema::BankAccount).unwrap();
        assert_eq!(bank_account.id(), "iban-ch5604835012345678009");
        assert_eq!(bank_account.first("country"), Some("ch"));
        assert_eq!(bank_account.first("proof"), Some("test"));
    }

    #[test]
    fn empty_document_yields_no_entities_at_all() {
        let settings = Settings::default();
        let ner: Arc<dyn Extractor> = Arc::new(FixedExtractor { spans: vec![] });
        let a = analyzer(settings, ner);
        let mut entity = EntityProxy::new("e1", Schema::PlainText).unwrap();
        entity.add(TEXT_PROPERTY, "Nothing of interest happens in this paragraph at all.");
        assert!(a.analyze(&entity).unwrap().is_empty());
    }

    struct LookupNameDb;
    impl NameDb for LookupNameDb {
        fn predict_schema(&self, _name: &str) -> Vec<SchemaPrediction> {
            Vec::new()
        }
        fn validate_name(&self, _name: &str) -> bool {
            true
        }
        fn lookup(&self, name: &str, _threshold: f32) -> Option<LookupResult> {
            if name.to_lowercase().contains("circular plastics alliance") {
                Some(LookupResult {
                    caption: "Circular Plastics Alliance".to_string(),
                    score: 0.95,
                    names: vec!["Circular Plastics Alliance".to_string()],
                    schemata: vec!["Organization".to_string()],
                    countries: vec![],
                })
            } else {
                None
            }
        }
    }

    #[test]
    fn lookup_driven_resolution_yields_organization_and_annotation() {
        let mut settings = Settings::default();
        settings.use_geonames = false;
        let ner: Arc<dyn Extractor> =
            Arc::new(FixedExtractor { spans: vec![("Circular Plastics Alliance".to_string(), Tag::Org)] });
        let a = Analyzer::new(settings, ner, Arc::new(LookupNameDb), Arc::new(StaticGeoDb::new()));

        let mut entity = EntityProxy::new("test6", Schema::PlainText).unwrap();
        entity.add(TEXT_PROPERTY, "The Circular Plastics Alliance signed the agreement today.");

        let results = a.analyze(&entity).unwrap();
        let org = results.iter().find(|e| e.schema() == &Schema::Organization).unwrap();
        assert!(org.get("name").contains(&"Circular Plastics Alliance".to_string()));
        let output = results.last().unwrap();
        let index_text = output.first("indexText").unwrap();
        assert!(index_text.contains("Circular Plastics Alliance"));
        assert!(index_text.contains("p_companiesMentioned"));
        assert!(index_text.contains("p_namesMentioned"));
        assert!(index_text.contains("s_LegalEntity"));
        assert!(index_text.contains("s_Organization"));
    }
}
