//! Variant 4: zero-shot NER with a fixed label vocabulary (§4.B).
//!
//! Ships one real backend — GLiNER over the vendored `gline-rs`/`ort` ONNX
//! runtime, feature-gated behind `zero-shot-gliner` exactly as the teacher
//! gates its own GLiNER integration — with a non-functional stub behind the
//! same trait when the feature is off, so this crate always compiles
//! without model files present.

use std::sync::Arc;

use crate::backend::{spans_to_results, NerBackend, RawSpan};
use crate::context::{ExtractionContext, ExtractionResult};
use crate::error::Result;
use crate::extractor::Extractor;
use crate::gazetteer::CountryGazetteer;

/// The fixed zero-shot label vocabulary (§4.B variant 4).
pub const ZERO_SHOT_LABELS: &[&str] = &["person", "organization", "location"];

pub struct ZeroShotNerExtractor {
    name: String,
    backend: Arc<dyn NerBackend>,
    gazetteer: Arc<dyn CountryGazetteer>,
}

impl ZeroShotNerExtractor {
    pub fn new(backend: Arc<dyn NerBackend>, gazetteer: Arc<dyn CountryGazetteer>) -> Self {
        Self { name: "zero-shot-ner".to_string(), backend, gazetteer }
    }
}

impl Extractor for ZeroShotNerExtractor {
    fn name(&self) -> &str {
        &self.name
    }

    fn extract(&self, ctx: &ExtractionContext) -> Result<Vec<ExtractionResult>> {
        let spans = self.backend.tag(&ctx.text)?;
        Ok(spans_to_results(spans, &self.name, self.gazetteer.as_ref()))
    }
}

#[cfg(feature = "zero-shot-gliner")]
mod gliner_backend {
    use std::path::Path;
    use std::sync::Mutex;

    use gliner::model::GLiNER;
    use gliner::model::input::text::TextInput;
    use gliner::model::params::Parameters;
    use gliner::model::pipeline::span::SpanMode;
    use orp::params::RuntimeParameters;

    use super::{NerBackend, RawSpan, ZERO_SHOT_LABELS};
    use crate::error::{ExtractError, Result};

    /// GLiNER span-mode model wrapped behind a mutex since inference
    /// requires `&mut self` on the underlying `GLiNER<SpanMode>`.
    pub struct GlinerBackend {
        model: Mutex<GLiNER<SpanMode>>,
        threshold: f32,
    }

    impl GlinerBackend {
        pub fn new(model_path: &str, tokenizer_path: &str, threshold: f32) -> Result<Self> {
            let params = Parameters::default().with_threshold(threshold);
            let runtime_params = RuntimeParameters::default();
            let model = GLiNER::<SpanMode>::new(
                params,
                runtime_params,
                Path::new(tokenizer_path),
                Path::new(model_path),
            )
            .map_err(|e| ExtractError::BackendLoad {
                backend: "gliner".to_string(),
                reason: e.to_string(),
            })?;
            Ok(Self { model: Mutex::new(model), threshold })
        }
    }

    impl NerBackend for GlinerBackend {
        fn tag(&self, text: &str) -> Result<Vec<RawSpan>> {
            let input = TextInput::from_str(&[text], ZERO_SHOT_LABELS).map_err(|e| ExtractError::Runtime {
                extractor: "zero-shot-ner".to_string(),
                reason: format!("input error: {e}"),
            })?;

            let mut model = self.model.lock().map_err(|_| ExtractError::Runtime {
                extractor: "zero-shot-ner".to_string(),
                reason: "model lock poisoned".to_string(),
            })?;

            let output = model.inference(input).map_err(|e| ExtractError::Runtime {
                extractor: "zero-shot-ner".to_string(),
                reason: format!("inference error: {e}"),
            })?;

            Ok(output
                .spans
                .iter()
                .flat_map(|batch| batch.iter())
                .filter(|span| span.probability() >= self.threshold)
                .map(|span| RawSpan {
                    text: span.text().to_string(),
                    label: span.class().to_string(),
                    score: Some(span.probability()),
                })
                .collect())
        }
    }
}

#[cfg(feature = "zero-shot-gliner")]
pub use gliner_backend::GlinerBackend;

#[cfg(not(feature = "zero-shot-gliner"))]
mod stub {
    use super::{NerBackend, RawSpan};
    use crate::error::{ExtractError, Result};

    /// Stands in for [`GlinerBackend`] when the `zero-shot-gliner` feature
    /// is disabled, so this crate always compiles without ONNX model files.
    pub struct GlinerBackend;

    impl GlinerBackend {
        pub fn new(_model_path: &str, _tokenizer_path: &str, _threshold: f32) -> Result<Self> {
            Err(ExtractError::BackendLoad {
                backend: "gliner".to_string(),
                reason: "built without the zero-shot-gliner feature".to_string(),
            })
        }
    }

    impl NerBackend for GlinerBackend {
        fn tag(&self, _text: &str) -> Result<Vec<RawSpan>> {
            Err(ExtractError::BackendLoad {
                backend: "gliner".to_string(),
                reason: "built without the zero-shot-gliner feature".to_string(),
            })
        }
    }
}

#[cfg(not(feature = "zero-shot-gliner"))]
pub use stub::GlinerBackend;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gazetteer::StaticCountryGazetteer;

    struct MockBackend;
    impl NerBackend for MockBackend {
        fn tag(&self, _text: &str) -> Result<Vec<RawSpan>> {
            Ok(vec![RawSpan { text: "Jane Doe".to_string(), label: "person".to_string(), score: Some(0.8) }])
        }
    }

    #[test]
    fn zero_shot_extractor_normalizes_lowercase_labels() {
        let extractor = ZeroShotNerExtractor::new(Arc::new(MockBackend), Arc::new(StaticCountryGazetteer::new()));
        let ctx = ExtractionContext::new("e1", "Jane Doe said hi", vec![]);
        let results = extractor.extract(&ctx).unwrap();
        assert!(results.iter().any(|r| r.value == "Jane Doe"));
    }
}
