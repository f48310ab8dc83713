//! `LanguageDetector` (§4.A): a statistical classifier producing a
//! best-guess language, retained only above a confidence floor.
//!
//! Rust expansion: `whatlang` ships in-process with no model files, and its
//! output codes are ISO 639-3 (`deu`, `fra`, ...), matching §8's literal
//! scenarios exactly — so it stands in directly for the external model
//! runtime §1 otherwise excludes, behind a one-method capability so a
//! caller can still swap detectors.
pub struct LanguageDetector {
    confidence_floor: f64,
}

impl LanguageDetector {
    pub fn new(confidence_floor: f64) -> Self {
        Self { confidence_floor }
    }

    /// Best-guess ISO 639-3 code for `text`, or `None` if nothing could be
    /// detected above the confidence floor.
    pub fn detect(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        let info = whatlang::detect(text)?;
        (info.confidence() >= self.confidence_floor).then(|| info.lang().code().to_string())
    }
}
