//! Confidence scoring (§4.C): an entropy-derived confidence score over a
//! label distribution, with a "trash" sentinel label that always fails
//! validation regardless of threshold.
//!
//! Grounded on `original_source/ftm_analyze/analysis/aggregate/confidence.py`:
//! a classifier produces a label distribution for a value, confidence is
//! `1 + sum(p * ln(p)) / ln(num_labels)` (low entropy → high confidence),
//! and `is_valid` short-circuits to `true` whenever the threshold is zero.

/// A label-distribution classifier over free-text values (§4.C). Concrete
/// implementations plug in whatever scoring model a deployment loads; this
/// crate ships one heuristic default, no ML model.
pub trait TrashClassifier: Send + Sync {
    /// Labels and their probabilities for one value. Must sum to
    /// (approximately) 1.0 and contain at least one label.
    fn label_distribution(&self, value: &str) -> Vec<(String, f32)>;
}

/// The sentinel label a classifier may emit for garbage-looking candidates.
pub const TRASH_LABEL: &str = "trash";

/// A dependency-free stand-in classifier using word-shape features: values
/// that look like plausible names/organizations score confidently as
/// "name"; values with digit-heavy or symbol-heavy shapes score as "trash".
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicTrashClassifier;

impl HeuristicTrashClassifier {
    pub fn new() -> Self {
        Self
    }

    fn trash_score(value: &str) -> f32 {
        let total = value.chars().count().max(1) as f32;
        let digits = value.chars().filter(|c| c.is_ascii_digit()).count() as f32;
        let symbols = value
            .chars()
            .filter(|c| !c.is_alphanumeric() && !c.is_whitespace())
            .count() as f32;
        let has_alpha = value.chars().any(|c| c.is_alphabetic());
        let mut score = (digits + symbols) / total;
        if !has_alpha {
            score = 1.0;
        }
        score.clamp(0.01, 0.99)
    }
}

impl TrashClassifier for HeuristicTrashClassifier {
    fn label_distribution(&self, value: &str) -> Vec<(String, f32)> {
        let trash = Self::trash_score(value);
        vec![(TRASH_LABEL.to_string(), trash), ("name".to_string(), 1.0 - trash)]
    }
}

/// Wraps a [`TrashClassifier`] with an entropy-derived confidence threshold.
pub struct ConfidenceScorer {
    classifier: Box<dyn TrashClassifier>,
    threshold: f32,
}

impl ConfidenceScorer {
    pub fn new(classifier: Box<dyn TrashClassifier>, threshold: f32) -> Self {
        Self { classifier, threshold }
    }

    /// The top label and its entropy-derived confidence for one value.
    /// Confidence is `1 + sum(p * ln(p)) / ln(num_labels)`: a sharply peaked
    /// distribution (low entropy) scores near 1.0, a uniform one near 0.0.
    pub fn score(&self, value: &str) -> (String, f32) {
        let dist = self.classifier.label_distribution(value);
        let n = dist.len().max(1) as f32;
        let max_entropy = n.ln();
        let entropy_term: f32 = dist.iter().map(|(_, p)| if *p > 0.0 { p * p.ln() } else { 0.0 }).sum();
        let confidence = if max_entropy > 0.0 { 1.0 + entropy_term / max_entropy } else { 1.0 };

        let top = dist
            .into_iter()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(label, _)| label)
            .unwrap_or_else(|| "name".to_string());

        (top, confidence)
    }

    /// Whether a single value passes confidence filtering. A zero/negative
    /// threshold disables filtering entirely, matching the Python
    /// `if not self.threshold: return True` short circuit.
    fn is_value_valid(&self, value: &str) -> bool {
        if self.threshold <= 0.0 {
            return true;
        }
        let (top, confidence) = self.score(value);
        if top == TRASH_LABEL {
            return false;
        }
        confidence >= self.threshold
    }

    /// Whether a whole aggregated bucket passes confidence filtering (§4.C):
    /// rejected iff *any* value in the set is trash-labeled or scores below
    /// threshold, mirroring the original `ConfidenceScorer.is_valid(values)`
    /// iterating every alias rather than just one representative.
    pub fn is_valid<'a>(&self, values: impl IntoIterator<Item = &'a str>) -> bool {
        values.into_iter().all(|value| self.is_value_valid(value))
    }
}
