//! Dedup + confidence-filter layer between extraction and resolution (§4.C).
//!
//! ```text
//!  ExtractionResult*
//!       │  add(value, tag, source, confidence)
//!       ▼
//!  Aggregator ── make_key ──▶ AggregatedResult buckets (BTreeMap<(key, Tag), _>)
//!       │  iter_results()
//!       ▼  (NER-tagged buckets filtered through ConfidenceScorer, if attached)
//!  AggregatedResult*  ──▶  resolution pipeline
//! ```

pub mod aggregated;
pub mod aggregator;
pub mod confidence;
pub mod key;

pub use aggregated::AggregatedResult;
pub use aggregator::{Aggregator, TraceSummary};
pub use confidence::{ConfidenceScorer, HeuristicTrashClassifier, TrashClassifier, TRASH_LABEL};
pub use key::make_key;
