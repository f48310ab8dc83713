//! The Extractor capability (§4.B): NER variants plus the regex pattern
//! extractor, producing `ExtractionResult`s from text chunks.
//!
//! ```text
//!  Extractor (trait)
//!   ├── StatisticalNerExtractor   (per-language NerBackend map)
//!   ├── SequenceTaggerNerExtractor(single NerBackend, sentence-split)
//!   ├── TransformerNerExtractor   (single NerBackend)
//!   ├── ZeroShotNerExtractor      (single NerBackend, fixed label vocab)
//!   └── PatternExtractor          (EMAIL / PHONE / IBAN regexes)
//! ```

pub mod backend;
pub mod context;
pub mod error;
pub mod extractor;
pub mod gazetteer;
pub mod patterns;
pub mod zero_shot;

pub use backend::{spans_to_results, NerBackend, RawSpan, SequenceTaggerNerExtractor, StatisticalNerExtractor, TransformerNerExtractor};
pub use context::{ExtractionContext, ExtractionResult};
pub use error::{ExtractError, Result};
pub use extractor::{test_name, Extractor, NAME_MAX_LENGTH, NAME_MIN_LENGTH};
pub use gazetteer::{CountryGazetteer, StaticCountryGazetteer};
pub use patterns::PatternExtractor;
pub use zero_shot::{GlinerBackend, ZeroShotNerExtractor, ZERO_SHOT_LABELS};
