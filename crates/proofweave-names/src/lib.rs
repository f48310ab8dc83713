//! Name normalization, tokenization, and heuristic symbol-tagging toolkit.
//!
//! Shared by the aggregator's dedup key rule (§4.C), RigourStage (§4.E.1),
//! GeonamesStage's fuzzy matching (§4.E.4), and the entity factory's
//! `clean_name_for_tag` (§4.F).

pub mod normalize;
pub mod pick;
pub mod prefixes;
pub mod similarity;
pub mod symbols;
pub mod tokenize;

pub use normalize::normalize_name;
pub use pick::{pick_name, pick_name_set};
pub use prefixes::{remove_obj_prefixes, remove_org_prefixes, remove_person_prefixes};
pub use similarity::jaro_similarity;
pub use symbols::{classify_name_rigour, is_rigour_org, is_rigour_person, strip_prefixes_for_tag, RigourClass};
pub use tokenize::tokenize_name;
