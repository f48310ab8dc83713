//! Entity emission and search-text annotation (§4.F).
//!
//! ```text
//!  Mention (survived resolution)
//!       │
//!       ▼
//!  EntityFactory ---- Resolved entity | Mention entity | (LOC: nothing)
//!       │
//!       ▼
//!  Annotator ---- Annotation* ---- annotated indexText
//! ```

pub mod annotation;
pub mod annotator;
pub mod factory;

pub use annotation::{Annotation, clean_text, substitute_word_bounded};
pub use annotator::{ANNOTATED, Annotator};
pub use factory::{EntityFactory, clean_name_for_tag, property_for_tag};
