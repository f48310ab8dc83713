//! Stage-based mention resolution (§4.E).
//!
//! ```text
//!  Mention (from AggregatedResult)
//!       │
//!       ▼
//!  ResolutionPipeline
//!   ├── RigourStage             (heuristic classifier, never rejects)
//!   ├── JudithaClassifierStage  (ML reclassify, rejects on OTHER)
//!   ├── JudithaValidatorStage   (PER-only name validation)
//!   ├── GeonamesStage           (LOC canonicalization)
//!   └── JudithaLookupStage      (external entity linking)
//!       │
//!       ▼
//!  Mention (terminal: rejected, or carrying a guaranteed caption)
//! ```

pub mod context;
pub mod geodb;
pub mod memo;
pub mod mention;
pub mod namedb;
pub mod stage;
pub mod stages;
pub mod timeout;

pub use context::ResolutionContext;
pub use geodb::{GeoDb, GeoMatch, StaticGeoDb};
pub use memo::Memo;
pub use mention::Mention;
pub use namedb::{InMemoryNameDb, LookupResult, NameDb, SchemaPrediction};
pub use stage::{ResolutionPipeline, Stage};
pub use stages::{GeonamesStage, JudithaClassifierStage, JudithaLookupStage, JudithaValidatorStage, RigourStage};
