//! Ontology primitives shared by every stage of the pipeline.
//!
//! ```text
//!  EntityProxy ---- Schema ---- PropertyType
//!      |               |
//!      +-- source/output entity shape (§3)
//! ```
//!
//! The real ontology, name database, and gazetteer are external
//! collaborators (§1); this crate supplies only the closed slice of schema
//! and property-type behavior the pipeline itself needs to construct and
//! classify entities.

pub mod entity;
pub mod error;
pub mod property;
pub mod schema;
pub mod tag;

pub use entity::EntityProxy;
pub use error::{Result, TypesError};
pub use property::PropertyType;
pub use schema::Schema;
pub use tag::Tag;
