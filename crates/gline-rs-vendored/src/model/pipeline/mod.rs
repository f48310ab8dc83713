//! Defines the `Pipeline` trait and its implementations

pub mod context;
pub mod relation;
pub mod span;
pub mod token;
