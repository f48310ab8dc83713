//! Various utilities

pub mod error;
pub mod math;
pub mod result;

#[cfg(feature = "memprof")]
pub mod memprof;
