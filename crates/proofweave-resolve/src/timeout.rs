//! Wall-clock stage timeout (§5): "each call is synchronous from the
//! pipeline's viewpoint... bounded by a per-stage timeout; a timeout is
//! treated identically to a non-match". Since the pipeline introduces no
//! async runtime, a stage can't cancel a call mid-flight — it measures
//! elapsed time around the call and discards a result that arrived too
//! late, which is the Rust expansion's "wall-clock check" reading of the
//! same guarantee.

use std::time::{Duration, Instant};

pub fn call_with_budget<T>(budget: Duration, f: impl FnOnce() -> T) -> Option<T> {
    let start = Instant::now();
    let result = f();
    if start.elapsed() > budget {
        None
    } else {
        Some(result)
    }
}
