//! Facade over the rest of the workspace (§2): construct an [`Analyzer`]
//! once, then call [`analyze_entity`]/[`analyze_entities`] for every source
//! entity.
//!
//! Grounded on `original_source/ftm_analyze/logic.py`'s `analyze_entity`/
//! `analyze_entities` generator functions. The original re-instantiates its
//! `Analyzer` per call with five boolean overrides (`resolve_mentions`,
//! `annotate`, `validate_names`, `refine_mentions`, `refine_locations`); here
//! those same five toggles live on `Settings` at `Analyzer::new` time instead,
//! since `proofweave-analyzer`'s `Analyzer` is deliberately built once and
//! reused so its stages' memoization caches survive across documents (see
//! DESIGN.md). Per-call overrides would require rebuilding the pipeline on
//! every call, defeating that.

pub use proofweave_analyzer::{Analyzer, AnalyzerError, Result};
pub use proofweave_types::EntityProxy;

/// Analyze one source entity, returning every derived entity plus the
/// mutated output entity (last), or nothing if the entity contributed no
/// extraction results at all.
pub fn analyze_entity(analyzer: &Analyzer, entity: &EntityProxy) -> Result<Vec<EntityProxy>> {
    analyzer.analyze(entity)
}

/// Analyze a sequence of source entities, logging progress every 10 entities
/// and flattening every entity's results into one stream.
pub fn analyze_entities<'a>(analyzer: &Analyzer, entities: impl IntoIterator<Item = &'a EntityProxy>) -> Result<Vec<EntityProxy>> {
    let mut out = Vec::new();
    for (i, entity) in entities.into_iter().enumerate() {
        if i > 0 && i % 10 == 0 {
            tracing::info!(count = i, "analyzing entities");
        }
        out.extend(analyzer.analyze(entity)?);
    }
    Ok(out)
}
