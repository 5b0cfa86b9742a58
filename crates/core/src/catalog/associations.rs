//! Association-set rules for movie relationships.
//!
//! A movie's category and actor sets must never contain duplicate
//! identities, and a requested id set must resolve in full before any
//! mutation runs. Both rules are pure; the repository layer supplies the
//! lookups.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::DbId;

/// De-duplicate a requested id set, preserving first-seen order.
///
/// Clients may submit the same id more than once; the association silently
/// collapses to the distinct set.
pub fn distinct_ids(ids: &[DbId]) -> Vec<DbId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// Require that every requested id resolved to a live entity.
///
/// `requested` must already be distinct (see [`distinct_ids`]). Partial
/// resolution is a client error, not a silent drop.
pub fn require_all_resolved(
    entity: &'static str,
    requested: &[DbId],
    resolved: usize,
) -> Result<(), CoreError> {
    if resolved != requested.len() {
        return Err(CoreError::InvalidReference(format!(
            "one or more {entity} ids are invalid"
        )));
    }
    Ok(())
}
