use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Every variant is a recoverable, per-request outcome; nothing here is
/// fatal to the process. The API layer maps these onto HTTP statuses.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The primary entity of a read or update does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// One or more referenced association ids did not resolve to a live
    /// entity. No specific id is attributed; the requester can bisect.
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
