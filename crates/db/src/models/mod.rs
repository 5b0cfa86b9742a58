//! Entity models and request DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO for full-replace updates
//!
//! Updates are full-replace rather than field patches: an update either
//! applies all mutable fields or none of them.

pub mod actor;
pub mod category;
pub mod director;
pub mod movie;
