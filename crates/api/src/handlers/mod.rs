//! Request handlers, one module per entity family.
//!
//! Handlers orchestrate one catalog use case per request: validate input,
//! resolve referenced associations, run the repository mutation or query,
//! and project the result to its output DTO.

pub mod actors;
pub mod categories;
pub mod directors;
pub mod movies;
