//! Cinedex core domain logic.
//!
//! Pure types and rules shared by the repository layer and the API server:
//! the error taxonomy, association-set rules, and the catalog query policy
//! (page clamping, sort whitelist, page math). This crate performs no I/O.

pub mod catalog;
pub mod error;
pub mod types;
