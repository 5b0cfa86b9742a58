//! Catalog domain rules.
//!
//! Association-set handling (de-duplication, full-resolution checks) and
//! the listing query policy (page clamping, sort-key whitelist, page math).

pub mod associations;
pub mod query;

pub use associations::{distinct_ids, require_all_resolved};
pub use query::{MovieSortKey, Page, PageQuery};
