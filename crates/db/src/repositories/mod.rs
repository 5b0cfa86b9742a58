//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Mutations that touch an
//! owning row and its junction rows run inside one transaction.

pub mod actor_repo;
pub mod category_repo;
pub mod director_repo;
pub mod movie_repo;

pub use actor_repo::ActorRepo;
pub use category_repo::CategoryRepo;
pub use director_repo::DirectorRepo;
pub use movie_repo::MovieRepo;
