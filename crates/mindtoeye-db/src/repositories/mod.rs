//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_concept_repository;
mod sqlite_project_repository;
mod sqlite_user_repository;

pub use sqlite_concept_repository::SqliteConceptRepository;
pub use sqlite_project_repository::SqliteProjectRepository;
pub use sqlite_user_repository::SqliteUserRepository;
