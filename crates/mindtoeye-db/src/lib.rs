//! Storage backends for MindToEye.
//!
//! Two implementations of the core repository ports:
//!
//! - [`memory`]: process-local maps, the default for development
//! - [`repositories`]: `SQLite` via `sqlx`, for anything that must survive a restart
//!
//! [`CoreFactory`] turns a configured [`StorageBackend`] into a `Repos` container.

#![deny(unsafe_code)]

pub mod factory;
pub mod memory;
pub mod repositories;
pub mod setup;

pub use factory::CoreFactory;
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

pub use memory::MemoryStore;
pub use mindtoeye_core::StorageBackend;
pub use repositories::{SqliteConceptRepository, SqliteProjectRepository, SqliteUserRepository};

pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
