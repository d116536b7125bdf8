//! Composition utilities for building `Repos` from a configured backend.
//!
//! This module is focused purely on construction and should not contain
//! any domain logic.

use std::path::Path;
use std::sync::Arc;

use sqlx::SqlitePool;

use mindtoeye_core::{Repos, StorageBackend};

use crate::memory::MemoryStore;
use crate::repositories::{
    SqliteConceptRepository, SqliteProjectRepository, SqliteUserRepository,
};
use crate::setup::setup_database;

/// Factory for creating repository instances.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteUserRepository::new(pool.clone())),
            Arc::new(SqliteProjectRepository::new(pool.clone())),
            Arc::new(SqliteConceptRepository::new(pool)),
            "sqlite",
        )
    }

    /// Build repositories over a fresh in-memory store.
    pub fn build_memory_repos() -> Repos {
        MemoryStore::new().repos()
    }

    /// Open the configured backend.
    ///
    /// `database_path` is only consulted for [`StorageBackend::Sqlite`]; when
    /// absent the default location under the data directory is used.
    pub async fn open(
        backend: StorageBackend,
        database_path: Option<&Path>,
    ) -> anyhow::Result<Repos> {
        match backend {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory storage");
                Ok(Self::build_memory_repos())
            }
            StorageBackend::Sqlite => {
                let path = match database_path {
                    Some(p) => p.to_path_buf(),
                    None => mindtoeye_core::paths::database_path()?,
                };
                tracing::info!(path = %path.display(), "Using SQLite storage");
                let pool = setup_database(&path).await?;
                Ok(Self::build_repos(pool))
            }
        }
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get a reference to the pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Repositories over this database.
    pub fn repos(&self) -> Repos {
        CoreFactory::build_repos(self.pool.clone())
    }
}
