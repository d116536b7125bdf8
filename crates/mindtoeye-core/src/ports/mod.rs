//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Repository traits are minimal and CRUD-focused
//! - AI ports take core-owned request DTOs and return plain text / asset URLs

pub mod ai;
pub mod concept_repository;
pub mod project_repository;
pub mod user_repository;

use std::sync::Arc;
use thiserror::Error;

pub use ai::{
    AiPortError, AiPortResult, ImageGeneratorPort, ImageRequest, TextGeneratorPort, TextRequest,
};
pub use concept_repository::ConceptRepository;
pub use project_repository::ProjectRepository;
pub use user_repository::{UserRecord, UserRepository};

/// Container for all repository trait objects.
///
/// Lives in `mindtoeye-core` so that `AppCore` can accept it without
/// depending on `mindtoeye-db`.
///
/// ```ignore
/// // In mindtoeye-db factory:
/// let repos = CoreFactory::build_repos(&pool);
///
/// // In adapter bootstrap:
/// let core = AppCore::new(repos, text, image);
/// ```
#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn UserRepository>,
    pub projects: Arc<dyn ProjectRepository>,
    pub concepts: Arc<dyn ConceptRepository>,
    /// Short label of the storage backend (`memory`, `sqlite`), reported by health checks.
    pub backend: &'static str,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        users: Arc<dyn UserRepository>,
        projects: Arc<dyn ProjectRepository>,
        concepts: Arc<dyn ConceptRepository>,
        backend: &'static str,
    ) -> Self {
        Self {
            users,
            projects,
            concepts,
            backend,
        }
    }
}

impl std::fmt::Debug for Repos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repos")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// An AI provider call failed.
    #[error(transparent)]
    Ai(#[from] AiPortError),

    /// The provider answered but the answer could not be turned into brand data.
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Entity missing or not visible to the caller.
    #[error("{0} not found")]
    NotFound(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Repository `NotFound` and core `NotFound` are the same thing to callers.
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Repository(RepositoryError::NotFound(_))
        )
    }
}
