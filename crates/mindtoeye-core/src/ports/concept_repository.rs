//! Brand concept repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{BrandConcept, NewBrandConcept};

/// Repository for brand concepts.
///
/// # Invariant
///
/// At most one concept per project is active. Implementations enforce it in
/// `insert` (when the new concept is active) and in `set_active`, and must do
/// so atomically with respect to other writers.
#[async_trait]
pub trait ConceptRepository: Send + Sync {
    /// Concepts of a project, newest first.
    async fn list_for_project(&self, project_id: i64) -> Result<Vec<BrandConcept>, RepositoryError>;

    /// Returns `Err(RepositoryError::NotFound)` if the concept doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<BrandConcept, RepositoryError>;

    /// Returns `Err(RepositoryError::Constraint)` if the project doesn't exist.
    async fn insert(&self, concept: &NewBrandConcept) -> Result<BrandConcept, RepositoryError>;

    /// Persist name, inputs, output and active flag of an existing concept.
    ///
    /// Does not touch sibling concepts, so callers activating a concept
    /// use `set_active` instead.
    async fn update(&self, concept: &BrandConcept) -> Result<(), RepositoryError>;

    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// Mark `id` active and every other concept of `project_id` inactive.
    async fn set_active(&self, id: i64, project_id: i64) -> Result<BrandConcept, RepositoryError>;
}
