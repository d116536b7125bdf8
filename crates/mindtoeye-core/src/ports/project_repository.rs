//! Project repository trait definition.
//!
//! Ownership checks belong in `ProjectService`; the repository only
//! filters by user where a listing needs it.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewProject, Project};

/// Repository for project persistence operations.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Projects owned by `user_id`, newest first.
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Project>, RepositoryError>;

    /// Returns `Err(RepositoryError::NotFound)` if the project doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Project, RepositoryError>;

    async fn insert(&self, project: &NewProject) -> Result<Project, RepositoryError>;

    /// Persist the full project row.
    async fn update(&self, project: &Project) -> Result<(), RepositoryError>;

    /// Delete a project and every concept belonging to it.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn _assert_object_safe(_: Arc<dyn ProjectRepository>) {}
}
