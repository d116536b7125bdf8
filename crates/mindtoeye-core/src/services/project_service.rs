//! Project service - ownership-checked project CRUD.

use std::sync::Arc;

use crate::domain::{NewProject, Project, ProjectUpdate};
use crate::ports::{CoreError, ProjectRepository, RepositoryError};
use crate::validation::validate_project_name;

/// Service for project operations.
///
/// Every call is scoped to a user. Projects owned by someone else are
/// reported as not found rather than forbidden.
pub struct ProjectService {
    repo: Arc<dyn ProjectRepository>,
}

impl ProjectService {
    pub fn new(repo: Arc<dyn ProjectRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, user_id: i64) -> Result<Vec<Project>, CoreError> {
        Ok(self.repo.list_for_user(user_id).await?)
    }

    pub async fn get(&self, user_id: i64, id: i64) -> Result<Project, CoreError> {
        match self.repo.get_by_id(id).await {
            Ok(project) if project.user_id == user_id => Ok(project),
            Ok(_) | Err(RepositoryError::NotFound(_)) => {
                Err(CoreError::NotFound("Project".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn create(&self, user_id: i64, mut project: NewProject) -> Result<Project, CoreError> {
        validate_project_name(&project.name)?;
        project.name = project.name.trim().to_string();
        project.user_id = user_id;
        let created = self.repo.insert(&project).await?;
        tracing::info!(project_id = created.id, user_id, "Created project");
        Ok(created)
    }

    pub async fn update(
        &self,
        user_id: i64,
        id: i64,
        update: ProjectUpdate,
    ) -> Result<Project, CoreError> {
        if let Some(name) = &update.name {
            validate_project_name(name)?;
        }
        let mut project = self.get(user_id, id).await?;
        if update.is_empty() {
            return Ok(project);
        }
        update.apply(&mut project);
        project.name = project.name.trim().to_string();
        self.repo.update(&project).await?;
        Ok(project)
    }

    /// Delete a project together with its concepts.
    pub async fn delete(&self, user_id: i64, id: i64) -> Result<(), CoreError> {
        self.get(user_id, id).await?;
        self.repo.delete(id).await?;
        tracing::info!(project_id = id, user_id, "Deleted project");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support;

    fn new_project(name: &str) -> NewProject {
        NewProject {
            name: name.to_string(),
            client_name: None,
            user_id: 0,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_owner() {
        let svc = ProjectService::new(test_support::repos().projects);
        let project = svc.create(7, new_project("  Solystra ")).await.unwrap();
        assert_eq!(project.user_id, 7);
        assert_eq!(project.name, "Solystra");
        assert_eq!(svc.list(7).await.unwrap().len(), 1);
        assert!(svc.list(8).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_foreign_project_is_not_found() {
        let svc = ProjectService::new(test_support::repos().projects);
        let project = svc.create(1, new_project("Mine")).await.unwrap();
        assert!(svc.get(2, project.id).await.unwrap_err().is_not_found());
        assert!(svc.delete(2, project.id).await.unwrap_err().is_not_found());
        assert!(svc.get(1, project.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_validates_name() {
        let svc = ProjectService::new(test_support::repos().projects);
        let project = svc.create(1, new_project("Mine")).await.unwrap();
        let bad = ProjectUpdate {
            name: Some(String::new()),
            client_name: None,
        };
        assert!(matches!(
            svc.update(1, project.id, bad).await.unwrap_err(),
            CoreError::Validation(_)
        ));

        let good = ProjectUpdate {
            name: None,
            client_name: Some(Some("Client".to_string())),
        };
        let updated = svc.update(1, project.id, good).await.unwrap();
        assert_eq!(updated.client_name.as_deref(), Some("Client"));
        assert_eq!(svc.get(1, project.id).await.unwrap(), updated);
    }
}
