//! Process-local storage backend.
//!
//! Mirrors the `SQLite` semantics closely enough that services behave the
//! same on either backend: case-insensitive unique usernames, the project
//! foreign key on concepts, cascading deletes, and a single active concept
//! per project. Nothing survives a restart.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use mindtoeye_core::ports::{
    ConceptRepository, ProjectRepository, RepositoryError, UserRecord, UserRepository,
};
use mindtoeye_core::{BrandConcept, NewBrandConcept, NewProject, Project, Repos, User};

#[derive(Debug, Default)]
struct MemoryState {
    users: BTreeMap<i64, User>,
    projects: BTreeMap<i64, Project>,
    concepts: BTreeMap<i64, BrandConcept>,
    next_user_id: i64,
    next_project_id: i64,
    next_concept_id: i64,
}

impl MemoryState {
    fn next_id(counter: &mut i64) -> i64 {
        *counter += 1;
        *counter
    }
}

/// Shared handle to the in-memory tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All three repositories backed by this store.
    pub fn repos(&self) -> Repos {
        Repos::new(
            Arc::new(MemoryUserRepository(self.clone())),
            Arc::new(MemoryProjectRepository(self.clone())),
            Arc::new(MemoryConceptRepository(self.clone())),
            "memory",
        )
    }
}

pub struct MemoryUserRepository(MemoryStore);
pub struct MemoryProjectRepository(MemoryStore);
pub struct MemoryConceptRepository(MemoryStore);

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        let state = self.0.state.read().await;
        state
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("user {id}")))
    }

    async fn get_by_username(&self, username: &str) -> Result<User, RepositoryError> {
        let state = self.0.state.read().await;
        state
            .users
            .values()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("user {username}")))
    }

    async fn get_by_auth_id(&self, auth_id: &str) -> Result<User, RepositoryError> {
        let state = self.0.state.read().await;
        state
            .users
            .values()
            .find(|u| u.auth_id.as_deref() == Some(auth_id))
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("user {auth_id}")))
    }

    async fn insert(&self, user: &UserRecord) -> Result<User, RepositoryError> {
        let mut state = self.0.state.write().await;
        if state
            .users
            .values()
            .any(|u| u.username.eq_ignore_ascii_case(&user.username))
        {
            return Err(RepositoryError::AlreadyExists(format!(
                "username {}",
                user.username
            )));
        }
        if let Some(auth_id) = &user.auth_id {
            if state
                .users
                .values()
                .any(|u| u.auth_id.as_ref() == Some(auth_id))
            {
                return Err(RepositoryError::AlreadyExists(format!("auth id {auth_id}")));
            }
        }

        let id = MemoryState::next_id(&mut state.next_user_id);
        let created = User {
            id,
            username: user.username.clone(),
            auth_id: user.auth_id.clone(),
            password_hash: user.password_hash.clone(),
            created_at: Utc::now(),
        };
        state.users.insert(id, created.clone());
        Ok(created)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.0.state.read().await.users.len() as u64)
    }
}

#[async_trait]
impl ProjectRepository for MemoryProjectRepository {
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Project>, RepositoryError> {
        let state = self.0.state.read().await;
        // Ids grow with insertion order, so reverse id order is newest first.
        Ok(state
            .projects
            .values()
            .rev()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Project, RepositoryError> {
        let state = self.0.state.read().await;
        state
            .projects
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("project {id}")))
    }

    async fn insert(&self, project: &NewProject) -> Result<Project, RepositoryError> {
        let mut state = self.0.state.write().await;
        if !state.users.contains_key(&project.user_id) {
            return Err(RepositoryError::Constraint(format!(
                "user {} does not exist",
                project.user_id
            )));
        }
        let id = MemoryState::next_id(&mut state.next_project_id);
        let created = Project {
            id,
            name: project.name.clone(),
            client_name: project.client_name.clone(),
            user_id: project.user_id,
            created_at: Utc::now(),
        };
        state.projects.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, project: &Project) -> Result<(), RepositoryError> {
        let mut state = self.0.state.write().await;
        let existing = state
            .projects
            .get_mut(&project.id)
            .ok_or_else(|| RepositoryError::NotFound(format!("project {}", project.id)))?;
        existing.name.clone_from(&project.name);
        existing.client_name.clone_from(&project.client_name);
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut state = self.0.state.write().await;
        if state.projects.remove(&id).is_none() {
            return Err(RepositoryError::NotFound(format!("project {id}")));
        }
        state.concepts.retain(|_, c| c.project_id != id);
        Ok(())
    }
}

#[async_trait]
impl ConceptRepository for MemoryConceptRepository {
    async fn list_for_project(&self, project_id: i64) -> Result<Vec<BrandConcept>, RepositoryError> {
        let state = self.0.state.read().await;
        Ok(state
            .concepts
            .values()
            .rev()
            .filter(|c| c.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<BrandConcept, RepositoryError> {
        let state = self.0.state.read().await;
        state
            .concepts
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("concept {id}")))
    }

    async fn insert(&self, concept: &NewBrandConcept) -> Result<BrandConcept, RepositoryError> {
        let mut state = self.0.state.write().await;
        if !state.projects.contains_key(&concept.project_id) {
            return Err(RepositoryError::Constraint(format!(
                "project {} does not exist",
                concept.project_id
            )));
        }
        if concept.is_active {
            for sibling in state.concepts.values_mut() {
                if sibling.project_id == concept.project_id {
                    sibling.is_active = false;
                }
            }
        }
        let id = MemoryState::next_id(&mut state.next_concept_id);
        let created = BrandConcept {
            id,
            project_id: concept.project_id,
            name: concept.name.clone(),
            created_at: Utc::now(),
            brand_inputs: concept.brand_inputs.clone(),
            brand_output: concept.brand_output.clone(),
            is_active: concept.is_active,
        };
        state.concepts.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, concept: &BrandConcept) -> Result<(), RepositoryError> {
        let mut state = self.0.state.write().await;
        let existing = state
            .concepts
            .get_mut(&concept.id)
            .ok_or_else(|| RepositoryError::NotFound(format!("concept {}", concept.id)))?;
        existing.name.clone_from(&concept.name);
        existing.brand_inputs = concept.brand_inputs.clone();
        existing.brand_output = concept.brand_output.clone();
        existing.is_active = concept.is_active;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut state = self.0.state.write().await;
        state
            .concepts
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("concept {id}")))
    }

    async fn set_active(&self, id: i64, project_id: i64) -> Result<BrandConcept, RepositoryError> {
        let mut state = self.0.state.write().await;
        if !state
            .concepts
            .get(&id)
            .is_some_and(|c| c.project_id == project_id)
        {
            return Err(RepositoryError::NotFound(format!(
                "concept {id} in project {project_id}"
            )));
        }

        let mut activated = None;
        for concept in state.concepts.values_mut() {
            if concept.project_id == project_id {
                concept.is_active = concept.id == id;
                if concept.is_active {
                    activated = Some(concept.clone());
                }
            }
        }
        activated.ok_or_else(|| RepositoryError::NotFound(format!("concept {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindtoeye_core::services::seed::{sample_inputs, sample_output};

    async fn user(repos: &Repos, name: &str) -> User {
        repos
            .users
            .insert(&UserRecord {
                username: name.to_string(),
                password_hash: "x$y".to_string(),
                auth_id: None,
            })
            .await
            .unwrap()
    }

    async fn project(repos: &Repos, user_id: i64, name: &str) -> Project {
        repos
            .projects
            .insert(&NewProject {
                name: name.to_string(),
                client_name: None,
                user_id,
            })
            .await
            .unwrap()
    }

    fn concept(project_id: i64, is_active: bool) -> NewBrandConcept {
        NewBrandConcept {
            project_id,
            name: "Concept".to_string(),
            brand_inputs: sample_inputs(),
            brand_output: sample_output(),
            is_active,
        }
    }

    #[tokio::test]
    async fn test_usernames_unique_ignoring_case() {
        let repos = MemoryStore::new().repos();
        user(&repos, "Alice").await;
        let dup = repos
            .users
            .insert(&UserRecord {
                username: "alice".to_string(),
                password_hash: String::new(),
                auth_id: None,
            })
            .await;
        assert!(matches!(dup, Err(RepositoryError::AlreadyExists(_))));
        assert_eq!(repos.users.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_projects_newest_first_and_scoped() {
        let repos = MemoryStore::new().repos();
        let a = user(&repos, "alice").await;
        let b = user(&repos, "bob").await;
        project(&repos, a.id, "One").await;
        project(&repos, b.id, "Other").await;
        project(&repos, a.id, "Two").await;

        let names: Vec<_> = repos
            .projects
            .list_for_user(a.id)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Two", "One"]);
    }

    #[tokio::test]
    async fn test_delete_project_cascades() {
        let repos = MemoryStore::new().repos();
        let owner = user(&repos, "alice").await;
        let p = project(&repos, owner.id, "Doomed").await;
        let c = repos.concepts.insert(&concept(p.id, true)).await.unwrap();

        repos.projects.delete(p.id).await.unwrap();
        assert!(repos.concepts.get_by_id(c.id).await.is_err());
    }

    #[tokio::test]
    async fn test_concept_requires_project() {
        let repos = MemoryStore::new().repos();
        let result = repos.concepts.insert(&concept(42, false)).await;
        assert!(matches!(result, Err(RepositoryError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_single_active_concept() {
        let repos = MemoryStore::new().repos();
        let owner = user(&repos, "alice").await;
        let p = project(&repos, owner.id, "Brand").await;
        let first = repos.concepts.insert(&concept(p.id, true)).await.unwrap();
        let second = repos.concepts.insert(&concept(p.id, true)).await.unwrap();
        assert!(!repos.concepts.get_by_id(first.id).await.unwrap().is_active);

        let active = repos.concepts.set_active(first.id, p.id).await.unwrap();
        assert!(active.is_active);
        assert!(!repos.concepts.get_by_id(second.id).await.unwrap().is_active);

        assert!(repos.concepts.set_active(first.id, p.id + 1).await.is_err());
    }
}
