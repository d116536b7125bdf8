//! Minimal in-process repositories for service unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{BrandConcept, NewBrandConcept, NewProject, Project, User};
use crate::ports::{
    ConceptRepository, ProjectRepository, Repos, RepositoryError, UserRecord, UserRepository,
};

#[derive(Default)]
struct State {
    users: Vec<User>,
    projects: Vec<Project>,
    concepts: Vec<BrandConcept>,
    next_id: i64,
}

impl State {
    fn id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone, Default)]
pub struct FakeStore(Arc<Mutex<State>>);

pub fn repos() -> Repos {
    let store = FakeStore::default();
    Repos::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store),
        "fake",
    )
}

fn missing(what: &str, id: i64) -> RepositoryError {
    RepositoryError::NotFound(format!("{what} {id}"))
}

#[async_trait]
impl UserRepository for FakeStore {
    async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        let s = self.0.lock().unwrap();
        s.users.iter().find(|u| u.id == id).cloned().ok_or_else(|| missing("user", id))
    }

    async fn get_by_username(&self, username: &str) -> Result<User, RepositoryError> {
        let s = self.0.lock().unwrap();
        s.users
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(username.to_string()))
    }

    async fn get_by_auth_id(&self, auth_id: &str) -> Result<User, RepositoryError> {
        let s = self.0.lock().unwrap();
        s.users
            .iter()
            .find(|u| u.auth_id.as_deref() == Some(auth_id))
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(auth_id.to_string()))
    }

    async fn insert(&self, user: &UserRecord) -> Result<User, RepositoryError> {
        let mut s = self.0.lock().unwrap();
        if s.users.iter().any(|u| u.username.eq_ignore_ascii_case(&user.username)) {
            return Err(RepositoryError::AlreadyExists(user.username.clone()));
        }
        if user.auth_id.is_some() && s.users.iter().any(|u| u.auth_id == user.auth_id) {
            return Err(RepositoryError::AlreadyExists(format!("auth id {:?}", user.auth_id)));
        }
        let created = User {
            id: s.id(),
            username: user.username.clone(),
            auth_id: user.auth_id.clone(),
            password_hash: user.password_hash.clone(),
            created_at: Utc::now(),
        };
        s.users.push(created.clone());
        Ok(created)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.0.lock().unwrap().users.len() as u64)
    }
}

#[async_trait]
impl ProjectRepository for FakeStore {
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Project>, RepositoryError> {
        let s = self.0.lock().unwrap();
        Ok(s.projects.iter().filter(|p| p.user_id == user_id).rev().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Project, RepositoryError> {
        let s = self.0.lock().unwrap();
        s.projects.iter().find(|p| p.id == id).cloned().ok_or_else(|| missing("project", id))
    }

    async fn insert(&self, project: &NewProject) -> Result<Project, RepositoryError> {
        let mut s = self.0.lock().unwrap();
        let created = Project {
            id: s.id(),
            name: project.name.clone(),
            client_name: project.client_name.clone(),
            user_id: project.user_id,
            created_at: Utc::now(),
        };
        s.projects.push(created.clone());
        Ok(created)
    }

    async fn update(&self, project: &Project) -> Result<(), RepositoryError> {
        let mut s = self.0.lock().unwrap();
        let slot = s
            .projects
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or_else(|| missing("project", project.id))?;
        *slot = project.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut s = self.0.lock().unwrap();
        let before = s.projects.len();
        s.projects.retain(|p| p.id != id);
        if s.projects.len() == before {
            return Err(missing("project", id));
        }
        s.concepts.retain(|c| c.project_id != id);
        Ok(())
    }
}

#[async_trait]
impl ConceptRepository for FakeStore {
    async fn list_for_project(&self, project_id: i64) -> Result<Vec<BrandConcept>, RepositoryError> {
        let s = self.0.lock().unwrap();
        Ok(s.concepts.iter().filter(|c| c.project_id == project_id).rev().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<BrandConcept, RepositoryError> {
        let s = self.0.lock().unwrap();
        s.concepts.iter().find(|c| c.id == id).cloned().ok_or_else(|| missing("concept", id))
    }

    async fn insert(&self, concept: &NewBrandConcept) -> Result<BrandConcept, RepositoryError> {
        let mut s = self.0.lock().unwrap();
        if !s.projects.iter().any(|p| p.id == concept.project_id) {
            return Err(RepositoryError::Constraint("unknown project".to_string()));
        }
        if concept.is_active {
            for c in s.concepts.iter_mut().filter(|c| c.project_id == concept.project_id) {
                c.is_active = false;
            }
        }
        let created = BrandConcept {
            id: s.id(),
            project_id: concept.project_id,
            name: concept.name.clone(),
            created_at: Utc::now(),
            brand_inputs: concept.brand_inputs.clone(),
            brand_output: concept.brand_output.clone(),
            is_active: concept.is_active,
        };
        s.concepts.push(created.clone());
        Ok(created)
    }

    async fn update(&self, concept: &BrandConcept) -> Result<(), RepositoryError> {
        let mut s = self.0.lock().unwrap();
        let slot = s
            .concepts
            .iter_mut()
            .find(|c| c.id == concept.id)
            .ok_or_else(|| missing("concept", concept.id))?;
        *slot = concept.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut s = self.0.lock().unwrap();
        let before = s.concepts.len();
        s.concepts.retain(|c| c.id != id);
        if s.concepts.len() == before {
            return Err(missing("concept", id));
        }
        Ok(())
    }

    async fn set_active(&self, id: i64, project_id: i64) -> Result<BrandConcept, RepositoryError> {
        let mut s = self.0.lock().unwrap();
        if !s.concepts.iter().any(|c| c.id == id && c.project_id == project_id) {
            return Err(missing("concept", id));
        }
        for c in s.concepts.iter_mut().filter(|c| c.project_id == project_id) {
            c.is_active = c.id == id;
        }
        s.concepts.iter().find(|c| c.id == id).cloned().ok_or_else(|| missing("concept", id))
    }
}
