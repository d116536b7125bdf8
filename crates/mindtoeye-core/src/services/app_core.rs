//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (CLI, HTTP)
//! receive an `AppCore` instance and use it to access all functionality.

use std::sync::Arc;

use crate::ports::{ImageGeneratorPort, Repos, TextGeneratorPort};

use super::{BrandGenerator, ConceptService, ProjectService, RegenerationService, UserService};

/// The core application facade.
///
/// ```ignore
/// let repos = CoreFactory::build_memory_repos();
/// let core = AppCore::new(repos, Some(anthropic), Some(replicate));
///
/// let projects = core.projects().list(user_id).await?;
/// ```
pub struct AppCore {
    repos: Repos,
    users: UserService,
    projects: ProjectService,
    concepts: Arc<ConceptService>,
    generator: Arc<BrandGenerator>,
    regeneration: RegenerationService,
}

impl AppCore {
    /// Create a new `AppCore`. Either AI port may be absent; the operations
    /// that need it then fail with `AiPortError::NotConfigured`.
    pub fn new(
        repos: Repos,
        text: Option<Arc<dyn TextGeneratorPort>>,
        image: Option<Arc<dyn ImageGeneratorPort>>,
    ) -> Self {
        let concepts = Arc::new(ConceptService::new(
            repos.concepts.clone(),
            repos.projects.clone(),
        ));
        let generator = Arc::new(BrandGenerator::new(text, image));
        Self {
            users: UserService::new(repos.users.clone()),
            projects: ProjectService::new(repos.projects.clone()),
            regeneration: RegenerationService::new(concepts.clone(), generator.clone()),
            concepts,
            generator,
            repos,
        }
    }

    pub const fn users(&self) -> &UserService {
        &self.users
    }

    pub const fn projects(&self) -> &ProjectService {
        &self.projects
    }

    pub fn concepts(&self) -> &ConceptService {
        &self.concepts
    }

    pub fn generator(&self) -> &BrandGenerator {
        &self.generator
    }

    pub const fn regeneration(&self) -> &RegenerationService {
        &self.regeneration
    }

    /// Underlying repositories, for seeding and diagnostics.
    pub const fn repos(&self) -> &Repos {
        &self.repos
    }

    /// Label of the storage backend in use.
    pub const fn storage_backend(&self) -> &'static str {
        self.repos.backend
    }
}
