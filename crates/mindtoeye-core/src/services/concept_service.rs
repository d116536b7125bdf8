//! Concept service - brand concept CRUD scoped to the owning user.

use std::sync::Arc;

use crate::domain::{BrandConcept, BrandConceptUpdate, NewBrandConcept, Project};
use crate::ports::{ConceptRepository, CoreError, ProjectRepository, RepositoryError};
use crate::validation::{validate_brand_inputs, validate_concept_name};

/// Service for brand concepts.
///
/// Ownership is checked through the parent project.
pub struct ConceptService {
    concepts: Arc<dyn ConceptRepository>,
    projects: Arc<dyn ProjectRepository>,
}

impl ConceptService {
    pub fn new(concepts: Arc<dyn ConceptRepository>, projects: Arc<dyn ProjectRepository>) -> Self {
        Self { concepts, projects }
    }

    async fn owned_project(&self, user_id: i64, project_id: i64) -> Result<Project, CoreError> {
        match self.projects.get_by_id(project_id).await {
            Ok(project) if project.user_id == user_id => Ok(project),
            Ok(_) | Err(RepositoryError::NotFound(_)) => {
                Err(CoreError::NotFound("Project".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn list(&self, user_id: i64, project_id: i64) -> Result<Vec<BrandConcept>, CoreError> {
        self.owned_project(user_id, project_id).await?;
        Ok(self.concepts.list_for_project(project_id).await?)
    }

    pub async fn get(&self, user_id: i64, id: i64) -> Result<BrandConcept, CoreError> {
        let concept = match self.concepts.get_by_id(id).await {
            Ok(concept) => concept,
            Err(RepositoryError::NotFound(_)) => {
                return Err(CoreError::NotFound("Brand concept".to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        self.owned_project(user_id, concept.project_id)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    CoreError::NotFound("Brand concept".to_string())
                } else {
                    e
                }
            })?;
        Ok(concept)
    }

    /// Create a concept. An active concept deactivates its siblings.
    pub async fn create(
        &self,
        user_id: i64,
        project_id: i64,
        mut concept: NewBrandConcept,
    ) -> Result<BrandConcept, CoreError> {
        validate_concept_name(&concept.name)?;
        validate_brand_inputs(&concept.brand_inputs)?;
        self.owned_project(user_id, project_id).await?;
        concept.project_id = project_id;
        let created = self.concepts.insert(&concept).await?;
        tracing::info!(
            concept_id = created.id,
            project_id,
            active = created.is_active,
            "Created brand concept"
        );
        Ok(created)
    }

    /// Apply a partial update; `brandOutput` keys are merged into the stored output.
    pub async fn update(
        &self,
        user_id: i64,
        id: i64,
        update: BrandConceptUpdate,
    ) -> Result<BrandConcept, CoreError> {
        if let Some(name) = &update.name {
            validate_concept_name(name)?;
        }
        if let Some(inputs) = &update.brand_inputs {
            validate_brand_inputs(inputs)?;
        }
        let mut concept = self.get(user_id, id).await?;
        update.apply(&mut concept);
        self.concepts.update(&concept).await?;

        if update.is_active == Some(true) && !concept.is_active {
            return Ok(self.concepts.set_active(id, concept.project_id).await?);
        }
        Ok(concept)
    }

    pub async fn set_active(&self, user_id: i64, id: i64) -> Result<BrandConcept, CoreError> {
        let concept = self.get(user_id, id).await?;
        let updated = self.concepts.set_active(id, concept.project_id).await?;
        tracing::debug!(concept_id = id, project_id = concept.project_id, "Activated concept");
        Ok(updated)
    }

    pub async fn delete(&self, user_id: i64, id: i64) -> Result<(), CoreError> {
        self.get(user_id, id).await?;
        self.concepts.delete(id).await?;
        Ok(())
    }
}
