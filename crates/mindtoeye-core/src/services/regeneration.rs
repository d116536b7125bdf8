//! Regeneration service - replaces one element of a stored concept.
//!
//! The flow is: load the concept (ownership checked), ask the generator for
//! a fresh element, turn it into an output patch, merge and persist, and
//! return the stored result.

use std::sync::Arc;

use crate::domain::{BrandConcept, BrandConceptUpdate, ElementKind};
use crate::ports::CoreError;

use super::{BrandGenerator, ConceptService};

pub struct RegenerationService {
    concepts: Arc<ConceptService>,
    generator: Arc<BrandGenerator>,
}

impl RegenerationService {
    pub fn new(concepts: Arc<ConceptService>, generator: Arc<BrandGenerator>) -> Self {
        Self {
            concepts,
            generator,
        }
    }

    pub async fn regenerate(
        &self,
        user_id: i64,
        concept_id: i64,
        kind: ElementKind,
    ) -> Result<BrandConcept, CoreError> {
        self.generator.ensure_available(kind)?;
        let concept = self.concepts.get(user_id, concept_id).await?;
        let element = self.generator.regenerate(&concept, kind).await?;
        let updated = self
            .concepts
            .update(
                user_id,
                concept_id,
                BrandConceptUpdate::output(element.into_patch()),
            )
            .await?;
        tracing::info!(concept_id, element = %kind, "Regenerated element");
        Ok(updated)
    }
}
