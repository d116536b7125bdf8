//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete implementations.

mod app_core;
mod brand_generator;
mod concept_service;
mod project_service;
mod regeneration;
pub mod seed;
#[cfg(test)]
mod test_support;
mod user_service;

pub use app_core::AppCore;
pub use brand_generator::{
    BrandGenerator, GenerationProgress, IMAGE_PROVIDER, LogoRequest, TEXT_PROVIDER,
};
pub use concept_service::ConceptService;
pub use project_service::ProjectService;
pub use regeneration::RegenerationService;
pub use seed::seed_demo_data;
pub use user_service::{UserService, hash_password};
