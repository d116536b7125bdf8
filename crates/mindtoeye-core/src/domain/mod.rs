//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, AI providers).
//!
//! # Structure
//!
//! - `user` - Account types (`User`, `NewUser`)
//! - `project` - Client projects (`Project`, `NewProject`, `ProjectUpdate`)
//! - `concept` - Brand concepts with their inputs and generated outputs
//! - `element` - Element kinds that can be regenerated individually

mod concept;
mod element;
mod project;
mod user;

pub use concept::{
    BrandColor, BrandConcept, BrandConceptUpdate, BrandInputs, BrandOutput, BrandOutputPatch,
    BrandValue, ColorRole, DesignStyle, LogoSet, Mockup, NewBrandConcept, Typography,
};
pub use element::{ElementKind, MockupKind, RegeneratedElement};
pub use project::{NewProject, Project, ProjectUpdate};
pub use user::{NewUser, User};
