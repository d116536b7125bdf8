//! Core domain types, port definitions and services for MindToEye.
//!
//! This crate is infrastructure-free: storage lives in `mindtoeye-db`,
//! provider clients in `mindtoeye-ai`, and the HTTP surface in
//! `mindtoeye-axum`. Everything meets through the traits in [`ports`].

pub mod config;
pub mod domain;
pub mod generation;
pub mod paths;
pub mod ports;
pub mod services;
pub mod validation;

pub use config::{AppConfig, ConfigError, Environment, StorageBackend};
pub use domain::*;
pub use ports::{
    AiPortError, ConceptRepository, CoreError, ImageGeneratorPort, ProjectRepository, Repos,
    RepositoryError, TextGeneratorPort, UserRepository,
};
pub use services::{AppCore, BrandGenerator, GenerationProgress, LogoRequest};
