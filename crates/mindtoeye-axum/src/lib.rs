//! Axum web server adapter for MindToEye.
//!
//! Exposes the REST API under `/api`, a plain `/health` probe, and
//! optionally the built single-page frontend with an `index.html` fallback.

#![deny(unsafe_code)]

// Silence unused dev-dependency warnings in unit test builds
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tower as _;

pub mod auth;
pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod stream;

// Re-export primary types
pub use auth::{AUTH_ID_HEADER, CurrentUser, DEFAULT_USER_ID};
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::{ApiJson, ApiPath, HttpError};
pub use routes::{create_router, create_spa_router};
pub use state::AppState;
