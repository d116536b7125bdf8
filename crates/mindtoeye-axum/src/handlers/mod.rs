//! HTTP handlers, one module per resource.

pub mod concepts;
pub mod generation;
pub mod health;
pub mod projects;
pub mod users;
