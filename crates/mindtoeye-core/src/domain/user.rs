//! User domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account that owns projects.
///
/// The password hash never leaves the storage layer through serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Identifier issued by an external auth provider (sent as `x-auth-id`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_id: Option<String>,
    #[serde(skip)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new user.
///
/// `password` is plaintext here; `UserService` hashes it before it
/// reaches a repository.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub auth_id: Option<String>,
}
