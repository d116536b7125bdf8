//! User repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::User;

/// Record handed to a repository when creating a user.
///
/// Carries the already-hashed password; plaintext never reaches storage.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
    pub auth_id: Option<String>,
}

/// Repository for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns `Err(RepositoryError::NotFound)` if no user has this id.
    async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError>;

    /// Case-insensitive lookup by username.
    async fn get_by_username(&self, username: &str) -> Result<User, RepositoryError>;

    /// Lookup by external auth provider id.
    async fn get_by_auth_id(&self, auth_id: &str) -> Result<User, RepositoryError>;

    /// Returns `Err(RepositoryError::AlreadyExists)` when the username is taken.
    async fn insert(&self, user: &UserRecord) -> Result<User, RepositoryError>;

    async fn count(&self) -> Result<u64, RepositoryError>;
}
