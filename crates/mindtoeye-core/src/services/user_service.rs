//! User service - registration, lookup and external-identity provisioning.

use std::sync::Arc;

use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::{NewUser, User};
use crate::ports::{CoreError, RepositoryError, UserRecord, UserRepository};
use crate::validation::{USERNAME_MAX, validate_new_user};

/// Service for user accounts.
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Register a new account.
    ///
    /// Fails with `RepositoryError::AlreadyExists` when the username is taken.
    pub async fn register(&self, user: NewUser) -> Result<User, CoreError> {
        validate_new_user(&user)?;
        let username = user.username.trim().to_string();
        let record = UserRecord {
            password_hash: hash_password(&user.password),
            username,
            auth_id: user.auth_id,
        };
        let created = self.repo.insert(&record).await?;
        tracing::info!(user_id = created.id, username = %created.username, "Registered user");
        Ok(created)
    }

    pub async fn get(&self, id: i64) -> Result<User, CoreError> {
        match self.repo.get_by_id(id).await {
            Ok(user) => Ok(user),
            Err(RepositoryError::NotFound(_)) => Err(CoreError::NotFound("User".to_string())),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn count(&self) -> Result<u64, CoreError> {
        Ok(self.repo.count().await?)
    }

    /// Find the user linked to an external auth id, creating one on first sight.
    pub async fn resolve_auth_id(&self, auth_id: &str) -> Result<User, CoreError> {
        let auth_id = auth_id.trim();
        if auth_id.is_empty() {
            return Err(CoreError::Validation("auth id must not be empty".to_string()));
        }
        match self.repo.get_by_auth_id(auth_id).await {
            Ok(user) => return Ok(user),
            Err(RepositoryError::NotFound(_)) => {}
            Err(e) => return Err(e.into()),
        }

        let base = username_for_auth_id(auth_id);
        for attempt in 0..5u32 {
            let username = if attempt == 0 {
                base.clone()
            } else {
                format!("{base}_{attempt}")
            };
            let record = UserRecord {
                username,
                // Not usable for password login.
                password_hash: hash_password(&Uuid::new_v4().to_string()),
                auth_id: Some(auth_id.to_string()),
            };
            match self.repo.insert(&record).await {
                Ok(user) => {
                    tracing::info!(user_id = user.id, "Provisioned user for external identity");
                    return Ok(user);
                }
                Err(RepositoryError::AlreadyExists(_)) => {
                    // A concurrent request may have provisioned this auth id first.
                    match self.repo.get_by_auth_id(auth_id).await {
                        Ok(user) => return Ok(user),
                        Err(RepositoryError::NotFound(_)) => {}
                        Err(e) => return Err(e.into()),
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }
        Err(CoreError::Internal(format!(
            "could not allocate a username for auth id {auth_id}"
        )))
    }

    /// Check a username/password pair.
    pub async fn verify_password(&self, username: &str, password: &str) -> Result<User, CoreError> {
        let rejected = || CoreError::Validation("invalid username or password".to_string());
        let user = match self.repo.get_by_username(username).await {
            Ok(user) => user,
            Err(RepositoryError::NotFound(_)) => return Err(rejected()),
            Err(e) => return Err(e.into()),
        };
        if verify_hash(password, &user.password_hash) {
            Ok(user)
        } else {
            Err(rejected())
        }
    }
}

/// `salt$hex(sha256(salt + password))`.
pub fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    format!("{salt}${}", digest(&salt, password))
}

fn verify_hash(password: &str, stored: &str) -> bool {
    stored
        .split_once('$')
        .is_some_and(|(salt, hash)| digest(salt, password) == hash)
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

fn username_for_auth_id(auth_id: &str) -> String {
    let cleaned: String = auth_id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .take(USERNAME_MAX - 10)
        .collect();
    if cleaned.is_empty() {
        format!("user_{}", &Uuid::new_v4().simple().to_string()[..8])
    } else {
        format!("user_{cleaned}")
    }
}
