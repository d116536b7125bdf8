//! `SQLite` implementation of the user repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use mindtoeye_core::User;
use mindtoeye_core::ports::{RepositoryError, UserRecord, UserRepository};

use super::row_mappers::{format_datetime, map_sqlx_error, parse_datetime};

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(&self, clause: &str, value: &str) -> Result<User, RepositoryError> {
        let sql = format!(
            "SELECT id, username, password_hash, auth_id, created_at FROM users WHERE {clause}"
        );
        sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .map(User::from)
            .ok_or_else(|| RepositoryError::NotFound(format!("user {value}")))
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    auth_id: Option<String>,
    created_at: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            auth_id: row.auth_id,
            password_hash: row.password_hash,
            created_at: parse_datetime(&row.created_at),
        }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError> {
        sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash, auth_id, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .map(User::from)
        .ok_or_else(|| RepositoryError::NotFound(format!("user {id}")))
    }

    async fn get_by_username(&self, username: &str) -> Result<User, RepositoryError> {
        // The column is COLLATE NOCASE.
        self.fetch_one_where("username = ?", username).await
    }

    async fn get_by_auth_id(&self, auth_id: &str) -> Result<User, RepositoryError> {
        self.fetch_one_where("auth_id = ?", auth_id).await
    }

    async fn insert(&self, user: &UserRecord) -> Result<User, RepositoryError> {
        let created_at = Utc::now();
        let result = sqlx::query(
            "INSERT INTO users (username, password_hash, auth_id, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.auth_id)
        .bind(format_datetime(&created_at))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(User {
            id: result.last_insert_rowid(),
            username: user.username.clone(),
            auth_id: user.auth_id.clone(),
            password_hash: user.password_hash.clone(),
            created_at,
        })
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    fn record(username: &str) -> UserRecord {
        UserRecord {
            username: username.to_string(),
            password_hash: "salt$hash".to_string(),
            auth_id: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let repo = SqliteUserRepository::new(setup_test_database().await.unwrap());
        let user = repo.insert(&record("testuser")).await.unwrap();

        assert_eq!(repo.get_by_id(user.id).await.unwrap().username, "testuser");
        assert_eq!(repo.get_by_username("TESTUSER").await.unwrap().id, user.id);
        assert_eq!(repo.count().await.unwrap(), 1);
        assert!(matches!(
            repo.get_by_id(99).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let repo = SqliteUserRepository::new(setup_test_database().await.unwrap());
        repo.insert(&record("testuser")).await.unwrap();
        assert!(matches!(
            repo.insert(&record("TestUser")).await,
            Err(RepositoryError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_auth_id_lookup() {
        let repo = SqliteUserRepository::new(setup_test_database().await.unwrap());
        let mut rec = record("user_abc");
        rec.auth_id = Some("auth|abc".to_string());
        let user = repo.insert(&rec).await.unwrap();
        assert_eq!(repo.get_by_auth_id("auth|abc").await.unwrap().id, user.id);
        assert!(repo.get_by_auth_id("auth|zzz").await.is_err());
    }
}
