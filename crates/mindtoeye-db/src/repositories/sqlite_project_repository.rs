//! `SQLite` implementation of the project repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use mindtoeye_core::ports::{ProjectRepository, RepositoryError};
use mindtoeye_core::{NewProject, Project};

use super::row_mappers::{format_datetime, map_sqlx_error, parse_datetime};

pub struct SqliteProjectRepository {
    pool: SqlitePool,
}

impl SqliteProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: i64,
    name: String,
    client_name: Option<String>,
    user_id: i64,
    created_at: String,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            client_name: row.client_name,
            user_id: row.user_id,
            created_at: parse_datetime(&row.created_at),
        }
    }
}

#[async_trait]
impl ProjectRepository for SqliteProjectRepository {
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Project>, RepositoryError> {
        let rows: Vec<ProjectRow> = sqlx::query_as(
            "SELECT id, name, client_name, user_id, created_at FROM projects
             WHERE user_id = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Project, RepositoryError> {
        sqlx::query_as::<_, ProjectRow>(
            "SELECT id, name, client_name, user_id, created_at FROM projects WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .map(Project::from)
        .ok_or_else(|| RepositoryError::NotFound(format!("project {id}")))
    }

    async fn insert(&self, project: &NewProject) -> Result<Project, RepositoryError> {
        let created_at = Utc::now();
        let result = sqlx::query(
            "INSERT INTO projects (name, client_name, user_id, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&project.name)
        .bind(&project.client_name)
        .bind(project.user_id)
        .bind(format_datetime(&created_at))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Project {
            id: result.last_insert_rowid(),
            name: project.name.clone(),
            client_name: project.client_name.clone(),
            user_id: project.user_id,
            created_at,
        })
    }

    async fn update(&self, project: &Project) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE projects SET name = ?, client_name = ? WHERE id = ?")
            .bind(&project.name)
            .bind(&project.client_name)
            .bind(project.id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("project {}", project.id)));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("project {id}")));
        }
        Ok(())
    }
}
