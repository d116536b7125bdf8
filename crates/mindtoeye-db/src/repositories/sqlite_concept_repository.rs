//! `SQLite` implementation of the brand concept repository.
//!
//! `brand_inputs` and `brand_output` are stored as JSON text columns.
//! At most one concept per project has `is_active = 1`; inserts and
//! `set_active` maintain that inside a transaction.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use mindtoeye_core::ports::{ConceptRepository, RepositoryError};
use mindtoeye_core::{BrandConcept, NewBrandConcept};

use super::row_mappers::{format_datetime, from_json, map_sqlx_error, parse_datetime, to_json};

const SELECT_COLUMNS: &str =
    "SELECT id, project_id, name, brand_inputs, brand_output, is_active, created_at FROM brand_concepts";

pub struct SqliteConceptRepository {
    pool: SqlitePool,
}

impl SqliteConceptRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ConceptRow {
    id: i64,
    project_id: i64,
    name: String,
    brand_inputs: String,
    brand_output: String,
    is_active: bool,
    created_at: String,
}

impl TryFrom<ConceptRow> for BrandConcept {
    type Error = RepositoryError;

    fn try_from(row: ConceptRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            project_id: row.project_id,
            name: row.name,
            created_at: parse_datetime(&row.created_at),
            brand_inputs: from_json("brand_inputs", &row.brand_inputs)?,
            brand_output: from_json("brand_output", &row.brand_output)?,
            is_active: row.is_active,
        })
    }
}

#[async_trait]
impl ConceptRepository for SqliteConceptRepository {
    async fn list_for_project(&self, project_id: i64) -> Result<Vec<BrandConcept>, RepositoryError> {
        let rows: Vec<ConceptRow> = sqlx::query_as(&format!(
            "{SELECT_COLUMNS} WHERE project_id = ? ORDER BY created_at DESC, id DESC"
        ))
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(BrandConcept::try_from).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<BrandConcept, RepositoryError> {
        sqlx::query_as::<_, ConceptRow>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("concept {id}")))?
            .try_into()
    }

    async fn insert(&self, concept: &NewBrandConcept) -> Result<BrandConcept, RepositoryError> {
        let inputs = to_json(&concept.brand_inputs)?;
        let output = to_json(&concept.brand_output)?;
        let created_at = Utc::now();

        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        if concept.is_active {
            sqlx::query("UPDATE brand_concepts SET is_active = 0 WHERE project_id = ?")
                .bind(concept.project_id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;
        }

        let result = sqlx::query(
            "INSERT INTO brand_concepts
                (project_id, name, brand_inputs, brand_output, is_active, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(concept.project_id)
        .bind(&concept.name)
        .bind(&inputs)
        .bind(&output)
        .bind(concept.is_active)
        .bind(format_datetime(&created_at))
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(BrandConcept {
            id: result.last_insert_rowid(),
            project_id: concept.project_id,
            name: concept.name.clone(),
            created_at,
            brand_inputs: concept.brand_inputs.clone(),
            brand_output: concept.brand_output.clone(),
            is_active: concept.is_active,
        })
    }

    async fn update(&self, concept: &BrandConcept) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE brand_concepts
             SET name = ?, brand_inputs = ?, brand_output = ?, is_active = ?
             WHERE id = ?",
        )
        .bind(&concept.name)
        .bind(to_json(&concept.brand_inputs)?)
        .bind(to_json(&concept.brand_output)?)
        .bind(concept.is_active)
        .bind(concept.id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("concept {}", concept.id)));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM brand_concepts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("concept {id}")));
        }
        Ok(())
    }

    async fn set_active(&self, id: i64, project_id: i64) -> Result<BrandConcept, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let updated = sqlx::query(
            "UPDATE brand_concepts SET is_active = 1 WHERE id = ? AND project_id = ?",
        )
        .bind(id)
        .bind(project_id)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        if updated.rows_affected() == 0 {
            tx.rollback().await.map_err(map_sqlx_error)?;
            return Err(RepositoryError::NotFound(format!(
                "concept {id} in project {project_id}"
            )));
        }

        sqlx::query("UPDATE brand_concepts SET is_active = 0 WHERE project_id = ? AND id != ?")
            .bind(project_id)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        // Read after commit; the test pool holds a single connection.
        self.get_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{SqliteProjectRepository, SqliteUserRepository};
    use crate::setup::setup_test_database;
    use mindtoeye_core::ports::{ProjectRepository, UserRecord, UserRepository};
    use mindtoeye_core::services::seed::{sample_inputs, sample_output};
    use mindtoeye_core::NewProject;

    async fn setup() -> (SqliteConceptRepository, i64) {
        let pool = setup_test_database().await.unwrap();
        let user = SqliteUserRepository::new(pool.clone())
            .insert(&UserRecord {
                username: "owner".to_string(),
                password_hash: "x$y".to_string(),
                auth_id: None,
            })
            .await
            .unwrap();
        let project = SqliteProjectRepository::new(pool.clone())
            .insert(&NewProject {
                name: "Solystra".to_string(),
                client_name: None,
                user_id: user.id,
            })
            .await
            .unwrap();
        (SqliteConceptRepository::new(pool), project.id)
    }

    fn concept(project_id: i64, name: &str, is_active: bool) -> NewBrandConcept {
        NewBrandConcept {
            project_id,
            name: name.to_string(),
            brand_inputs: sample_inputs(),
            brand_output: sample_output(),
            is_active,
        }
    }

    #[tokio::test]
    async fn test_json_columns_roundtrip() {
        let (repo, project_id) = setup().await;
        let created = repo.insert(&concept(project_id, "Initial", false)).await.unwrap();
        let loaded = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(loaded.brand_inputs, sample_inputs());
        assert_eq!(loaded.brand_output, sample_output());
    }

    #[tokio::test]
    async fn test_active_insert_deactivates_siblings() {
        let (repo, project_id) = setup().await;
        let first = repo.insert(&concept(project_id, "A", true)).await.unwrap();
        let second = repo.insert(&concept(project_id, "B", true)).await.unwrap();

        assert!(!repo.get_by_id(first.id).await.unwrap().is_active);
        assert!(repo.get_by_id(second.id).await.unwrap().is_active);
    }

    #[tokio::test]
    async fn test_set_active_is_exclusive() {
        let (repo, project_id) = setup().await;
        let a = repo.insert(&concept(project_id, "A", true)).await.unwrap();
        let b = repo.insert(&concept(project_id, "B", false)).await.unwrap();

        let activated = repo.set_active(b.id, project_id).await.unwrap();
        assert!(activated.is_active);

        let active: Vec<_> = repo
            .list_for_project(project_id)
            .await
            .unwrap()
            .into_iter()
            .filter(|c| c.is_active)
            .map(|c| c.id)
            .collect();
        assert_eq!(active, vec![b.id]);
        assert!(!repo.get_by_id(a.id).await.unwrap().is_active);
    }

    #[tokio::test]
    async fn test_set_active_wrong_project() {
        let (repo, project_id) = setup().await;
        let a = repo.insert(&concept(project_id, "A", true)).await.unwrap();
        assert!(matches!(
            repo.set_active(a.id, project_id + 1).await,
            Err(RepositoryError::NotFound(_))
        ));
        assert!(repo.get_by_id(a.id).await.unwrap().is_active);
    }

    #[tokio::test]
    async fn test_insert_for_missing_project() {
        let (repo, project_id) = setup().await;
        let result = repo.insert(&concept(project_id + 5, "Lost", false)).await;
        assert!(matches!(result, Err(RepositoryError::Constraint(_))));
    }
}
