//! Brand concept handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use mindtoeye_core::{BrandConcept, BrandConceptUpdate, NewBrandConcept};

use crate::auth::CurrentUser;
use crate::dto::SuccessResponse;
use crate::error::{ApiJson, ApiPath, HttpError};
use crate::state::AppState;

/// List concepts of a project.
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiPath(project_id): ApiPath<i64>,
) -> Result<Json<Vec<BrandConcept>>, HttpError> {
    Ok(Json(state.core.concepts().list(user.id(), project_id).await?))
}

/// Save a concept under a project.
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiPath(project_id): ApiPath<i64>,
    ApiJson(req): ApiJson<NewBrandConcept>,
) -> Result<(StatusCode, Json<BrandConcept>), HttpError> {
    let concept = state
        .core
        .concepts()
        .create(user.id(), project_id, req)
        .await?;
    Ok((StatusCode::CREATED, Json(concept)))
}

pub async fn get(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<BrandConcept>, HttpError> {
    Ok(Json(state.core.concepts().get(user.id(), id).await?))
}

/// Update a concept; `brandOutput` is merged into the stored output.
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<BrandConceptUpdate>,
) -> Result<Json<BrandConcept>, HttpError> {
    Ok(Json(state.core.concepts().update(user.id(), id, req).await?))
}

pub async fn remove(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<SuccessResponse>, HttpError> {
    state.core.concepts().delete(user.id(), id).await?;
    Ok(Json(SuccessResponse::OK))
}

/// Make a concept the active one of its project.
pub async fn set_active(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<BrandConcept>, HttpError> {
    Ok(Json(state.core.concepts().set_active(user.id(), id).await?))
}
