//! Project handlers - CRUD scoped to the current user.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use mindtoeye_core::{NewProject, Project, ProjectUpdate};

use crate::auth::CurrentUser;
use crate::dto::SuccessResponse;
use crate::error::{ApiJson, ApiPath, HttpError};
use crate::state::AppState;

/// List the caller's projects, newest first.
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<Project>>, HttpError> {
    Ok(Json(state.core.projects().list(user.id()).await?))
}

pub async fn get(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Project>, HttpError> {
    Ok(Json(state.core.projects().get(user.id(), id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(req): ApiJson<NewProject>,
) -> Result<(StatusCode, Json<Project>), HttpError> {
    let project = state.core.projects().create(user.id(), req).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<ProjectUpdate>,
) -> Result<Json<Project>, HttpError> {
    Ok(Json(state.core.projects().update(user.id(), id, req).await?))
}

/// Delete a project together with its concepts.
pub async fn remove(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<SuccessResponse>, HttpError> {
    state.core.projects().delete(user.id(), id).await?;
    Ok(Json(SuccessResponse::OK))
}
