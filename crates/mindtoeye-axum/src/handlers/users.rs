//! User handlers - registration and identity.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use mindtoeye_core::{NewUser, User};

use crate::auth::CurrentUser;
use crate::dto::LoginRequest;
use crate::error::{ApiJson, HttpError};
use crate::state::AppState;

/// Register a new account.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewUser>,
) -> Result<(StatusCode, Json<User>), HttpError> {
    let user = state.core.users().register(req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// The account the request acts for.
pub async fn me(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}

/// Check a username/password pair and return the account.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<User>, HttpError> {
    match state
        .core
        .users()
        .verify_password(&req.username, &req.password)
        .await
    {
        Ok(user) => Ok(Json(user)),
        Err(mindtoeye_core::CoreError::Validation(msg)) => Err(HttpError::Unauthorized(msg)),
        Err(e) => Err(e.into()),
    }
}
