//! Request authentication.
//!
//! Two independent layers:
//!
//! - [`validate_bearer`]: optional shared API token on `/api` routes
//! - [`CurrentUser`]: which account a request acts for

use std::sync::Arc;

use axum::extract::{FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::Response;
use mindtoeye_core::User;
use serde::Deserialize;

use crate::error::HttpError;
use crate::state::AppState;

/// Header carrying an external auth provider's user id.
pub const AUTH_ID_HEADER: &str = "x-auth-id";

/// Account used when a request names no user.
pub const DEFAULT_USER_ID: i64 = 1;

/// Auth middleware: validate Bearer token.
///
/// `expected` is the full `Bearer <token>` value. Returns 401 with
/// `WWW-Authenticate: Bearer` on failure.
pub async fn validate_bearer(
    expected: Arc<str>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match auth {
        Some(h) if h == expected.as_ref() => Ok(next.run(req).await),
        _ => {
            tracing::warn!(
                path = %req.uri().path(),
                "Unauthorized API request - missing or invalid token"
            );
            let mut res = Response::new(axum::body::Body::empty());
            *res.status_mut() = StatusCode::UNAUTHORIZED;
            res.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Bearer"),
            );
            Ok(res)
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserQuery {
    user_id: Option<i64>,
}

/// The account a request acts for.
///
/// Resolved from the `x-auth-id` header (provisioning the account on first
/// sight), else the `userId` query parameter, else [`DEFAULT_USER_ID`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    pub const fn id(&self) -> i64 {
        self.0.id
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let users = state.core.users();

        if let Some(auth_id) = parts
            .headers
            .get(AUTH_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            return Ok(Self(users.resolve_auth_id(auth_id).await?));
        }

        let Query(query) = Query::<UserQuery>::try_from_uri(&parts.uri)?;
        let user_id = query.user_id.unwrap_or(DEFAULT_USER_ID);

        match users.get(user_id).await {
            Ok(user) => Ok(Self(user)),
            Err(e) if e.is_not_found() => Err(HttpError::Unauthorized(format!(
                "user {user_id} does not exist; register via POST /api/users or send {AUTH_ID_HEADER}"
            ))),
            Err(e) => Err(e.into()),
        }
    }
}
