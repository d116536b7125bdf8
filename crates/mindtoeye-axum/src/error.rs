//! Axum-specific error types and mappings.
//!
//! Every failure leaves the server as `{"error": message, "status": code}`.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mindtoeye_core::{AiPortError, CoreError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Too many requests: {0}")]
    TooManyRequests(String),

    /// An AI provider failed or answered with something unusable.
    #[error("Bad gateway: {0}")]
    BadGateway(String),

    /// A needed AI provider is not configured.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Gateway timeout: {0}")]
    GatewayTimeout(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message without the variant prefix, as sent to clients.
    pub fn into_message(self) -> String {
        match self {
            Self::NotFound(msg)
            | Self::BadRequest(msg)
            | Self::Unauthorized(msg)
            | Self::Conflict(msg)
            | Self::TooManyRequests(msg)
            | Self::BadGateway(msg)
            | Self::ServiceUnavailable(msg)
            | Self::GatewayTimeout(msg)
            | Self::Internal(msg) => msg,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorBody {
            error: self.into_message(),
            status: status.as_u16(),
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Ai(ai_err) => ai_err.into(),
            CoreError::Generation(msg) => Self::BadGateway(msg),
            CoreError::Validation(msg) => Self::BadRequest(msg),
            CoreError::NotFound(what) => Self::NotFound(format!("{what} not found")),
            CoreError::Configuration(msg) => Self::Internal(format!("Config: {msg}")),
            CoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(msg),
            RepositoryError::AlreadyExists(msg) => Self::Conflict(msg),
            RepositoryError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
            RepositoryError::Serialization(msg) => Self::Internal(format!("Serialization: {msg}")),
            RepositoryError::Constraint(msg) => Self::BadRequest(msg),
        }
    }
}

impl From<AiPortError> for HttpError {
    fn from(err: AiPortError) -> Self {
        let msg = err.to_string();
        match err {
            AiPortError::NotConfigured { .. } => Self::ServiceUnavailable(msg),
            AiPortError::RateLimited => Self::TooManyRequests(msg),
            AiPortError::Timeout { .. } => Self::GatewayTimeout(msg),
            AiPortError::Unauthorized { .. }
            | AiPortError::Network { .. }
            | AiPortError::InvalidResponse { .. }
            | AiPortError::Upstream { .. } => Self::BadGateway(msg),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// `Json` extractor whose rejections use the JSON error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct ApiJson<T>(pub T);

/// `Path` extractor whose rejections use the JSON error body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(HttpError))]
pub struct ApiPath<T>(pub T);
