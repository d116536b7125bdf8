//! Internal error types for provider calls.
//!
//! These errors are internal to `mindtoeye-ai` and are mapped to
//! `AiPortError` at the port boundary.

use thiserror::Error;

pub type AiResult<T> = Result<T, AiError>;

#[derive(Debug, Error)]
pub enum AiError {
    /// No API key or token was supplied.
    #[error("Missing API credentials")]
    MissingCredentials,

    /// Request failed with a non-success status.
    #[error("API request failed with status {status}: {url}")]
    ApiRequestFailed {
        status: u16,
        url: String,
        /// Start of the response body, for logs.
        body: String,
    },

    /// Client settings that cannot be used, such as a malformed model reference.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// The provider returned 429.
    #[error("Rate limited by {url}")]
    RateLimited { url: String },

    /// The response parsed but did not have the expected shape.
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// A Replicate prediction ended in `failed` or `canceled`.
    #[error("Prediction {id} {status}: {message}")]
    PredictionFailed {
        id: String,
        status: String,
        message: String,
    },

    /// A Replicate prediction was still running after the poll budget.
    #[error("Prediction {id} did not finish after {polls} polls")]
    PollTimeout { id: String, polls: u32 },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
