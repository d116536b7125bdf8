//! Error types for AI port operations.

use thiserror::Error;

/// Errors from AI provider ports.
///
/// Implementation-specific errors (HTTP, JSON) are mapped to these at the
/// adapter boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AiPortError {
    /// No credentials were configured for this provider.
    #[error("{provider} is not configured")]
    NotConfigured { provider: String },

    /// The provider rejected the credentials.
    #[error("{provider} rejected the credentials")]
    Unauthorized { provider: String },

    /// API rate limit exceeded.
    #[error("Rate limit exceeded, try again later")]
    RateLimited,

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The provider answered with something we could not use.
    #[error("Invalid API response: {message}")]
    InvalidResponse { message: String },

    /// The provider reported a failure of its own.
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// The request or prediction did not finish in time.
    #[error("Timed out: {message}")]
    Timeout { message: String },
}

impl AiPortError {
    pub fn not_configured(provider: impl Into<String>) -> Self {
        Self::NotConfigured {
            provider: provider.into(),
        }
    }
}

/// Result type alias for AI port operations.
pub type AiPortResult<T> = Result<T, AiPortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AiPortError::not_configured("Anthropic");
        assert_eq!(err.to_string(), "Anthropic is not configured");

        let err = AiPortError::Upstream {
            status: 502,
            message: "bad gateway".to_string(),
        };
        assert!(err.to_string().contains("502"));
    }
}
