//! CLI-specific error types and mappings.
//!
//! Maps core errors to exit codes and user-facing messages.

use mindtoeye_core::{AiPortError, ConfigError, CoreError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Invalid input.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage error.
    #[error("Database error: {0}")]
    Database(String),

    /// An AI provider failed or is not configured.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The HTTP server failed to start or crashed.
    #[error("Server error: {0}")]
    Server(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,  // EX_USAGE
            Self::Io(_) => 74,        // EX_IOERR
            Self::Config(_) => 78,    // EX_CONFIG
            Self::Database(_) => 73,  // EX_CANTCREAT (closest fit)
            Self::Provider(_) => 69,  // EX_UNAVAILABLE
            Self::Server(_) => 71,    // EX_OSERR
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => Self::Database(repo_err.to_string()),
            CoreError::Ai(AiPortError::NotConfigured { provider }) => Self::Config(format!(
                "{provider} is not configured (set ANTHROPIC_API_KEY / REPLICATE_API_TOKEN)"
            )),
            CoreError::Ai(ai_err) => Self::Provider(ai_err.to_string()),
            CoreError::Generation(msg) => Self::Provider(msg),
            CoreError::Validation(msg) => Self::Arguments(msg),
            CoreError::Configuration(msg) => Self::Config(msg),
            CoreError::NotFound(what) => Self::Core(format!("{what} not found")),
            CoreError::Internal(msg) => Self::Core(msg),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Arguments(format!("invalid JSON: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Arguments("x".into()).exit_code(), 2);
        assert_eq!(CliError::Config("x".into()).exit_code(), 78);
        assert_eq!(CliError::Provider("x".into()).exit_code(), 69);
    }

    #[test]
    fn test_not_configured_is_config_error() {
        let err: CliError = CoreError::Ai(AiPortError::not_configured("Anthropic")).into();
        assert!(matches!(err, CliError::Config(ref m) if m.contains("Anthropic")));
        assert_eq!(err.exit_code(), 78);

        let err: CliError = CoreError::Validation("brandName is required".into()).into();
        assert_eq!(err.exit_code(), 2);
    }
}
