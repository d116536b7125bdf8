//! Application configuration resolved from environment variables.
//!
//! Adapters load `.env` first (via `dotenvy`) and then call
//! [`AppConfig::from_env`]. CLI flags override individual fields afterwards.

use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_SECRET_KEY: &str = "default-dev-key";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-7-sonnet-20250219";
pub const DEFAULT_REPLICATE_MODEL: &str = "black-forest-labs/flux-schnell";

const REDACTED: &str = "***";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has an invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(var: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            var,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Deployment profile, selected by `MINDTOEYE_ENV`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Testing,
    Production,
}

impl Environment {
    /// Log level used when `LOG_LEVEL` is unset.
    pub const fn default_log_level(self) -> &'static str {
        match self {
            Self::Development | Self::Testing => "debug",
            Self::Production => "warn",
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "testing" | "test" => Ok(Self::Testing),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

/// Where concepts are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Sqlite,
}

impl StorageBackend {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Sqlite => "sqlite",
        }
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "sqlite" | "sql" | "db" => Ok(Self::Sqlite),
            other => Err(format!("unknown storage backend '{other}' (expected memory or sqlite)")),
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub secret_key: String,
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: String,
    pub replicate_api_token: Option<String>,
    pub replicate_model: String,
    pub storage: StorageBackend,
    /// Explicit `SQLite` file; the data directory default applies when `None`.
    pub database_path: Option<PathBuf>,
    /// Built frontend to serve; API only when `None`.
    pub static_dir: Option<PathBuf>,
    /// Bearer token required on `/api` routes when set.
    pub api_token: Option<String>,
    /// `*` allows any origin.
    pub cors_origins: Vec<String>,
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let environment = Environment::default();
        Self {
            environment,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: environment.default_log_level().to_string(),
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            anthropic_api_key: None,
            anthropic_model: DEFAULT_ANTHROPIC_MODEL.to_string(),
            replicate_api_token: None,
            replicate_model: DEFAULT_REPLICATE_MODEL.to_string(),
            storage: StorageBackend::default(),
            database_path: None,
            static_dir: None,
            api_token: None,
            cors_origins: vec!["*".to_string()],
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let environment = match get("MINDTOEYE_ENV") {
            Some(raw) => raw
                .parse()
                .map_err(|e: String| ConfigError::invalid("MINDTOEYE_ENV", &raw, e))?,
            None => Environment::default(),
        };

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid("PORT", &raw, e.to_string()))?,
            None => DEFAULT_PORT,
        };

        let storage = match get("STORAGE_BACKEND") {
            Some(raw) => raw
                .parse()
                .map_err(|e: String| ConfigError::invalid("STORAGE_BACKEND", &raw, e))?,
            None => StorageBackend::default(),
        };

        let seed_demo_data = match get("SEED_DEMO_DATA") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| ConfigError::invalid("SEED_DEMO_DATA", &raw, "expected true or false"))?,
            None => environment != Environment::Production,
        };

        let cors_origins = get("CORS_ORIGINS").map_or_else(
            || vec!["*".to_string()],
            |raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(ToString::to_string)
                    .collect()
            },
        );

        Ok(Self {
            environment,
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            log_level: get("LOG_LEVEL")
                .map_or_else(|| environment.default_log_level().to_string(), |l| l.to_ascii_lowercase()),
            secret_key: get("SECRET_KEY").unwrap_or_else(|| DEFAULT_SECRET_KEY.to_string()),
            anthropic_api_key: get("ANTHROPIC_API_KEY"),
            anthropic_model: get("ANTHROPIC_MODEL")
                .unwrap_or_else(|| DEFAULT_ANTHROPIC_MODEL.to_string()),
            replicate_api_token: get("REPLICATE_API_TOKEN"),
            replicate_model: get("REPLICATE_MODEL")
                .unwrap_or_else(|| DEFAULT_REPLICATE_MODEL.to_string()),
            storage,
            database_path: get("DATABASE_PATH").map(PathBuf::from),
            static_dir: get("STATIC_DIR").map(PathBuf::from),
            api_token: get("API_TOKEN"),
            cors_origins,
            seed_demo_data,
        })
    }

    /// Problems worth logging at startup that don't prevent running.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.environment == Environment::Production && self.secret_key == DEFAULT_SECRET_KEY {
            warnings.push(
                "No SECRET_KEY set for production environment! Using insecure default.".to_string(),
            );
        }
        if self.environment == Environment::Production && self.allows_any_origin() {
            warnings.push("CORS allows any origin in production".to_string());
        }
        if self.anthropic_api_key.is_none() {
            warnings.push("ANTHROPIC_API_KEY not set; text generation disabled".to_string());
        }
        if self.replicate_api_token.is_none() {
            warnings.push("REPLICATE_API_TOKEN not set; image generation disabled".to_string());
        }
        warnings
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }

    /// `host:port` for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Copy safe to print: secrets replaced by a marker.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let hide = |v: &Option<String>| v.as_ref().map(|_| REDACTED.to_string());
        Self {
            secret_key: REDACTED.to_string(),
            anthropic_api_key: hide(&self.anthropic_api_key),
            replicate_api_token: hide(&self.replicate_api_token),
            api_token: hide(&self.api_token),
            ..self.clone()
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
