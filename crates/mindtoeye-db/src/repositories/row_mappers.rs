//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDateTime, Utc};
use mindtoeye_core::RepositoryError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Timestamps are written as RFC 3339; rows created by `datetime('now')`
/// use the `SQLite` format instead.
pub fn parse_datetime(s: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.with_timezone(&Utc);
    }
    NaiveDateTime::parse_from_str(s.trim_end_matches(" UTC"), "%Y-%m-%d %H:%M:%S%.f")
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        .unwrap_or_else(|_| Utc::now())
}

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String, RepositoryError> {
    serde_json::to_string(value).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

pub fn from_json<T: DeserializeOwned>(column: &str, raw: &str) -> Result<T, RepositoryError> {
    serde_json::from_str(raw)
        .map_err(|e| RepositoryError::Serialization(format!("{column}: {e}")))
}

/// Map `sqlx` errors onto repository errors.
pub fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    let msg = e.to_string();
    if msg.contains("UNIQUE constraint failed") {
        return RepositoryError::AlreadyExists(msg);
    }
    if msg.contains("FOREIGN KEY constraint failed") {
        return RepositoryError::Constraint(msg);
    }
    RepositoryError::Storage(msg)
}
