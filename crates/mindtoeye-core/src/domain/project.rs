//! Project domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client engagement grouping several brand concepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub client_name: Option<String>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub client_name: Option<String>,
    /// Filled in from the authenticated caller, never trusted from the body.
    #[serde(skip)]
    pub user_id: i64,
}

/// Partial update for a project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    #[serde(default)]
    pub name: Option<String>,
    /// Use `Some(Some(name))` to set, `Some(None)` to clear, `None` to leave unchanged.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub client_name: Option<Option<String>>,
}

impl ProjectUpdate {
    /// Returns true if applying this update would change nothing.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.client_name.is_none()
    }

    /// Apply this update to a project in place.
    pub fn apply(&self, project: &mut Project) {
        if let Some(name) = &self.name {
            project.name.clone_from(name);
        }
        if let Some(client_name) = &self.client_name {
            project.client_name.clone_from(client_name);
        }
    }
}

/// Distinguishes an explicit `null` from a missing field.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            id: 1,
            name: "Solystra".to_string(),
            client_name: Some("Sample Client".to_string()),
            user_id: 1,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_update_distinguishes_null_from_missing() {
        let clear: ProjectUpdate = serde_json::from_str(r#"{"clientName": null}"#).unwrap();
        assert_eq!(clear.client_name, Some(None));

        let untouched: ProjectUpdate = serde_json::from_str(r#"{"name": "New"}"#).unwrap();
        assert_eq!(untouched.client_name, None);
    }

    #[test]
    fn test_apply_update() {
        let mut p = project();
        let update = ProjectUpdate {
            name: Some("Renamed".to_string()),
            client_name: Some(None),
        };
        update.apply(&mut p);
        assert_eq!(p.name, "Renamed");
        assert_eq!(p.client_name, None);
    }

    #[test]
    fn test_project_serializes_camel_case() {
        let json = serde_json::to_value(project()).unwrap();
        assert_eq!(json["clientName"], "Sample Client");
        assert_eq!(json["userId"], 1);
        assert!(json.get("createdAt").is_some());
    }
}
