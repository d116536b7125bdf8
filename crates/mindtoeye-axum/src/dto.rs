//! Request and response bodies that exist only at the HTTP boundary.

use mindtoeye_core::{BrandOutput, LogoSet};
use serde::{Deserialize, Serialize};

/// `{"success": true}` acknowledgement for deletes.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub const OK: Self = Self { success: true };
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Query string of `POST /api/generate-concept`.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateQuery {
    #[serde(default)]
    pub stream: Option<String>,
}

impl GenerateQuery {
    /// Streaming is opt-in with `?stream=true`.
    pub fn wants_stream(&self) -> bool {
        self.stream
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("true"))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateRequest {
    pub concept_id: i64,
    pub element_type: String,
}

#[derive(Debug, Serialize)]
pub struct LogoResponse {
    pub logo: LogoSet,
}

/// Result of a diagnostic call against the text model.
#[derive(Debug, Serialize)]
pub struct TextProbeResponse {
    pub success: bool,
    pub model: Option<String>,
    pub result: BrandOutput,
}

/// Result of a diagnostic call against the image model.
#[derive(Debug, Serialize)]
pub struct ImageProbeResponse {
    pub success: bool,
    pub model: Option<String>,
    pub output: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ServiceFlags {
    pub anthropic: bool,
    pub replicate: bool,
}

#[derive(Debug, Serialize)]
pub struct ModelNames {
    pub text: Option<String>,
    pub image: Option<String>,
}

/// Body of `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub services: ServiceFlags,
    pub models: ModelNames,
    pub storage: &'static str,
}
