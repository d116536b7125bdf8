//! Generation handlers - AI-backed endpoints and provider diagnostics.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use mindtoeye_core::services::seed::sample_inputs;
use mindtoeye_core::validation::validate_brand_inputs;
use mindtoeye_core::{BrandConcept, BrandInputs, ElementKind, LogoRequest};

use crate::auth::CurrentUser;
use crate::dto::{
    GenerateQuery, ImageProbeResponse, LogoResponse, RegenerateRequest, TextProbeResponse,
};
use crate::error::{ApiJson, HttpError};
use crate::state::AppState;
use crate::stream;

const PROBE_IMAGE_PROMPT: &str = "a photo of a cat";

/// Generate a brand identity from a brief.
///
/// With `?stream=true` the response is NDJSON progress (see [`crate::stream`]).
pub async fn generate_concept(
    State(state): State<AppState>,
    query: Result<Query<GenerateQuery>, QueryRejection>,
    ApiJson(inputs): ApiJson<BrandInputs>,
) -> Result<Response, HttpError> {
    let Query(query) = query?;

    if query.wants_stream() {
        validate_brand_inputs(&inputs)?;
        state.core.generator().ensure_text()?;
        tracing::debug!(brand = %inputs.brand_name, "Streaming concept generation");
        return Ok(stream::generation_response(state.core.clone(), inputs));
    }

    let output = state.core.generator().generate_concept(&inputs).await?;
    Ok(Json(output).into_response())
}

/// Generate a standalone logo.
pub async fn generate_logo(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LogoRequest>,
) -> Result<Json<LogoResponse>, HttpError> {
    let logo = state.core.generator().generate_logo(&req).await?;
    Ok(Json(LogoResponse { logo }))
}

/// Replace one element of a stored concept.
pub async fn regenerate_element(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(req): ApiJson<RegenerateRequest>,
) -> Result<Json<BrandConcept>, HttpError> {
    let kind = ElementKind::parse(&req.element_type).ok_or_else(|| {
        HttpError::BadRequest(format!(
            "unknown elementType '{}' (expected colors, typography, logo, tagline or applications)",
            req.element_type
        ))
    })?;
    let concept = state
        .core
        .regeneration()
        .regenerate(user.id(), req.concept_id, kind)
        .await?;
    Ok(Json(concept))
}

/// Run concept generation against the text model.
///
/// An empty body uses the demo brief.
pub async fn test_claude(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TextProbeResponse>, HttpError> {
    let inputs = if body.iter().all(u8::is_ascii_whitespace) {
        sample_inputs()
    } else {
        serde_json::from_slice::<BrandInputs>(&body)
            .map_err(|e| HttpError::BadRequest(format!("invalid brand inputs: {e}")))?
    };

    let generator = state.core.generator();
    let result = generator.generate_concept(&inputs).await?;
    Ok(Json(TextProbeResponse {
        success: true,
        model: generator.text_model(),
        result,
    }))
}

/// Run a fixed prompt through the image model.
pub async fn test_replicate(
    State(state): State<AppState>,
) -> Result<Json<ImageProbeResponse>, HttpError> {
    let generator = state.core.generator();
    let output = generator.probe_image(PROBE_IMAGE_PROMPT).await?;
    Ok(Json(ImageProbeResponse {
        success: true,
        model: generator.image_model(),
        output,
    }))
}

/// Logo generation through the image model, without the placeholder fallback.
pub async fn test_flux_logo(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LogoRequest>,
) -> Result<Json<LogoResponse>, HttpError> {
    let logo = state.core.generator().probe_logo(&req).await?;
    Ok(Json(LogoResponse { logo }))
}
