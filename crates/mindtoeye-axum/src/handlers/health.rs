//! Health handler - reports configured services.

use axum::Json;
use axum::extract::State;

use crate::dto::{HealthResponse, ModelNames, ServiceFlags};
use crate::state::AppState;

/// Service status for the frontend and load balancers.
pub async fn status(State(state): State<AppState>) -> Json<HealthResponse> {
    let generator = state.core.generator();
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        services: ServiceFlags {
            anthropic: generator.has_text(),
            replicate: generator.has_image(),
        },
        models: ModelNames {
            text: generator.text_model(),
            image: generator.image_model(),
        },
        storage: state.core.storage_backend(),
    })
}
