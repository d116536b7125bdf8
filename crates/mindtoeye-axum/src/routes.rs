//! Route definitions and router construction.
//!
//! Handlers delegate to the shared `AppCore` facade.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::extract::Request;
use axum::http::Uri;
use axum::middleware::{self, Next};
use axum::routing::{get, patch, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::auth::validate_bearer;
use crate::bootstrap::{AxumContext, CorsConfig, ServerConfig};
use crate::error::HttpError;
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// All API routes without the `/api` prefix (for nesting under /api).
///
/// `/health` is not included; it stays reachable without a token.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Users API
        .route("/users", post(handlers::users::register))
        .route("/users/me", get(handlers::users::me))
        .route("/users/login", post(handlers::users::login))
        // Projects API
        .route(
            "/projects",
            get(handlers::projects::list).post(handlers::projects::create),
        )
        .route(
            "/projects/{id}",
            get(handlers::projects::get)
                .patch(handlers::projects::update)
                .delete(handlers::projects::remove),
        )
        .route(
            "/projects/{id}/concepts",
            get(handlers::concepts::list).post(handlers::concepts::create),
        )
        // Concepts API
        .route(
            "/concepts/{id}",
            get(handlers::concepts::get)
                .patch(handlers::concepts::update)
                .delete(handlers::concepts::remove),
        )
        .route("/concepts/{id}/set-active", patch(handlers::concepts::set_active))
        // Generation API
        .route(
            "/generate-concept",
            post(handlers::generation::generate_concept),
        )
        .route("/generate-logo", post(handlers::generation::generate_logo))
        .route(
            "/regenerate-element",
            post(handlers::generation::regenerate_element),
        )
        // Diagnostics
        .route("/test-claude", post(handlers::generation::test_claude))
        .route("/test-replicate", get(handlers::generation::test_replicate))
        .route("/test-flux-logo", post(handlers::generation::test_flux_logo))
}

/// Create the main Axum router with all API routes.
///
/// For serving static assets, use [`create_spa_router`] which includes both
/// API routes and static file serving with SPA fallback.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, config: &ServerConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(&config.cors);

    let mut api = api_routes();
    if let Some(token) = &config.api_token {
        let expected: Arc<str> = Arc::from(format!("Bearer {token}"));
        api = api.route_layer(middleware::from_fn(move |req: Request, next: Next| {
            let expected = expected.clone();
            async move { validate_bearer(expected, req, next).await }
        }));
    }

    // Registered after the auth layer so it stays open.
    let api = api
        .route("/health", get(handlers::health::status))
        .fallback(api_not_found);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api.with_state(state).layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// Create a router with API routes and static asset serving.
///
/// 1. Serves API routes under `/api/*` and `/health`
/// 2. Serves static assets from `static_dir` for matching files
/// 3. Falls back to `index.html` for client-side routing (SPA mode)
///
/// ```ignore
/// let router = create_spa_router(ctx, "./dist/public", &ServerConfig::default());
/// ```
pub fn create_spa_router<P: AsRef<Path>>(
    ctx: AxumContext,
    static_dir: P,
    config: &ServerConfig,
) -> Router {
    let static_path = static_dir.as_ref();
    let index_path = static_path.join("index.html");

    // Missing files fall back to index.html
    let serve_dir = ServeDir::new(static_path).fallback(ServeFile::new(&index_path));

    // API routes take priority; unknown API paths hit the API fallback
    create_router(ctx, config).fallback_service(serve_dir)
}

/// Unknown `/api` paths get a JSON 404 instead of the SPA fallback.
async fn api_not_found(uri: Uri) -> HttpError {
    HttpError::NotFound(format!("no API route for {}", uri.path()))
}

/// Liveness probe.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
