//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter: storage backend, AI provider clients and the core
//! facade are all instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use mindtoeye_ai::AiProviders;
use mindtoeye_core::AppConfig;
use mindtoeye_core::services::{AppCore, seed_demo_data};
use mindtoeye_db::CoreFactory;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

impl CorsConfig {
    /// `*` anywhere in the list means any origin.
    pub fn from_origins(origins: &[String]) -> Self {
        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            Self::AllowAll
        } else {
            Self::AllowOrigins(origins.to_vec())
        }
    }
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Optional path to static assets for SPA serving.
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Bearer token required on `/api` routes (except `/api/health`).
    pub api_token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: mindtoeye_core::config::DEFAULT_HOST.to_string(),
            port: mindtoeye_core::config::DEFAULT_PORT,
            static_dir: None,
            cors: CorsConfig::default(),
            api_token: None,
        }
    }
}

impl ServerConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            static_dir: config.static_dir.clone(),
            cors: CorsConfig::from_origins(&config.cors_origins),
            api_token: config.api_token.clone(),
        }
    }

    /// Set the static directory for SPA serving.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Require `Authorization: Bearer {token}` on the API.
    #[must_use]
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

impl AxumContext {
    pub fn new(core: AppCore) -> Self {
        Self {
            core: Arc::new(core),
        }
    }
}

/// Bootstrap all services from configuration.
pub async fn bootstrap(config: &AppConfig) -> Result<AxumContext> {
    for warning in config.warnings() {
        tracing::warn!("{warning}");
    }

    // 1. Storage
    let repos = CoreFactory::open(config.storage, config.database_path.as_deref()).await?;

    // 2. AI providers (either may be absent)
    let providers = AiProviders::from_config(config)?;

    // 3. Core facade
    let core = AppCore::new(repos, providers.text, providers.image);

    // 4. Demo data for fresh development stores
    if config.seed_demo_data {
        if seed_demo_data(core.repos()).await? {
            tracing::info!("Demo user '{}' created", mindtoeye_core::services::seed::DEMO_USERNAME);
        }
    }

    tracing::info!(
        target: "mindtoeye.bootstrap",
        environment = ?config.environment,
        storage = core.storage_backend(),
        text_model = ?core.generator().text_model(),
        image_model = ?core.generator().image_model(),
        "Axum bootstrap complete"
    );

    Ok(AxumContext::new(core))
}

/// Start the web server and run until Ctrl-C.
///
/// If `static_dir` is configured, serves static assets with SPA fallback.
/// Otherwise, serves only the API endpoints.
pub async fn start_server(config: AppConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let server = ServerConfig::from_app_config(&config);
    let ctx = bootstrap(&config).await?;

    let app = if let Some(ref static_dir) = server.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
        crate::routes::create_spa_router(ctx, static_dir, &server)
    } else {
        crate::routes::create_router(ctx, &server)
    };

    let addr = server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    if server.static_dir.is_some() {
        info!("MindToEye server (with UI) listening on http://{}", addr);
    } else {
        info!("MindToEye server (API only) listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_from_origins() {
        assert_eq!(CorsConfig::from_origins(&["*".to_string()]), CorsConfig::AllowAll);
        assert_eq!(CorsConfig::from_origins(&[]), CorsConfig::AllowAll);
        assert_eq!(
            CorsConfig::from_origins(&["http://a.test".to_string()]),
            CorsConfig::AllowOrigins(vec!["http://a.test".to_string()])
        );
    }

    #[test]
    fn test_server_config_from_app_config() {
        let app = AppConfig {
            port: 8080,
            api_token: Some("t".to_string()),
            cors_origins: vec!["http://ui.test".to_string()],
            ..AppConfig::default()
        };
        let server = ServerConfig::from_app_config(&app);
        assert_eq!(server.bind_address(), "0.0.0.0:8080");
        assert_eq!(server.api_token.as_deref(), Some("t"));
        assert!(matches!(server.cors, CorsConfig::AllowOrigins(_)));
    }

    #[tokio::test]
    async fn test_bootstrap_memory_seeds_demo_user() {
        let ctx = bootstrap(&AppConfig::default()).await.unwrap();
        assert_eq!(ctx.core.storage_backend(), "memory");
        assert!(!ctx.core.generator().has_text());
        assert_eq!(ctx.core.users().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_bootstrap_sqlite_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            storage: mindtoeye_core::StorageBackend::Sqlite,
            database_path: Some(dir.path().join("brand.db")),
            seed_demo_data: false,
            ..AppConfig::default()
        };
        let ctx = bootstrap(&config).await.unwrap();
        assert_eq!(ctx.core.storage_backend(), "sqlite");
        assert_eq!(ctx.core.users().count().await.unwrap(), 0);
    }
}
