//! `serve` - run the web server until Ctrl-C.

use mindtoeye_core::AppConfig;

use crate::error::CliError;

pub async fn execute(config: AppConfig) -> Result<(), CliError> {
    tracing::info!(
        address = %config.bind_address(),
        storage = %config.storage,
        "Starting MindToEye server"
    );
    mindtoeye_axum::start_server(config)
        .await
        .map_err(|e| CliError::Server(format!("{e:#}")))
}
