//! CLI entry point - the composition root.

use clap::Parser;

use mindtoeye_cli::{Cli, logging, run};
use mindtoeye_core::AppConfig;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load .env before reading configuration; a missing file is fine
    match &cli.env_file {
        Some(path) => {
            if let Err(e) = dotenvy::from_path(path) {
                eprintln!("Error: cannot read {}: {e}", path.display());
                std::process::exit(78);
            }
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(78);
        }
    };

    logging::init(&cli.effective_log_level(&config.log_level));

    if let Err(e) = run(cli, config).await {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
