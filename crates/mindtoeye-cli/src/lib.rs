//! Command-line interface for MindToEye.
//!
//! `main.rs` parses [`Cli`], loads `.env`, resolves [`AppConfig`] and
//! hands off to [`run`].
//!
//! [`AppConfig`]: mindtoeye_core::AppConfig

#![deny(unsafe_code)]

pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

pub use commands::{Commands, ServeArgs, StorageArg};
pub use error::CliError;
pub use parser::Cli;

use mindtoeye_core::AppConfig;

/// Dispatch a parsed command line against a resolved configuration.
pub async fn run(cli: Cli, config: AppConfig) -> Result<(), CliError> {
    match cli.command {
        Commands::Serve(args) => handlers::serve::execute(args.apply(config)).await,
        Commands::Generate(args) => handlers::generate::execute(&config, args).await,
        Commands::Config => handlers::config::execute(&config),
    }
}
