//! Subcommand definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use mindtoeye_core::{AppConfig, StorageBackend};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the REST API (and the built frontend, if configured)
    Serve(ServeArgs),

    /// Generate one brand concept and print it as JSON
    Generate(GenerateArgs),

    /// Print the effective configuration with secrets redacted
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageArg {
    Memory,
    Sqlite,
}

impl From<StorageArg> for StorageBackend {
    fn from(arg: StorageArg) -> Self {
        match arg {
            StorageArg::Memory => Self::Memory,
            StorageArg::Sqlite => Self::Sqlite,
        }
    }
}

/// Flags for `serve`. Unset flags keep the environment's value.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory with the built frontend (e.g. ./dist/public)
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Serve API endpoints only, even if STATIC_DIR is set
    #[arg(long)]
    pub api_only: bool,

    /// Storage backend
    #[arg(long, value_enum)]
    pub storage: Option<StorageArg>,

    /// SQLite database file (implies --storage sqlite)
    #[arg(long)]
    pub database_path: Option<PathBuf>,

    /// Require this bearer token on /api routes
    #[arg(long)]
    pub api_token: Option<String>,

    /// Do not create the demo user and project
    #[arg(long)]
    pub no_seed: bool,
}

impl ServeArgs {
    /// Overlay these flags on a configuration.
    pub fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dir) = self.static_dir {
            config.static_dir = Some(dir);
        }
        if self.api_only {
            config.static_dir = None;
        }
        if let Some(path) = self.database_path {
            config.database_path = Some(path);
            config.storage = StorageBackend::Sqlite;
        }
        if let Some(storage) = self.storage {
            config.storage = storage.into();
        }
        if let Some(token) = self.api_token {
            config.api_token = Some(token);
        }
        if self.no_seed {
            config.seed_demo_data = false;
        }
        config
    }
}

/// Flags for `generate`.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Brand name
    #[arg(long, required_unless_present = "input")]
    pub brand_name: Option<String>,

    #[arg(long, default_value = "")]
    pub industry: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Core values, comma separated
    #[arg(long, value_delimiter = ',')]
    pub values: Vec<String>,

    /// modern, classic, minimalist or bold
    #[arg(long, default_value = "modern")]
    pub style: String,

    /// Color preferences, comma separated
    #[arg(long, value_delimiter = ',')]
    pub colors: Vec<String>,

    /// Read the brief from a JSON file instead (same shape as the API body)
    #[arg(long, conflicts_with = "brand_name")]
    pub input: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
