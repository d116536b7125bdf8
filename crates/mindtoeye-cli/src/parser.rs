//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Brand identity generator: REST server and one-off generation.
#[derive(Parser, Debug)]
#[command(name = "mindtoeye")]
#[command(about = "Generate brand identities with Claude and FLUX")]
#[command(version)]
pub struct Cli {
    /// Log level (overrides LOG_LEVEL; RUST_LOG still wins)
    #[arg(long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Read environment variables from this file instead of `.env`
    #[arg(long = "env-file", global = true)]
    pub env_file: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The log level to use given the configured default.
    pub fn effective_log_level(&self, configured: &str) -> String {
        if self.verbose {
            "debug".to_string()
        } else {
            self.log_level
                .clone()
                .unwrap_or_else(|| configured.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["mindtoeye", "config", "--verbose"]);
        assert!(cli.verbose);
        assert_eq!(cli.effective_log_level("warn"), "debug");

        let cli = Cli::parse_from(["mindtoeye", "--log-level", "trace", "config"]);
        assert_eq!(cli.effective_log_level("warn"), "trace");

        let cli = Cli::parse_from(["mindtoeye", "config"]);
        assert_eq!(cli.effective_log_level("warn"), "warn");
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["mindtoeye"]).is_err());
    }
}
