//! `config` - print the effective configuration.

use mindtoeye_core::AppConfig;

use crate::error::CliError;

pub fn execute(config: &AppConfig) -> Result<(), CliError> {
    println!("{}", render(config)?);
    for warning in config.warnings() {
        eprintln!("warning: {warning}");
    }
    Ok(())
}

/// Pretty JSON with secrets redacted.
pub fn render(config: &AppConfig) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(&config.redacted())?)
}
