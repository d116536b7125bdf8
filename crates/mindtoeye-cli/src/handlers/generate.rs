//! `generate` - one concept from a brief, printed as JSON.

use std::path::Path;

use mindtoeye_ai::AiProviders;
use mindtoeye_core::services::AppCore;
use mindtoeye_core::{AppConfig, BrandInputs, BrandValue, DesignStyle};
use mindtoeye_db::CoreFactory;

use crate::commands::GenerateArgs;
use crate::error::CliError;

pub async fn execute(config: &AppConfig, args: GenerateArgs) -> Result<(), CliError> {
    let output_path = args.output.clone();
    let inputs = match &args.input {
        Some(path) => read_brief(path)?,
        None => brief_from_args(args)?,
    };

    let providers = AiProviders::from_config(config).map_err(|e| CliError::Config(e.to_string()))?;
    // Nothing is persisted; storage only satisfies the core facade.
    let core = AppCore::new(
        CoreFactory::build_memory_repos(),
        providers.text,
        providers.image,
    );

    tracing::info!(brand = %inputs.brand_name, "Generating concept");
    let output = core.generator().generate_concept(&inputs).await?;
    let json = serde_json::to_string_pretty(&output)?;

    match output_path {
        Some(path) => {
            std::fs::write(&path, json)?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn read_brief(path: &Path) -> Result<BrandInputs, CliError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Build a brief from individual flags.
pub fn brief_from_args(args: GenerateArgs) -> Result<BrandInputs, CliError> {
    let style: DesignStyle = serde_json::from_value(serde_json::Value::String(
        args.style.trim().to_ascii_lowercase(),
    ))
    .map_err(|_| {
        CliError::Arguments(format!(
            "unknown style '{}' (expected modern, classic, minimalist or bold)",
            args.style
        ))
    })?;

    Ok(BrandInputs {
        brand_name: args.brand_name.unwrap_or_default(),
        industry: args.industry,
        description: args.description,
        values: args
            .values
            .into_iter()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .enumerate()
            .map(|(i, value)| BrandValue {
                id: (i + 1).to_string(),
                value,
            })
            .collect(),
        design_style: style,
        color_preferences: args.colors,
    })
}
