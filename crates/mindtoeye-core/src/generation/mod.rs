//! Prompting the models and turning their answers into brand data.

pub mod json_repair;
pub mod logo;
pub mod prompts;

pub use json_repair::{JsonRecoveryError, parse_llm_json};
pub use logo::{monochrome_variant, placeholder_logo, reverse_variant};
pub use prompts::BrandBrief;
