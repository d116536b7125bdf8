//! Provider clients for MindToEye.
//!
//! [`DefaultAnthropicClient`] implements `TextGeneratorPort` over the Claude
//! Messages API and [`DefaultReplicateClient`] implements
//! `ImageGeneratorPort` over Replicate predictions. [`AiProviders::from_config`]
//! builds whichever of the two the configuration has credentials for.

#![deny(unsafe_code)]

mod anthropic;
mod config;
mod error;
mod http;
mod port;
mod replicate;

use std::sync::Arc;

use mindtoeye_core::AppConfig;
use mindtoeye_core::ports::{ImageGeneratorPort, TextGeneratorPort};

// ============================================================================
// Public API
// ============================================================================

pub use anthropic::{AnthropicClient, DefaultAnthropicClient};
pub use config::{ANTHROPIC_BASE_URL, AiClientConfig, REPLICATE_BASE_URL};
pub use error::{AiError, AiResult};
pub use http::{HttpBackend, ReqwestBackend};
pub use replicate::{DefaultReplicateClient, ModelRef, ReplicateClient};

/// The AI ports available to the application.
///
/// Either side is `None` when its credentials are missing; generation
/// endpoints then report the provider as not configured.
#[derive(Clone, Default)]
pub struct AiProviders {
    pub text: Option<Arc<dyn TextGeneratorPort>>,
    pub image: Option<Arc<dyn ImageGeneratorPort>>,
}

impl AiProviders {
    /// Build clients from the application configuration.
    pub fn from_config(config: &AppConfig) -> AiResult<Self> {
        let text: Option<Arc<dyn TextGeneratorPort>> = match &config.anthropic_api_key {
            Some(key) => {
                let client = DefaultAnthropicClient::new(
                    AiClientConfig::anthropic(key.clone()).with_model(&config.anthropic_model),
                )?;
                tracing::info!(model = %config.anthropic_model, "Anthropic client ready");
                Some(Arc::new(client))
            }
            None => {
                tracing::warn!("ANTHROPIC_API_KEY not set; text generation disabled");
                None
            }
        };

        let image: Option<Arc<dyn ImageGeneratorPort>> = match &config.replicate_api_token {
            Some(token) => {
                let client = DefaultReplicateClient::new(
                    AiClientConfig::replicate(token.clone()).with_model(&config.replicate_model),
                )?;
                tracing::info!(model = %config.replicate_model, "Replicate client ready");
                Some(Arc::new(client))
            }
            None => {
                tracing::warn!("REPLICATE_API_TOKEN not set; image generation disabled");
                None
            }
        };

        Ok(Self { text, image })
    }
}

impl std::fmt::Debug for AiProviders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiProviders")
            .field("text", &self.text.as_ref().map(|t| t.model_name()))
            .field("image", &self.image.as_ref().map(|i| i.model_name()))
            .finish()
    }
}
