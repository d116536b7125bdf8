//! Port trait implementations for the provider clients.
//!
//! Converts internal `AiError` values into the core-owned `AiPortError`.

use async_trait::async_trait;
use mindtoeye_core::ports::{
    AiPortError, AiPortResult, ImageGeneratorPort, ImageRequest, TextGeneratorPort, TextRequest,
};

use crate::anthropic::AnthropicClient;
use crate::error::AiError;
use crate::http::HttpBackend;
use crate::replicate::ReplicateClient;

pub(crate) const ANTHROPIC: &str = "Anthropic";
pub(crate) const REPLICATE: &str = "Replicate";

/// Convert internal `AiError` to core `AiPortError`.
fn map_error(err: AiError, provider: &str) -> AiPortError {
    match err {
        AiError::MissingCredentials | AiError::InvalidConfig { .. } => {
            AiPortError::not_configured(provider)
        }
        AiError::ApiRequestFailed { status, body, .. } => match status {
            401 | 403 => AiPortError::Unauthorized {
                provider: provider.to_string(),
            },
            429 => AiPortError::RateLimited,
            _ => AiPortError::Upstream {
                status,
                message: body,
            },
        },
        AiError::RateLimited { .. } => AiPortError::RateLimited,
        AiError::InvalidResponse { message } => AiPortError::InvalidResponse { message },
        AiError::PredictionFailed { id, status, message } => AiPortError::Upstream {
            status: 502,
            message: format!("prediction {id} {status}: {message}"),
        },
        AiError::PollTimeout { .. } => AiPortError::Timeout {
            message: err.to_string(),
        },
        AiError::Network(e) if e.is_timeout() => AiPortError::Timeout {
            message: e.to_string(),
        },
        AiError::Network(e) => AiPortError::Network {
            message: e.to_string(),
        },
        AiError::InvalidUrl(e) => AiPortError::Network {
            message: format!("invalid URL: {e}"),
        },
        AiError::JsonParse(e) => AiPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

#[async_trait]
impl<B: HttpBackend> TextGeneratorPort for AnthropicClient<B> {
    async fn complete(&self, request: &TextRequest) -> AiPortResult<String> {
        self.create_message(request).await.map_err(|e| {
            tracing::warn!(error = %e, "Anthropic request failed");
            map_error(e, ANTHROPIC)
        })
    }

    fn model_name(&self) -> String {
        self.config.model.clone()
    }
}

#[async_trait]
impl<B: HttpBackend> ImageGeneratorPort for ReplicateClient<B> {
    async fn generate(&self, request: &ImageRequest) -> AiPortResult<Vec<String>> {
        self.run(request).await.map_err(|e| {
            tracing::warn!(error = %e, "Replicate request failed");
            map_error(e, REPLICATE)
        })
    }

    fn model_name(&self) -> String {
        self.config.model.clone()
    }
}
