//! Anthropic Messages API client.

use serde::{Deserialize, Serialize};
use url::Url;

use mindtoeye_core::ports::TextRequest;

use crate::config::AiClientConfig;
use crate::error::{AiError, AiResult};
use crate::http::{HttpBackend, ReqwestBackend};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MESSAGES_PATH: &str = "/v1/messages";

/// Anthropic client using the reqwest backend.
pub type DefaultAnthropicClient = AnthropicClient<ReqwestBackend>;

/// Client for Claude text completions.
///
/// Generic over the HTTP backend so tests can supply canned replies.
pub struct AnthropicClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: AiClientConfig,
    endpoint: Url,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

impl DefaultAnthropicClient {
    pub fn new(config: AiClientConfig) -> AiResult<Self> {
        let backend = ReqwestBackend::new(&config)?;
        Self::with_backend(config, backend)
    }
}

impl<B: HttpBackend> AnthropicClient<B> {
    /// Create a client over a custom backend.
    pub fn with_backend(config: AiClientConfig, backend: B) -> AiResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(AiError::MissingCredentials)?;
        let endpoint = Url::parse(&config.base_url)?.join(MESSAGES_PATH)?;
        Ok(Self {
            backend,
            config,
            endpoint,
            api_key,
        })
    }

    /// Send one user message and return the first text block of the reply.
    pub async fn create_message(&self, request: &TextRequest) -> AiResult<String> {
        let body = serde_json::to_value(MessagesRequest {
            model: &self.config.model,
            max_tokens: request.max_tokens,
            messages: [Message {
                role: "user",
                content: &request.prompt,
            }],
            system: request.system.as_deref(),
            temperature: request.temperature,
        })?;
        let headers = [
            ("x-api-key", self.api_key.clone()),
            ("anthropic-version", ANTHROPIC_VERSION.to_string()),
        ];

        tracing::debug!(
            model = %self.config.model,
            max_tokens = request.max_tokens,
            prompt_len = request.prompt.len(),
            "Calling Anthropic"
        );
        let response: MessagesResponse = self
            .backend
            .post_json(&self.endpoint, &headers, &body)
            .await?;

        if response.stop_reason.as_deref() == Some("max_tokens") {
            tracing::warn!(model = %self.config.model, "Claude reply hit max_tokens");
        }

        response
            .content
            .into_iter()
            .find_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .ok_or_else(|| AiError::InvalidResponse {
                message: "Claude reply has no text content".to_string(),
            })
    }
}
