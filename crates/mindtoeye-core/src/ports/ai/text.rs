//! Text generation port.

use async_trait::async_trait;

use super::error::AiPortResult;

/// A single-turn completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRequest {
    pub prompt: String,
    pub system: Option<String>,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
}

impl TextRequest {
    pub fn new(prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            prompt: prompt.into(),
            system: None,
            max_tokens,
            temperature: None,
        }
    }

    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Port for LLM text completion.
///
/// Returns the raw text of the first content block. Callers are responsible
/// for extracting JSON from it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGeneratorPort: Send + Sync {
    async fn complete(&self, request: &TextRequest) -> AiPortResult<String>;

    /// Model identifier, for logging and health output.
    fn model_name(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn _assert_object_safe(_: Arc<dyn TextGeneratorPort>) {}

    #[test]
    fn test_builder() {
        let req = TextRequest::new("hello", 1000)
            .with_system("be brief")
            .with_temperature(0.7);
        assert_eq!(req.max_tokens, 1000);
        assert_eq!(req.system.as_deref(), Some("be brief"));
        assert_eq!(req.temperature, Some(0.7));
    }
}
