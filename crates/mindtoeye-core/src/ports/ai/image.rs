//! Image generation port.

use async_trait::async_trait;

use super::error::AiPortResult;

/// Parameters for a text-to-image call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub prompt: String,
    /// e.g. `1:1`, `16:9`.
    pub aspect_ratio: String,
    pub num_outputs: u8,
    /// `png`, `webp`, `jpg`.
    pub output_format: String,
}

impl ImageRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            aspect_ratio: "1:1".to_string(),
            num_outputs: 1,
            output_format: "png".to_string(),
        }
    }

    #[must_use]
    pub fn with_aspect_ratio(mut self, ratio: impl Into<String>) -> Self {
        self.aspect_ratio = ratio.into();
        self
    }
}

/// Port for image generation.
///
/// Returns the produced assets: URLs, data URIs, or inline SVG markup,
/// depending on the model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageGeneratorPort: Send + Sync {
    async fn generate(&self, request: &ImageRequest) -> AiPortResult<Vec<String>>;

    fn model_name(&self) -> String;
}
