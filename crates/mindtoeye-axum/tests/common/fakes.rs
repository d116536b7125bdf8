//! In-process AI ports with canned replies.

use std::sync::Mutex;

use async_trait::async_trait;
use mindtoeye_core::ports::{
    AiPortError, AiPortResult, ImageGeneratorPort, ImageRequest, TextGeneratorPort, TextRequest,
};

pub const CONCEPT_REPLY: &str = r##"```json
{
  "logoDescription": "A rising sun over a roof line",
  "colors": [
    {"name": "Solar Blue", "hex": "#2563eb", "type": "primary"},
    {"name": "Energy Orange", "hex": "#F97316", "type": "secondary"},
    {"name": "Eco Green", "hex": "#10B981", "type": "accent"}
  ],
  "typography": {"headings": "Montserrat", "body": "Open Sans"},
  "tagline": "Sunlight, Simplified"
}
```"##;

pub const LOGO_URL: &str = "https://replicate.delivery/fake/logo.png";

/// Text port answering every prompt with the same reply (or error).
pub struct FakeText {
    reply: AiPortResult<String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeText {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: AiPortError) -> Self {
        Self {
            reply: Err(err),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGeneratorPort for FakeText {
    async fn complete(&self, request: &TextRequest) -> AiPortResult<String> {
        self.prompts.lock().unwrap().push(request.prompt.clone());
        self.reply.clone()
    }

    fn model_name(&self) -> String {
        "fake-claude".to_string()
    }
}

/// Image port returning the same output for every prompt.
pub struct FakeImage {
    reply: AiPortResult<Vec<String>>,
}

impl FakeImage {
    pub fn replying(url: &str) -> Self {
        Self {
            reply: Ok(vec![url.to_string()]),
        }
    }

    pub fn failing(err: AiPortError) -> Self {
        Self { reply: Err(err) }
    }
}

#[async_trait]
impl ImageGeneratorPort for FakeImage {
    async fn generate(&self, _request: &ImageRequest) -> AiPortResult<Vec<String>> {
        self.reply.clone()
    }

    fn model_name(&self) -> String {
        "fake-flux".to_string()
    }
}
