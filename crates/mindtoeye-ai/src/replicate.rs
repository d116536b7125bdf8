//! Replicate predictions client for FLUX image generation.
//!
//! Predictions are created with `Prefer: wait`, which usually returns a
//! finished prediction. Anything still running is polled until it reaches
//! a terminal status or the poll budget runs out.

use serde::Deserialize;
use serde_json::{Value, json};
use url::Url;

use mindtoeye_core::ports::ImageRequest;

use crate::config::AiClientConfig;
use crate::error::{AiError, AiResult};
use crate::http::{HttpBackend, ReqwestBackend};

pub type DefaultReplicateClient = ReplicateClient<ReqwestBackend>;

/// `owner/name` with an optional `:version` pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRef {
    pub owner: String,
    pub name: String,
    pub version: Option<String>,
}

impl ModelRef {
    pub fn parse(s: &str) -> Option<Self> {
        let (path, version) = match s.split_once(':') {
            Some((path, version)) if !version.is_empty() => (path, Some(version.to_string())),
            Some(_) => return None,
            None => (s, None),
        };
        let (owner, name) = path.split_once('/')?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some(Self {
            owner: owner.to_string(),
            name: name.to_string(),
            version,
        })
    }
}

#[derive(Debug, Deserialize)]
struct Prediction {
    id: String,
    status: String,
    #[serde(default)]
    output: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

impl Prediction {
    fn is_terminal(&self) -> bool {
        matches!(self.status.as_str(), "succeeded" | "failed" | "canceled")
    }
}

pub struct ReplicateClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: AiClientConfig,
    model: ModelRef,
    base: Url,
    api_token: String,
}

impl DefaultReplicateClient {
    pub fn new(config: AiClientConfig) -> AiResult<Self> {
        let backend = ReqwestBackend::new(&config)?;
        Self::with_backend(config, backend)
    }
}

impl<B: HttpBackend> ReplicateClient<B> {
    pub fn with_backend(config: AiClientConfig, backend: B) -> AiResult<Self> {
        let api_token = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(AiError::MissingCredentials)?;
        let model = ModelRef::parse(&config.model).ok_or_else(|| AiError::InvalidConfig {
            message: format!(
                "REPLICATE_MODEL must look like owner/name or owner/name:version, got {:?}",
                config.model
            ),
        })?;
        let base = Url::parse(&config.base_url)?;
        Ok(Self {
            backend,
            config,
            model,
            base,
            api_token,
        })
    }

    fn headers(&self, wait: bool) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Authorization", format!("Bearer {}", self.api_token))];
        if wait {
            headers.push(("Prefer", "wait".to_string()));
        }
        headers
    }

    /// Run the model and return the output URLs.
    pub async fn run(&self, request: &ImageRequest) -> AiResult<Vec<String>> {
        let input = json!({
            "prompt": request.prompt,
            "aspect_ratio": request.aspect_ratio,
            "num_outputs": request.num_outputs,
            "output_format": request.output_format,
        });

        let (url, body) = match &self.model.version {
            Some(version) => (
                self.base.join("/v1/predictions")?,
                json!({ "version": version, "input": input }),
            ),
            None => (
                self.base.join(&format!(
                    "/v1/models/{}/{}/predictions",
                    self.model.owner, self.model.name
                ))?,
                json!({ "input": input }),
            ),
        };

        tracing::debug!(model = %self.config.model, aspect_ratio = %request.aspect_ratio, "Creating Replicate prediction");
        let mut prediction: Prediction = self
            .backend
            .post_json(&url, &self.headers(true), &body)
            .await?;

        let mut polls = 0;
        while !prediction.is_terminal() {
            if polls >= self.config.max_polls {
                return Err(AiError::PollTimeout {
                    id: prediction.id,
                    polls,
                });
            }
            tokio::time::sleep(self.config.poll_interval).await;
            polls += 1;
            let poll_url = self.base.join(&format!("/v1/predictions/{}", prediction.id))?;
            prediction = self
                .backend
                .get_json(&poll_url, &self.headers(false))
                .await?;
        }

        tracing::debug!(id = %prediction.id, status = %prediction.status, polls, "Prediction finished");

        if prediction.status != "succeeded" {
            let message = match prediction.error {
                Some(Value::String(s)) => s,
                Some(other) => other.to_string(),
                None => "no error detail".to_string(),
            };
            return Err(AiError::PredictionFailed {
                id: prediction.id,
                status: prediction.status,
                message,
            });
        }

        let urls = normalize_output(prediction.output);
        if urls.is_empty() {
            return Err(AiError::InvalidResponse {
                message: format!("Prediction {} succeeded without output", prediction.id),
            });
        }
        Ok(urls)
    }
}

/// Flatten Replicate's output into a list of strings.
///
/// Models return a single URL, a list of URLs, or occasionally objects
/// carrying a `url` field.
fn normalize_output(output: Option<Value>) -> Vec<String> {
    fn collect(value: Value, out: &mut Vec<String>) {
        match value {
            Value::String(s) if !s.is_empty() => out.push(s),
            Value::Array(items) => {
                for item in items {
                    collect(item, out);
                }
            }
            Value::Object(mut map) => {
                if let Some(url) = map.remove("url") {
                    collect(url, out);
                }
            }
            _ => {}
        }
    }

    let mut out = Vec::new();
    if let Some(value) = output {
        collect(value, &mut out);
    }
    out
}
