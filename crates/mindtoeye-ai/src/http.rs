//! HTTP backend abstraction for the provider APIs.
//!
//! Clients are generic over [`HttpBackend`] so tests can swap in canned
//! responses. The production implementation uses reqwest with exponential
//! backoff for transient errors.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::AiClientConfig;
use crate::error::{AiError, AiResult};

/// Extra request headers as `(name, value)` pairs.
pub type Headers = [(&'static str, String)];

/// Longest response body kept in error messages.
const ERROR_BODY_LIMIT: usize = 500;

/// Trait for HTTP backends that exchange JSON.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST a JSON body and deserialize the JSON response.
    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        headers: &Headers,
        body: &serde_json::Value,
    ) -> AiResult<T>;

    /// GET a URL and deserialize the JSON response.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url, headers: &Headers)
    -> AiResult<T>;
}

/// Production HTTP backend using reqwest with retry logic.
///
/// 5xx responses and network errors are retried with exponential backoff.
/// 429 surfaces immediately as [`AiError::RateLimited`].
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay: Duration,
}

impl ReqwestBackend {
    pub fn new(config: &AiClientConfig) -> AiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay: config.retry_base_delay,
        })
    }

    async fn send_with_retry<F>(&self, url: &Url, build: F) -> AiResult<reqwest::Response>
    where
        F: Fn() -> reqwest::RequestBuilder + Send + Sync,
    {
        let mut last_error: Option<AiError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.retry_base_delay * 2u32.pow(u32::from(attempt) - 1);
                tracing::debug!(%url, attempt, ?delay, "Retrying provider request");
                tokio::time::sleep(delay).await;
            }

            match build().send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    if status.as_u16() == 429 {
                        return Err(AiError::RateLimited {
                            url: url.to_string(),
                        });
                    }

                    let body = response.text().await.unwrap_or_default();
                    let error = AiError::ApiRequestFailed {
                        status: status.as_u16(),
                        url: url.to_string(),
                        body: truncate(&body, ERROR_BODY_LIMIT),
                    };

                    if status.is_server_error() && attempt < self.max_retries {
                        last_error = Some(error);
                        continue;
                    }
                    return Err(error);
                }
                Err(e) => {
                    if attempt < self.max_retries && !e.is_builder() {
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| AiError::InvalidResponse {
            message: "Unknown error during request".to_string(),
        }))
    }
}

fn apply_headers(mut request: reqwest::RequestBuilder, headers: &Headers) -> reqwest::RequestBuilder {
    for (name, value) in headers {
        request = request.header(*name, value);
    }
    request
}

fn truncate(s: &str, limit: usize) -> String {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        headers: &Headers,
        body: &serde_json::Value,
    ) -> AiResult<T> {
        let response = self
            .send_with_retry(url, || {
                apply_headers(self.client.post(url.as_str()), headers).json(body)
            })
            .await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        headers: &Headers,
    ) -> AiResult<T> {
        let response = self
            .send_with_retry(url, || apply_headers(self.client.get(url.as_str()), headers))
            .await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Canned response for the fake backend.
    #[derive(Clone, Debug)]
    pub struct CannedResponse {
        pub status: u16,
        pub json: serde_json::Value,
    }

    impl CannedResponse {
        pub const fn ok(json: serde_json::Value) -> Self {
            Self { status: 200, json }
        }

        pub fn status(status: u16) -> Self {
            Self {
                status,
                json: serde_json::Value::Null,
            }
        }
    }

    /// A request seen by the fake backend.
    #[derive(Clone, Debug)]
    pub struct RecordedRequest {
        pub method: &'static str,
        pub url: String,
        pub headers: Vec<(&'static str, String)>,
        pub body: Option<serde_json::Value>,
    }

    /// Returns queued responses per URL fragment; the last queued response
    /// for a fragment repeats.
    #[derive(Default)]
    pub struct FakeBackend {
        responses: Mutex<Vec<(String, VecDeque<CannedResponse>)>>,
        requests: Mutex<Vec<RecordedRequest>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_response(self, url_contains: &str, response: CannedResponse) -> Self {
            {
                let mut responses = self.responses.lock().unwrap();
                if let Some((_, queue)) = responses.iter_mut().find(|(p, _)| p == url_contains) {
                    queue.push_back(response);
                } else {
                    responses.push((url_contains.to_string(), VecDeque::from([response])));
                }
            }
            self
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }

        fn respond<T: DeserializeOwned>(&self, request: RecordedRequest) -> AiResult<T> {
            let url = request.url.clone();
            self.requests.lock().unwrap().push(request);

            let canned = {
                let mut responses = self.responses.lock().unwrap();
                responses
                    .iter_mut()
                    .find(|(pattern, _)| url.contains(pattern.as_str()))
                    .and_then(|(_, queue)| {
                        if queue.len() > 1 {
                            queue.pop_front()
                        } else {
                            queue.front().cloned()
                        }
                    })
            };

            let canned = canned.unwrap_or_else(|| CannedResponse::status(404));
            match canned.status {
                200..=299 => Ok(serde_json::from_value(canned.json)?),
                429 => Err(AiError::RateLimited { url }),
                status => Err(AiError::ApiRequestFailed {
                    status,
                    url,
                    body: canned.json.to_string(),
                }),
            }
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn post_json<T: DeserializeOwned + Send>(
            &self,
            url: &Url,
            headers: &Headers,
            body: &serde_json::Value,
        ) -> AiResult<T> {
            self.respond(RecordedRequest {
                method: "POST",
                url: url.to_string(),
                headers: headers.to_vec(),
                body: Some(body.clone()),
            })
        }

        async fn get_json<T: DeserializeOwned + Send>(
            &self,
            url: &Url,
            headers: &Headers,
        ) -> AiResult<T> {
            self.respond(RecordedRequest {
                method: "GET",
                url: url.to_string(),
                headers: headers.to_vec(),
                body: None,
            })
        }
    }
}
