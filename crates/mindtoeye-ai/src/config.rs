//! Public configuration for the provider clients.

use std::time::Duration;

pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
pub const REPLICATE_BASE_URL: &str = "https://api.replicate.com";

/// Configuration shared by the Anthropic and Replicate clients.
///
/// # Example
///
/// ```
/// use mindtoeye_ai::AiClientConfig;
/// use std::time::Duration;
///
/// let config = AiClientConfig::anthropic("sk-ant-...")
///     .with_model("claude-3-7-sonnet-20250219")
///     .with_timeout(Duration::from_secs(90));
/// ```
#[derive(Debug, Clone)]
pub struct AiClientConfig {
    pub(crate) base_url: String,
    pub(crate) api_key: Option<String>,
    pub(crate) model: String,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
    /// Retries for 5xx and network errors.
    pub(crate) max_retries: u8,
    pub(crate) retry_base_delay: Duration,
    /// Replicate only: delay between prediction status polls.
    pub(crate) poll_interval: Duration,
    pub(crate) max_polls: u32,
}

impl Default for AiClientConfig {
    fn default() -> Self {
        Self {
            base_url: ANTHROPIC_BASE_URL.to_string(),
            api_key: None,
            model: mindtoeye_core::config::DEFAULT_ANTHROPIC_MODEL.to_string(),
            user_agent: concat!("mindtoeye/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(120),
            max_retries: 2,
            retry_base_delay: Duration::from_millis(500),
            poll_interval: Duration::from_secs(1),
            max_polls: 120,
        }
    }
}

impl AiClientConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults for the Anthropic Messages API.
    #[must_use]
    pub fn anthropic(api_key: impl Into<String>) -> Self {
        Self::default().with_api_key(api_key)
    }

    /// Defaults for the Replicate predictions API.
    #[must_use]
    pub fn replicate(api_token: impl Into<String>) -> Self {
        Self::default()
            .with_base_url(REPLICATE_BASE_URL)
            .with_model(mindtoeye_core::config::DEFAULT_REPLICATE_MODEL)
            .with_api_key(api_token)
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    #[must_use]
    pub const fn with_max_polls(mut self, polls: u32) -> Self {
        self.max_polls = polls;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}
