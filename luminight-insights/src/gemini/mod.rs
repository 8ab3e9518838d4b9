//! Insight generation backed by Google's Gemini `generateContent` API.
//!
//! # Example
//!
//! ```no_run
//! use luminight_insights::{GeminiConfig, GeminiInsightGenerator, InsightGenerator, InsightRequest};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = GeminiInsightGenerator::with_config(GeminiConfig::new("my-api-key"))?;
//! let request = InsightRequest::new("Cedar Valley", 34.0, 6);
//! let insights = generator.generate(&request, &CancellationToken::new()).await?;
//! println!("{}", insights.stargazing_advice);
//! # Ok(())
//! # }
//! ```

mod reply;
mod wire;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio_util::sync::CancellationToken;

use crate::{
    GeneratorBuildError, InsightError, InsightGenerator, InsightRequest, SkyInsights, build_prompt,
};
pub use reply::parse_insights;
use wire::{GenerateContentRequest, GenerateContentResponse};

/// Default Gemini model.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default API origin.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default user agent for Gemini requests.
pub const DEFAULT_USER_AGENT: &str = "luminight-insights/0.1";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.5;

/// Placeholder value shipped in sample environment files.
pub const PLACEHOLDER_API_KEY: &str = "your_key_here";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header carrying the API key, which keeps the secret out of request URLs.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Configuration for [`GeminiInsightGenerator`].
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key appended to every request.
    pub api_key: String,
    /// Model name, e.g. `gemini-1.5-flash`.
    pub model: String,
    /// API origin without a trailing path.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Sampling temperature.
    pub temperature: f64,
    /// User agent string for requests.
    pub user_agent: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("temperature", &self.temperature)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl GeminiConfig {
    /// Create a configuration with defaults for everything but the key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            temperature: DEFAULT_TEMPERATURE,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Set the model name.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API origin.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the sampling temperature.
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    fn has_usable_key(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && key != PLACEHOLDER_API_KEY
    }
}

/// Insight generator calling the Gemini REST API.
#[derive(Debug)]
pub struct GeminiInsightGenerator {
    client: Client,
    config: GeminiConfig,
}

impl GeminiInsightGenerator {
    /// Create a generator with default settings for `api_key`.
    ///
    /// # Errors
    /// See [`GeminiInsightGenerator::with_config`].
    pub fn new(api_key: impl Into<String>) -> Result<Self, GeneratorBuildError> {
        Self::with_config(GeminiConfig::new(api_key))
    }

    /// Create a generator with explicit configuration.
    ///
    /// # Errors
    /// Returns [`GeneratorBuildError::MissingApiKey`] when the key is blank or
    /// the sample placeholder, and [`GeneratorBuildError::HttpClient`] when the
    /// HTTP client cannot be built.
    pub fn with_config(config: GeminiConfig) -> Result<Self, GeneratorBuildError> {
        if !config.has_usable_key() {
            return Err(GeneratorBuildError::MissingApiKey);
        }
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(GeneratorBuildError::HttpClient)?;
        Ok(Self { client, config })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Endpoint URL; the key travels in a header.
    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn fetch(&self, request: &InsightRequest) -> Result<SkyInsights, InsightError> {
        let prompt = build_prompt(request);
        let body = GenerateContentRequest::single_turn(&prompt, self.config.temperature);
        log::debug!(
            "requesting insights for '{}' from {}",
            request.location_name,
            self.config.model
        );

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(err))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(http_error(status.as_u16(), &text));
        }

        let envelope: GenerateContentResponse =
            response
                .json()
                .await
                .map_err(|err| InsightError::Decode {
                    message: err.without_url().to_string(),
                })?;
        let text = envelope.first_candidate_text();
        if text.is_empty() {
            return Err(InsightError::EmptyResponse);
        }
        parse_insights(&text)
    }

    /// Map a transport failure, dropping the URL from the message.
    fn convert_reqwest_error(&self, error: reqwest::Error) -> InsightError {
        if error.is_timeout() {
            return InsightError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            };
        }
        InsightError::Network {
            message: error.without_url().to_string(),
        }
    }
}

fn http_error(status: u16, body: &str) -> InsightError {
    let trimmed = body.trim();
    InsightError::Http {
        status,
        body: if trimmed.is_empty() {
            "Unknown error".to_owned()
        } else {
            trimmed.to_owned()
        },
    }
}

#[async_trait]
impl InsightGenerator for GeminiInsightGenerator {
    async fn generate(
        &self,
        request: &InsightRequest,
        cancel: &CancellationToken,
    ) -> Result<SkyInsights, InsightError> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(InsightError::Cancelled),
            result = self.fetch(request) => result,
        }
    }
}
