//! OpenRouter chat-completion provider implementation.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{CleanSheetsError, Result};

use super::provider::{CompletionProvider, LlmConfig};

/// OpenRouter API endpoint.
const API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Referer sent with every request, identifying the calling surface.
const HTTP_REFERER: &str = "https://sheets.google.com";

/// Application title sent with every request.
const X_TITLE: &str = "Clean Sheets AI";

/// OpenRouter provider.
pub struct OpenRouterProvider {
    client: Client,
    api_key: String,
    config: LlmConfig,
}

impl OpenRouterProvider {
    /// Create a new OpenRouter provider with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, LlmConfig::default())
    }

    /// Create a new OpenRouter provider with custom configuration.
    ///
    /// The client is built without a request timeout; slow upstream calls run
    /// to completion.
    pub fn with_config(api_key: impl Into<String>, config: LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| CleanSheetsError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    /// Create from environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENROUTER_API_KEY").map_err(|_| {
            CleanSheetsError::Config("OPENROUTER_API_KEY environment variable not set".to_string())
        })?;
        Self::new(api_key)
    }

    /// Create from environment variable with custom configuration.
    pub fn from_env_with_config(config: LlmConfig) -> Result<Self> {
        let api_key = std::env::var("OPENROUTER_API_KEY").map_err(|_| {
            CleanSheetsError::Config("OPENROUTER_API_KEY environment variable not set".to_string())
        })?;
        Self::with_config(api_key, config)
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|e| CleanSheetsError::Config(format!("Invalid API key: {}", e)))?,
        );
        headers.insert("HTTP-Referer", HeaderValue::from_static(HTTP_REFERER));
        headers.insert("X-Title", HeaderValue::from_static(X_TITLE));
        Ok(headers)
    }

    /// Build the request body for a completion call.
    fn request_body(&self, system_prompt: &str, user_prompt: &str) -> Value {
        json!({
            "model": self.config.model,
            "messages": [
                {
                    "role": "system",
                    "content": system_prompt
                },
                {
                    "role": "user",
                    "content": user_prompt
                }
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterProvider {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let body = self.request_body(system_prompt, user_prompt);

        let response = self
            .client
            .post(API_URL)
            .headers(self.build_headers()?)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CleanSheetsError::Upstream {
                status: response.status().as_u16(),
            });
        }

        let api_response: ChatResponse = response.json().await?;

        // Extract text from the first choice
        api_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CleanSheetsError::Config("No completion from OpenRouter".to_string()))
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "openrouter"
    }
}

/// OpenRouter API response structure.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: String,
}
