//! Chat-completion provider trait and configuration.

use async_trait::async_trait;

use crate::error::Result;

/// Configuration for chat-completion requests.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model identifier (e.g., "openai/gpt-4o-mini").
    pub model: String,

    /// Maximum tokens in the response.
    pub max_tokens: usize,

    /// Temperature for generation (0.0-1.0).
    pub temperature: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "openai/gpt-4o-mini".to_string(),
            max_tokens: 4000,
            temperature: 0.1,
        }
    }
}

/// Trait for chat-completion providers.
///
/// Implementations must be thread-safe (Send + Sync) so one provider can be
/// shared across concurrent requests.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one completion request (a system instruction plus a user prompt,
    /// in that order) and return the first choice's message text.
    ///
    /// Exactly one outbound call per invocation; no retries.
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;

    /// Get the configuration for this provider.
    fn config(&self) -> &LlmConfig;

    /// Get the name of this provider (for logging/debugging).
    fn name(&self) -> &str;
}
