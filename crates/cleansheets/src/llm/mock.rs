//! Mock completion provider for testing.

use async_trait::async_trait;

use crate::error::{CleanSheetsError, Result};

use super::provider::{CompletionProvider, LlmConfig};

/// Canned behavior for a mock completion call.
enum Reply {
    Text(String),
    Upstream(u16),
}

/// Mock provider that returns predictable responses for testing.
pub struct MockProvider {
    config: LlmConfig,
    reply: Reply,
}

impl MockProvider {
    /// Create a mock provider that replies with an empty issue list.
    pub fn new() -> Self {
        Self::with_reply("[]")
    }

    /// Create a mock provider that replies with the given text.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            config: LlmConfig::default(),
            reply: Reply::Text(reply.into()),
        }
    }

    /// Create with custom configuration, replying with an empty issue list.
    pub fn with_config(config: LlmConfig) -> Self {
        Self {
            config,
            reply: Reply::Text("[]".to_string()),
        }
    }

    /// Create a mock provider whose calls fail with an upstream status error.
    pub fn failing_upstream(status: u16) -> Self {
        Self {
            config: LlmConfig::default(),
            reply: Reply::Upstream(status),
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, _system_prompt: &str, _user_prompt: &str) -> Result<String> {
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Upstream(status) => Err(CleanSheetsError::Upstream { status: *status }),
        }
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "mock"
    }
}
