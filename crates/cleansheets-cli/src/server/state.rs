//! Application state for the web server.

use std::sync::Arc;

use cleansheets::{CompletionProvider, LlmConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Completion configuration (model, max tokens, temperature).
    pub config: LlmConfig,
    /// Pinned completion provider.
    /// If None, an OpenRouter provider is built per request from the
    /// environment, so the API key is read at request time.
    pub provider: Option<Arc<dyn CompletionProvider>>,
}

impl AppState {
    /// Create state that builds an OpenRouter provider per request.
    pub fn new(config: LlmConfig) -> Self {
        Self {
            config,
            provider: None,
        }
    }

    /// Create state with a pinned provider.
    pub fn with_provider(provider: Arc<dyn CompletionProvider>) -> Self {
        let config = provider.config().clone();
        Self {
            config,
            provider: Some(provider),
        }
    }
}
