//! Chat-completion provider integration.
//!
//! This module holds the provider seam for cell analysis:
//! - Prompt templates (system instruction plus the per-cell user prompt)
//! - The [`CompletionProvider`] trait and its OpenRouter implementation
//! - Reply parsing that degrades malformed model output to an empty list
//!
//! # Supported Providers
//!
//! - **OpenRouter** - any routed model (requires `OPENROUTER_API_KEY`)
//! - **Mock** - canned replies for tests and offline runs
//!
//! # Example
//!
//! ```no_run
//! use cleansheets::{CleanSheets, OpenRouterProvider};
//!
//! let sheets = CleanSheets::new(OpenRouterProvider::from_env().unwrap());
//! ```

mod mock;
mod openrouter;
mod prompts;
mod provider;
mod response;

pub use mock::MockProvider;
pub use openrouter::OpenRouterProvider;
pub use prompts::{cell_analysis_prompt, system_prompt, MAX_PROMPT_CELLS};
pub use provider::{CompletionProvider, LlmConfig};
pub use response::parse_issues;
