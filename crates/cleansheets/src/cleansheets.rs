//! Main CleanSheets struct and public API.

use std::sync::Arc;

use crate::error::{CleanSheetsError, Result};
use crate::issue::{filter_confident, Issue};
use crate::llm::{cell_analysis_prompt, parse_issues, system_prompt, CompletionProvider};
use crate::sheet::CellInput;

/// The cell-analysis engine.
///
/// Wraps a completion provider and runs the full pipeline: render the
/// submitted cells into a prompt, send one completion request, parse the
/// reply, and keep only the confident issues.
pub struct CleanSheets {
    provider: Arc<dyn CompletionProvider>,
}

impl CleanSheets {
    /// Create an engine backed by the given provider.
    pub fn new(provider: impl CompletionProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Create an engine from an already-shared provider.
    pub fn from_arc(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Analyze a batch of cells and return the confident issues.
    ///
    /// Makes exactly one completion call. A reply that cannot be parsed as an
    /// issue array yields `Ok` with an empty list; provider and upstream
    /// failures are returned as errors.
    pub async fn analyze(&self, cells: &[CellInput]) -> Result<Vec<Issue>> {
        if cells.is_empty() {
            return Err(CleanSheetsError::EmptyData("No data provided".to_string()));
        }

        let prompt = cell_analysis_prompt(cells);
        let reply = self.provider.complete(system_prompt(), &prompt).await?;
        let issues = parse_issues(&reply);

        Ok(filter_confident(issues))
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }
}
