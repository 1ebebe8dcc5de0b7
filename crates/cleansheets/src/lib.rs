//! CleanSheets: LLM-backed data-cleaning suggestions for spreadsheet cells.
//!
//! CleanSheets relays a batch of spreadsheet cells to a chat-completion model
//! and turns the reply into concrete fix suggestions, keeping only the ones
//! the model is confident about.
//!
//! # Core Principles
//!
//! - **Stateless**: each analysis is one prompt and one completion, no memory
//! - **Non-destructive**: suggestions are relayed, never applied
//! - **Degrade quietly**: malformed model output means "no issues", not an error
//!
//! # Example
//!
//! ```no_run
//! use cleansheets::{CellInput, CleanSheets, OpenRouterProvider};
//!
//! # async fn run() -> cleansheets::Result<()> {
//! let sheets = CleanSheets::new(OpenRouterProvider::from_env()?);
//! let cells = vec![CellInput::new("A2", "john smith").with_header("Name")];
//! let issues = sheets.analyze(&cells).await?;
//!
//! println!("Issues found: {}", issues.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod input;
pub mod issue;
pub mod llm;
pub mod sheet;

mod cleansheets;

pub use crate::cleansheets::CleanSheets;
pub use error::{CleanSheetsError, Result};
pub use input::read_cells_csv;
pub use issue::{filter_confident, Issue, CONFIDENCE_THRESHOLD};
pub use llm::{CompletionProvider, LlmConfig, MockProvider, OpenRouterProvider};
pub use sheet::{cell_address, CellInput};
