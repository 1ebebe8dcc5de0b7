//! Spreadsheet cell descriptors and A1-style addressing.

use serde::{Deserialize, Serialize};

/// One spreadsheet cell as submitted for analysis.
///
/// The address is whatever coordinate the caller uses ("B3"); the optional
/// header is a column-label hint for the model, and `was_formula` marks values
/// that were extracted from a broken formula.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellInput {
    /// Spreadsheet coordinate, e.g. "B3".
    pub address: String,

    /// Column label hint, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    /// Marks the value as a formula-extraction artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub was_formula: Option<bool>,

    /// Raw cell content.
    pub value: String,
}

impl CellInput {
    /// Create a cell descriptor with just an address and a value.
    pub fn new(address: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            header: None,
            was_formula: None,
            value: value.into(),
        }
    }

    /// Attach a column-header hint.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Mark the value as extracted from a broken formula.
    pub fn from_broken_formula(mut self) -> Self {
        self.was_formula = Some(true);
        self
    }
}

/// A1-style address for 1-based row and column numbers.
///
/// `cell_address(3, 2)` is `"B3"`.
pub fn cell_address(row: usize, col: usize) -> String {
    format!("{}{}", column_letters(col), row)
}

/// Spreadsheet column letters for a 1-based column number (1 = "A",
/// 27 = "AA"). Returns an empty string for column 0.
pub fn column_letters(mut col: usize) -> String {
    let mut letters = String::new();
    while col > 0 {
        let rem = ((col - 1) % 26) as u8;
        letters.push((b'A' + rem) as char);
        col = (col - 1) / 26;
    }
    letters.chars().rev().collect()
}
