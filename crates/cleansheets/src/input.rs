//! CSV input for the one-shot CLI mode.

use std::fs::File;
use std::path::Path;

use crate::error::{CleanSheetsError, Result};
use crate::sheet::{CellInput, cell_address};

/// Read a CSV file into cell descriptors.
///
/// The first record supplies column headers; each non-empty cell of the
/// remaining records becomes one [`CellInput`] with an A1-style address. Row
/// 2 is the first data row, matching the sheet the file came from. Empty
/// cells are skipped.
pub fn read_cells_csv(path: impl AsRef<Path>) -> Result<Vec<CellInput>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CleanSheetsError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();

    let mut cells = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = row_idx + 2;
        for (col_idx, value) in record.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let mut cell = CellInput::new(cell_address(row, col_idx + 1), value);
            if let Some(header) = headers.get(col_idx).filter(|h| !h.is_empty()) {
                cell = cell.with_header(header.as_str());
            }
            cells.push(cell);
        }
    }

    Ok(cells)
}
