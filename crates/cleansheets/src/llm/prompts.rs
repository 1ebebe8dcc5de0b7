//! Prompt templates for cell analysis.

use crate::sheet::CellInput;

/// Maximum number of cells rendered into a single prompt.
pub const MAX_PROMPT_CELLS: usize = 200;

/// Build the user prompt listing cells for analysis.
///
/// One line per cell: `address [column] [extracted from broken formula]: "value"`,
/// with the bracketed segments present only when the cell carries a header or
/// the broken-formula marker. Input beyond [`MAX_PROMPT_CELLS`] is dropped and
/// a trailing note records how many cells were shown.
pub fn cell_analysis_prompt(cells: &[CellInput]) -> String {
    let mut prompt =
        String::from("Analyze this Google Sheets data. Format: address [column]: value\n\n");

    for cell in cells.iter().take(MAX_PROMPT_CELLS) {
        let header_info = cell
            .header
            .as_deref()
            .filter(|h| !h.is_empty())
            .map(|h| format!(" [{}]", h))
            .unwrap_or_default();

        let formula_info = if cell.was_formula.unwrap_or(false) {
            " [extracted from broken formula]"
        } else {
            ""
        };

        prompt.push_str(&format!(
            "{}{}{}: \"{}\"\n",
            cell.address, header_info, formula_info, cell.value
        ));
    }

    if cells.len() > MAX_PROMPT_CELLS {
        prompt.push_str(&format!(
            "\n(Showing first {} of {} cells)",
            MAX_PROMPT_CELLS,
            cells.len()
        ));
    }

    prompt
}

/// System prompt for all cell-analysis completions.
pub fn system_prompt() -> &'static str {
    r#"You are a data cleaning expert for spreadsheets. Find ALL issues and suggest fixes.

STRICT RULES - must follow every time:
1. ALWAYS fix phone numbers to format 8(XXX)XXX-XX-XX for Russian numbers, or standard local format for others
2. ALWAYS trim extra spaces (leading, trailing, double spaces inside)
3. ALWAYS fix name capitalization → "John Smith" (not "john smith" or "JOHN SMITH")
4. ALWAYS lowercase emails → ivan@mail.ru (not IVAN@MAIL.RU)
5. ALWAYS normalize dates → DD.MM.YYYY
6. Use the column header as a hint about the data type
7. Cells marked [extracted from broken formula] — treat as regular data and fix normally
8. DO NOT skip obvious issues — check every single cell

Return ONLY a valid JSON array, no text before or after, no markdown:
[{"row":3,"col":2,"type":"Phone format","oldValue":"+7999123","newValue":"8(999)123-45-67","confidence":0.98}]

If no issues found, return []."#
}
