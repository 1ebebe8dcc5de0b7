//! Fuzz target for prompt rendering.
//!
//! This fuzzer tests that prompt building:
//! 1. Never panics on arbitrary cell content
//! 2. Never renders more than the cell cap

#![no_main]

use cleansheets::llm::{cell_analysis_prompt, MAX_PROMPT_CELLS};
use cleansheets::CellInput;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: Vec<(String, Option<String>, bool, String)>| {
    if input.len() > 1_000 {
        return;
    }

    let cells: Vec<CellInput> = input
        .into_iter()
        .map(|(address, header, was_formula, value)| {
            let mut cell = CellInput::new(address, value);
            if let Some(h) = header {
                cell = cell.with_header(h);
            }
            if was_formula {
                cell = cell.from_broken_formula();
            }
            cell
        })
        .collect();

    let prompt = cell_analysis_prompt(&cells);

    // Past the cap, the prompt must carry the truncation note.
    if cells.len() > MAX_PROMPT_CELLS {
        assert!(prompt.contains("(Showing first"));
    }
});
