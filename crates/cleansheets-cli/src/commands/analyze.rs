//! Analyze command - send a CSV file's cells for analysis and print fixes.

use std::path::PathBuf;

use cleansheets::{
    cell_address, read_cells_csv, CleanSheets, LlmConfig, MockProvider, OpenRouterProvider,
};
use colored::Colorize;

pub fn run(
    file: PathBuf,
    model: Option<String>,
    mock: bool,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate input file exists
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let cells = read_cells_csv(&file)?;

    if !json_output {
        println!(
            "{} {} ({} cells)",
            "Analyzing".cyan().bold(),
            file.display().to_string().white(),
            cells.len()
        );
    }

    if verbose && !json_output {
        println!();
        for cell in &cells {
            match cell.header.as_deref() {
                Some(h) => println!("  {} [{}]: {:?}", cell.address, h, cell.value),
                None => println!("  {}: {:?}", cell.address, cell.value),
            }
        }
        println!();
    }

    let mut config = LlmConfig::default();
    if let Some(m) = model {
        config.model = m;
    }

    let sheets = if mock {
        CleanSheets::new(MockProvider::with_config(config))
    } else {
        CleanSheets::new(OpenRouterProvider::from_env_with_config(config)?)
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let issues = runtime.block_on(sheets.analyze(&cells))?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&issues)?);
        return Ok(());
    }

    println!("Issues found: {}", issues.len().to_string().white().bold());

    if issues.is_empty() {
        println!("{}", "No issues found - data looks clean!".green());
        return Ok(());
    }

    println!();
    for issue in &issues {
        let address = cell_address(issue.row.max(0) as usize, issue.col.max(0) as usize);
        let confidence = issue
            .confidence
            .map(|c| format!("{:.0}%", c * 100.0))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:8} {:20} {:?} -> {:?}  ({})",
            address, issue.kind, issue.old_value, issue.new_value, confidence
        );
    }

    Ok(())
}
