//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CleanSheets: data-cleaning suggestions for spreadsheet cells
#[derive(Parser)]
#[command(name = "cleansheets")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the cell-analysis HTTP endpoint
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port for the HTTP server
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Model to route completions through (e.g., "openai/gpt-4o-mini")
        #[arg(long)]
        model: Option<String>,

        /// Use the mock provider instead of OpenRouter (no API calls)
        #[arg(long)]
        mock: bool,
    },

    /// Analyze a CSV file and print suggested fixes
    Analyze {
        /// Path to the data file (CSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Model to route completions through (e.g., "openai/gpt-4o-mini")
        #[arg(long)]
        model: Option<String>,

        /// Use the mock provider instead of OpenRouter (no API calls)
        #[arg(long)]
        mock: bool,

        /// Output issues as JSON
        #[arg(long)]
        json: bool,
    },
}
