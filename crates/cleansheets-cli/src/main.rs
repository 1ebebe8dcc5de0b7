//! CleanSheets CLI - data-cleaning suggestions for spreadsheet cells.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            model,
            mock,
        } => commands::serve::run(host, port, model, mock, cli.verbose),

        Commands::Analyze {
            file,
            model,
            mock,
            json,
        } => commands::analyze::run(file, model, mock, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
