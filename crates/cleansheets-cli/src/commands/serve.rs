//! Serve command - run the cell-analysis HTTP endpoint.

use std::sync::Arc;

use cleansheets::{LlmConfig, MockProvider};
use colored::Colorize;

use crate::server::{app, state::AppState};

pub fn run(
    host: String,
    port: u16,
    model: Option<String>,
    mock: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = LlmConfig::default();
    if let Some(m) = model {
        config.model = m;
    }

    let state = if mock {
        AppState::with_provider(Arc::new(MockProvider::with_config(config.clone())))
    } else {
        AppState::new(config.clone())
    };

    // Print server info
    let url = format!("http://{}:{}", host, port);
    println!();
    println!(
        "{} {}",
        "Starting analysis endpoint at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Route: POST {}/api/analyze", url);
    println!("  Model: {}", config.model);
    if mock {
        println!("  Provider: {}", "mock (no API calls)".yellow());
    }
    if verbose {
        println!("  Max tokens: {}", config.max_tokens);
        println!("  Temperature: {}", config.temperature);
    }
    println!();

    if !mock && std::env::var("OPENROUTER_API_KEY").is_err() {
        println!(
            "{} OPENROUTER_API_KEY is not set; requests will fail until it is",
            "Warning:".yellow()
        );
        println!();
    }

    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    // Run the server
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        // Set up Ctrl+C handler
        tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        if let Err(e) = app::run_server(state, &host, port).await {
            eprintln!("Server error: {}", e);
        }
    });

    Ok(())
}
