//! tubeseo CLI binary.
//!
//! Generates SEO metadata, A/B titles and thumbnails from the command line.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tubeseo::GeminiConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    use cli::{Cli, exit_code_for, handle_command, load_config};

    // Load .env before reading the API key
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return exit_code_for(&e, &GeminiConfig::default().api_key_env),
    };

    match handle_command(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => exit_code_for(e.as_ref(), &config.gemini.api_key_env),
    }
}
