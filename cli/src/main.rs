//! # folio CLI
//!
//! Command-line interface for folio - a portfolio with animated page transitions.
//!
//! ## Usage
//!
//! - `folio` - Browse the portfolio interactively
//! - `folio routes` - List registered routes
//! - `folio go <path>` - Navigate and persist the new location
//! - `folio current` - Show the current route
//! - `folio theme [--toggle]` - Show or flip the theme preference
//!
//! The interactive mode is a terminal UI powered by iocraft.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod interactive;
mod site;

use commands::{current_command, go_command, interactive_command, routes_command, theme_command};
use config::CliConfigLoader;

/// folio - A portfolio with animated page transitions
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse a portfolio with animated page transitions")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Product name shown before page titles
    #[arg(long)]
    product_name: Option<String>,

    /// Length of the leaving phase in milliseconds
    #[arg(long)]
    leave_ms: Option<u64>,

    /// File holding the persisted location
    #[arg(long)]
    location_file: Option<String>,

    /// File holding user preferences
    #[arg(long)]
    preferences_file: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered routes
    Routes,

    /// Navigate to a path and wait for the transition to finish
    Go {
        /// Path such as `projects/42?tab=overview`
        path: String,
    },

    /// Show the current route
    Current,

    /// Show the theme preference
    Theme {
        /// Flip between dark and light
        #[arg(long)]
        toggle: bool,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(product_name) = &cli.product_name {
        loader = loader.with_product_name_override(product_name.clone());
    }

    if let Some(leave_ms) = cli.leave_ms {
        loader = loader.with_leave_ms_override(leave_ms);
    }

    if let Some(location_file) = &cli.location_file {
        loader = loader.with_location_file_override(location_file.clone());
    }

    if let Some(preferences_file) = &cli.preferences_file {
        loader = loader.with_preferences_file_override(preferences_file.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; keep the interactive screen clean unless verbose
    let filter = match (&cli.command, cli.verbose) {
        (_, true) => "debug",
        (None, false) => "warn",
        (Some(_), false) => "info",
    };

    folio_core::init_tracing(filter);

    // Build configuration loader
    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Routes) => routes_command(config_loader).await,
        Some(Commands::Go { path }) => go_command(config_loader, path).await,
        Some(Commands::Current) => current_command(config_loader).await,
        Some(Commands::Theme { toggle }) => theme_command(config_loader, toggle).await,
        // Default to interactive mode
        None => interactive_command(config_loader).await,
    }
}
