//! Listings CLI - command-line front end for the enquiries store.
//!
//! Builds one store from the config file and drives its operations from
//! the terminal. Useful for scripting and for poking at a backend by hand.

mod commands;

use clap::{Parser, Subcommand};
use tracing::info;

use pl_core::config::{AppConfig, ConfigHandle};
use pl_core::error::PlResult;
use pl_core::logging;

/// Listings - manage property enquiries from the terminal.
#[derive(Parser)]
#[command(
    name = "listings",
    version,
    about = "Property enquiries CLI",
    long_about = "A command-line interface for property enquiries.\n\
                   Lists, sends, deletes and marks enquiries read against the listings API."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Session token (overrides config).
    #[arg(short, long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List and manage enquiries.
    Enquiries {
        #[command(subcommand)]
        action: commands::enquiries::EnquiriesAction,
    },
    /// Inspect the configuration.
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() -> PlResult<()> {
    let cli = Cli::parse();

    // Load configuration (`config init` starts from defaults)
    let initializing = matches!(
        cli.command,
        Commands::Config { action: commands::config::ConfigAction::Init { .. } }
    );
    let config = match cli.config.as_deref() {
        _ if initializing => AppConfig::default(),
        Some(path) => AppConfig::load_from_file(std::path::Path::new(path))?,
        None => AppConfig::load_default()?,
    };

    // Initialize logging
    let log_dir = config
        .effective_log_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("logs"));
    let _guard = logging::init_logging(&config.logging, &log_dir, cli.verbose)?;

    let config_handle = ConfigHandle::new(config);
    if let Some(token) = cli.token {
        config_handle.write().await.session.token = token;
    }

    info!("Listings CLI v{}", pl_core::constants::APP_VERSION);

    match cli.command {
        Commands::Enquiries { action } => {
            commands::enquiries::run(config_handle, action, cli.format).await
        }
        Commands::Config { action } => {
            commands::config::run(config_handle, cli.config, action, cli.format).await
        }
    }
}
