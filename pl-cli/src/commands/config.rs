//! Configuration commands.

use std::path::PathBuf;

use clap::Subcommand;
use console::style;

use pl_core::config::{AppConfig, ConfigHandle};
use pl_core::error::{PlError, PlResult};

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration.
    Show,
    /// Print the config file path in use.
    Path,
    /// Write a default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

pub async fn run(
    config: ConfigHandle,
    config_path: Option<String>,
    action: ConfigAction,
    format: OutputFormat,
) -> PlResult<()> {
    let path = match config_path {
        Some(p) => PathBuf::from(p),
        None => AppConfig::default_config_path()?,
    };

    match action {
        ConfigAction::Show => {
            let cfg = config.read().await;
            let token = masked(&cfg.session.token);

            match format {
                OutputFormat::Json => {
                    let json = serde_json::json!({
                        "api": {
                            "url": AppConfig::sanitize_api_url(&cfg.api.url),
                            "timeout_ms": cfg.api.timeout_ms,
                            "custom_headers": cfg.api.custom_headers,
                            "accept_self_signed_certs": cfg.api.accept_self_signed_certs,
                        },
                        "session": { "token": token },
                        "logging": {
                            "level": cfg.logging.level,
                            "directory": cfg.effective_log_dir()?.display().to_string(),
                            "json_output": cfg.logging.json_output,
                        },
                    });
                    println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
                }
                OutputFormat::Text => {
                    println!("{}", style("[api]").bold());
                    println!("  url                      = {}", AppConfig::sanitize_api_url(&cfg.api.url));
                    println!("  timeout_ms               = {}", cfg.api.timeout_ms);
                    println!("  accept_self_signed_certs = {}", cfg.api.accept_self_signed_certs);
                    let mut headers: Vec<_> = cfg.api.custom_headers.keys().collect();
                    headers.sort();
                    for name in headers {
                        println!("  header                   = {name}");
                    }
                    println!("{}", style("[session]").bold());
                    println!("  token                    = {token}");
                    println!("{}", style("[logging]").bold());
                    println!("  level                    = {}", cfg.logging.level);
                    println!("  directory                = {}", cfg.effective_log_dir()?.display());
                    println!("  json_output              = {}", cfg.logging.json_output);

                    if !cfg.is_api_configured() {
                        println!("\n{} api.url is empty", style("!").yellow());
                    }
                }
            }
            Ok(())
        }
        ConfigAction::Path => {
            match format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "path": path.display().to_string(), "exists": path.exists() })
                ),
                OutputFormat::Text => println!("{}", path.display()),
            }
            Ok(())
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(PlError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            config.read().await.save_to_file(&path)?;
            match format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "path": path.display().to_string(), "written": true })
                ),
                OutputFormat::Text => {
                    println!("{} Wrote {}", style("✓").green(), style(path.display()).bold())
                }
            }
            Ok(())
        }
    }
}

fn masked(token: &str) -> String {
    if token.is_empty() {
        "(none)".to_string()
    } else {
        "********".to_string()
    }
}
