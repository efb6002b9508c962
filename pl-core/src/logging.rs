//! Structured logging for the listings client.
//!
//! Everything goes to stderr in compact form and to a daily rolling file
//! under the log directory. The file copy is plain text or JSON per
//! `[logging] json_output`.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::constants::LOG_FILE_PREFIX;
use crate::error::{PlError, PlResult};

/// Keeps the background log writer alive. Drop it to flush the file.
pub struct LogGuard {
    _guard: WorkerGuard,
}

/// Install the global subscriber from the `[logging]` section.
///
/// `verbose` forces the `debug` level regardless of the configured one.
/// An unparseable level falls back to `info`. Fails if a global subscriber
/// is already installed.
pub fn init_logging(config: &LoggingConfig, log_dir: &Path, verbose: bool) -> PlResult<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let (writer, guard) = tracing_appender::non_blocking(rolling::daily(log_dir, LOG_FILE_PREFIX));
    let level = effective_level(config, verbose);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    let json_layer = config.json_output.then(|| {
        fmt::layer()
            .with_writer(writer.clone())
            .json()
            .with_file(true)
            .with_line_number(true)
    });
    let text_layer = (!config.json_output).then(|| {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
    });

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(console_layer)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| PlError::Internal(format!("logger already set: {e}")))?;

    tracing::info!("logging at level={level}, dir={}", log_dir.display());
    Ok(LogGuard { _guard: guard })
}

fn effective_level(config: &LoggingConfig, verbose: bool) -> &str {
    if verbose {
        "debug"
    } else if config.level.trim().is_empty() {
        "info"
    } else {
        config.level.trim()
    }
}
