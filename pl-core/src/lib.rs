//! Listings Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by all other listings crates:
//! - Application configuration (API base URL, session token, logging)
//! - Global error type covering transport, server, and config failures
//! - Structured logging with tracing
//! - Default on-disk locations
//! - Common constants

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod constants;

// Re-export commonly used items at the crate root
pub use config::AppConfig;
pub use error::{PlError, PlResult};
pub use logging::{init_logging, LogGuard};
