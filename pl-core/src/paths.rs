//! On-disk locations for the listings client.
//!
//! Config lives under the OS config directory, logs under the OS data
//! directory, both in a `Listings` subfolder.

use std::path::{Path, PathBuf};

use crate::constants::{APP_NAME, CONFIG_FILE_NAME, LOG_DIR_NAME};
use crate::error::{PlError, PlResult};

/// Default location of `config.toml`.
pub fn default_config_file() -> PlResult<PathBuf> {
    Ok(app_dir(dirs::config_dir(), "config")?.join(CONFIG_FILE_NAME))
}

/// Default directory for rolling log files.
pub fn default_log_dir() -> PlResult<PathBuf> {
    Ok(app_dir(dirs::data_dir(), "data")?.join(LOG_DIR_NAME))
}

/// Resolve a configured directory: empty means "use `fallback`".
pub fn configured_or(configured: &str, fallback: impl FnOnce() -> PlResult<PathBuf>) -> PlResult<PathBuf> {
    let trimmed = configured.trim();
    if trimmed.is_empty() {
        fallback()
    } else {
        Ok(expand_home(Path::new(trimmed)))
    }
}

fn app_dir(base: Option<PathBuf>, kind: &str) -> PlResult<PathBuf> {
    base.map(|b| b.join(APP_NAME))
        .ok_or_else(|| PlError::Config(format!("could not determine {kind} directory")))
}

/// Expand a leading `~` to the home directory, when there is one.
fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_dir_appends_app_name() {
        let dir = app_dir(Some(PathBuf::from("/base")), "config").unwrap();
        assert_eq!(dir, PathBuf::from("/base").join("Listings"));
    }

    #[test]
    fn test_app_dir_missing_base_is_config_error() {
        let err = app_dir(None, "data").unwrap_err();
        assert!(matches!(err, PlError::Config(ref m) if m.contains("data")));
    }

    #[test]
    fn test_configured_or_prefers_configured() {
        let path = configured_or(" /var/log/listings ", || unreachable!()).unwrap();
        assert_eq!(path, PathBuf::from("/var/log/listings"));

        let fallback = configured_or("", || Ok(PathBuf::from("/fallback"))).unwrap();
        assert_eq!(fallback, PathBuf::from("/fallback"));
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home(Path::new("/abs/logs")), PathBuf::from("/abs/logs"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/logs")), home.join("logs"));
        }
    }
}
