//! Application-wide constants.

/// Application name.
pub const APP_NAME: &str = "Listings";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Log directory name inside the data directory.
pub const LOG_DIR_NAME: &str = "logs";

/// Prefix of the daily rolling log files.
pub const LOG_FILE_PREFIX: &str = "listings.log";

/// Default API request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Default API base URL for a locally running backend.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Header carrying the session token on every request.
pub const AUTH_HEADER: &str = "Authorization";

/// Collection path of the enquiries resource, relative to the API base.
pub const ENQUIRIES_PATH: &str = "/enquiries";

/// Status value the server puts in the envelope of a successful call.
pub const STATUS_OK: u16 = 200;

/// Default event bus capacity.
pub const EVENT_BUS_CAPACITY: usize = 64;
