//! Error types for the feed-backup application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Feed errors
    #[error("Feed not found at {0}")]
    FeedNotFound(String),

    #[error("Feed parse error: {0}")]
    FeedParse(#[from] rss::Error),

    // Per-entry errors (recoverable: logged, never abort the run)
    #[error("Malformed entry metadata: {0}")]
    MalformedMetadata(String),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Video resolution failed: {0}")]
    Resolution(String),

    // File system errors
    #[error("Invalid filename derived from URL: {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
    pub const FEED_ERROR: i32 = 3;
    pub const SETUP_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
