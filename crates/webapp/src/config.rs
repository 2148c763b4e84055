//! Web app configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `CATALOG_BASE_URL` - Base URL of the catalog service (default: <http://localhost:3000>)
//! - `LOG_FORMAT` - `json` for structured log output, anything else for text

use thiserror::Error;
use url::Url;

/// Where the catalog service listens unless told otherwise.
pub const DEFAULT_CATALOG_BASE_URL: &str = "http://localhost:3000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Web app configuration.
#[derive(Debug, Clone)]
pub struct WebappConfig {
    /// Base URL of the catalog service
    pub catalog_base_url: Url,
    /// Emit JSON log lines instead of human-readable text
    pub json_logs: bool,
}

impl WebappConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CATALOG_BASE_URL` is not an absolute http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw = get_env_or_default("CATALOG_BASE_URL", DEFAULT_CATALOG_BASE_URL);
        let log_format = get_optional_env("LOG_FORMAT");

        Ok(Self {
            catalog_base_url: parse_base_url(&raw)?,
            json_logs: log_format.is_some_and(|f| f.eq_ignore_ascii_case("json")),
        })
    }

    /// Configuration pointing at the given catalog service.
    #[must_use]
    pub const fn with_catalog_base_url(catalog_base_url: Url) -> Self {
        Self {
            catalog_base_url,
            json_logs: false,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason| ConfigError::InvalidEnvVar("CATALOG_BASE_URL".to_string(), reason);

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    Ok(url)
}

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}
