//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BASE_URL` - Public prefix for short URLs in responses (default: unset)
//! - `SHORT_ID_LENGTH` - Characters per short id (default: 6, range: 1-10)
//! - `ALLOCATION_MAX_RETRIES` - Candidates tried per allocation (default: 5, range: 1-100)

use anyhow::{Context, Result};
use std::env;

use crate::application::services::DEFAULT_MAX_RETRIES;
use crate::utils::id_generator::{DEFAULT_ID_LENGTH, MAX_ID_LENGTH};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Prefix used to build `short_url` in create responses.
    /// When unset, responses only carry the bare short id.
    pub base_url: Option<String>,
    pub short_id_length: usize,
    pub max_retries: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            base_url: None,
            short_id_length: DEFAULT_ID_LENGTH,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let base_url = env::var("BASE_URL").ok().filter(|v| !v.is_empty());

        let short_id_length = parse_var("SHORT_ID_LENGTH")?.unwrap_or(defaults.short_id_length);
        let max_retries = parse_var("ALLOCATION_MAX_RETRIES")?.unwrap_or(defaults.max_retries);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            base_url,
            short_id_length,
            max_retries,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `base_url` is set but is not an HTTP(S) URL
    /// - `short_id_length` is outside `1..=10`
    /// - `max_retries` is outside `1..=100`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref base_url) = self.base_url
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                base_url
            );
        }

        if self.short_id_length == 0 || self.short_id_length > MAX_ID_LENGTH {
            anyhow::bail!(
                "SHORT_ID_LENGTH must be between 1 and {}, got {}",
                MAX_ID_LENGTH,
                self.short_id_length
            );
        }

        if self.max_retries == 0 || self.max_retries > 100 {
            anyhow::bail!(
                "ALLOCATION_MAX_RETRIES must be between 1 and 100, got {}",
                self.max_retries
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        match self.base_url {
            Some(ref base_url) => tracing::info!("  Base URL: {}", base_url),
            None => tracing::info!("  Base URL: not set"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Short id length: {}", self.short_id_length);
        tracing::info!("  Allocation retries: {}", self.max_retries);
    }
}

fn parse_var(name: &str) -> Result<Option<usize>> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a positive integer, got '{value}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
