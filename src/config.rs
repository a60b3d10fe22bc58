//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! ```bash
//! export SECURE_COOKIE_SECRET="change-me"        # HMAC key for the visitor cookie
//! export SECURE_COOKIE_NAME="visitor_session"    # visitor cookie name
//! export REDIRECTS_FILEPATH="./data/redirects.json"
//! ```
//!
//! Absence of any required variable is a fatal startup error; the process must
//! not begin serving traffic without them.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `AUDIT_LOG_FILEPATH` - Audit sink path (default: `./logs/url_redirector.log`)
//! - `AUDIT_QUEUE_CAPACITY` - Audit event buffer size (default: 10000, min: 100)
//! - `APP_ENV` - `production` disables the audit console mirror (default: `development`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// HMAC signing secret for the visitor cookie. Must be non-empty.
    pub cookie_secret: String,
    /// Name of the signed visitor cookie.
    pub cookie_name: String,
    /// Path of the persisted redirect table (a pretty-printed JSON object).
    pub redirects_filepath: PathBuf,
    /// Path of the append-only audit log (one JSON record per line).
    pub audit_log_filepath: PathBuf,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Bound of the audit event channel between handlers and the worker.
    pub audit_queue_capacity: usize,
    /// Deployment environment name; anything but `production` mirrors audit
    /// records to the console.
    pub app_env: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required variable is missing.
    pub fn from_env() -> Result<Self> {
        let cookie_secret =
            env::var("SECURE_COOKIE_SECRET").context("SECURE_COOKIE_SECRET must be set")?;
        let cookie_name =
            env::var("SECURE_COOKIE_NAME").context("SECURE_COOKIE_NAME must be set")?;
        let redirects_filepath = env::var("REDIRECTS_FILEPATH")
            .map(PathBuf::from)
            .context("REDIRECTS_FILEPATH must be set")?;

        let audit_log_filepath = env::var("AUDIT_LOG_FILEPATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./logs/url_redirector.log"));

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let audit_queue_capacity = env::var("AUDIT_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Self {
            cookie_secret,
            cookie_name,
            redirects_filepath,
            audit_log_filepath,
            listen_addr,
            log_level,
            log_format,
            audit_queue_capacity,
            app_env,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `cookie_secret` is empty
    /// - `cookie_name` is empty or contains characters illegal in a cookie name
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `audit_queue_capacity` is out of bounds
    pub fn validate(&self) -> Result<()> {
        if self.cookie_secret.is_empty() {
            anyhow::bail!("SECURE_COOKIE_SECRET must not be empty");
        }

        if self.cookie_name.is_empty() {
            anyhow::bail!("SECURE_COOKIE_NAME must not be empty");
        }

        // Cookie names travel inside the Cookie/Set-Cookie headers unquoted.
        if !self
            .cookie_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            anyhow::bail!(
                "SECURE_COOKIE_NAME may only contain alphanumerics, '-' and '_', got '{}'",
                self.cookie_name
            );
        }

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

        if self.audit_queue_capacity < 100 {
            anyhow::bail!(
                "AUDIT_QUEUE_CAPACITY must be at least 100, got {}",
                self.audit_queue_capacity
            );
        }

        if self.audit_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "AUDIT_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.audit_queue_capacity
            );
        }

        Ok(())
    }

    /// Returns whether audit records should be mirrored to the console.
    pub fn audit_mirror(&self) -> bool {
        self.app_env != "production"
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Redirect table: {}", self.redirects_filepath.display());
        tracing::info!("  Audit log: {}", self.audit_log_filepath.display());
        tracing::info!("  Cookie name: {}", self.cookie_name);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Audit queue capacity: {}", self.audit_queue_capacity);
        tracing::info!("  Environment: {}", self.app_env);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
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
