//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:$PORT` when `PORT` is set, else `0.0.0.0:8080`)
//! - `PORT` - Port assigned by the hosting platform, used when `LISTEN` is absent
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `MAX_INGESTS` - Number of batches kept in memory (default: 50, range: 1-10000)
//! - `INGEST_SECRET` - Shared secret required on `POST /ingest` (default: empty, gate disabled)
//! - `BEHIND_PROXY` - Trust `X-Forwarded-For` for client addresses (default: false)
//! - `RATE_LIMIT_ENABLED` - Per-IP rate limiting of producer routes (default: true)
//! - `MAX_UPLOAD_BYTES` - Request body limit for uploads (default: 5 MiB)

use anyhow::Result;
use std::env;

use crate::infrastructure::memory::DEFAULT_CAPACITY;

const DEFAULT_PORT: &str = "8080";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
const MAX_CAPACITY: usize = 10_000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of batches kept in the history (`MAX_INGESTS`).
    pub max_ingests: usize,
    /// Shared secret for the push endpoint. `None` disables the check.
    pub ingest_secret: Option<String>,
    /// When true, client addresses are read from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub rate_limit_enabled: bool,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: format!("0.0.0.0:{DEFAULT_PORT}"),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            max_ingests: DEFAULT_CAPACITY,
            ingest_secret: None,
            behind_proxy: false,
            rate_limit_enabled: true,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let max_ingests = env::var("MAX_INGESTS")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_CAPACITY);

        let ingest_secret = env::var("INGEST_SECRET").ok().filter(|s| !s.is_empty());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let rate_limit_enabled = env::var("RATE_LIMIT_ENABLED")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(true);

        let max_upload_bytes = env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            max_ingests,
            ingest_secret,
            behind_proxy,
            rate_limit_enabled,
            max_upload_bytes,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:$PORT` when the platform assigns a port
    /// 3. `0.0.0.0:8080`
    fn load_listen_addr() -> String {
        if let Ok(listen) = env::var("LISTEN") {
            return listen;
        }

        let port = env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        format!("0.0.0.0:{port}")
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `max_ingests` is outside 1-10000
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `max_upload_bytes` is zero
    pub fn validate(&self) -> Result<()> {
        if self.max_ingests == 0 || self.max_ingests > MAX_CAPACITY {
            anyhow::bail!(
                "MAX_INGESTS must be between 1 and {}, got {}",
                MAX_CAPACITY,
                self.max_ingests
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

        if self.max_upload_bytes == 0 {
            anyhow::bail!("MAX_UPLOAD_BYTES must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Max ingests: {}", self.max_ingests);

        match self.ingest_secret {
            Some(ref secret) => {
                tracing::info!("  Ingest secret: {} (enabled)", mask_secret(secret))
            }
            None => tracing::info!("  Ingest secret: disabled"),
        }

        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Rate limiting: {}", self.rate_limit_enabled);
        tracing::info!("  Max upload size: {} bytes", self.max_upload_bytes);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for logging, keeping only its length visible.
///
/// - `s3cret` → `******`
/// - secrets longer than 8 characters are shown as `***…(<len> chars)`
pub fn mask_secret(secret: &str) -> String {
    let len = secret.chars().count();
    if len <= 8 {
        "*".repeat(len)
    } else {
        format!("***…({len} chars)")
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
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
