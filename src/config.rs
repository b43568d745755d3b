//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Every variable is optional; the defaults reproduce the stock deployment
//! (port 3000, logs under `./logs`).
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export LOG_DIR="logs"
//! export RUST_LOG="info"
//! export LOG_FORMAT="text"
//! export SERVICE_NAME="calculator-microservice"
//! export NUMBER_PARSING="lenient"
//! ```
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `LOG_DIR` - Directory for `error.log` and `combined.log` (default: `logs`)
//! - `RUST_LOG` - Console log filter (default: `info`)
//! - `LOG_FORMAT` - Console format: `text` or `json` (default: `text`)
//! - `SERVICE_NAME` - Service tag attached to every log event
//!   (default: `calculator-microservice`)
//! - `NUMBER_PARSING` - `lenient` accepts a numeric prefix such as `5abc`,
//!   `strict` requires the whole value to be numeric (default: `lenient`)

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::{EventSink, NumberParsing};

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_SERVICE_NAME: &str = "calculator-microservice";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_dir: PathBuf,
    pub log_level: String,
    pub log_format: String,
    /// Value of the `service` field on every log event.
    pub service_name: String,
    pub number_parsing: NumberParsing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            number_parsing: NumberParsing::default(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `NUMBER_PARSING` is set to an unknown mode.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        let log_dir = env::var("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR));
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let service_name =
            env::var("SERVICE_NAME").unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string());

        let number_parsing = match env::var("NUMBER_PARSING") {
            Ok(value) => value
                .parse::<NumberParsing>()
                .map_err(anyhow::Error::msg)
                .context("Invalid NUMBER_PARSING")?,
            Err(_) => NumberParsing::default(),
        };

        Ok(Self {
            listen_addr,
            log_dir,
            log_level,
            log_format,
            service_name,
            number_parsing,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not a `host:port` socket address
    /// - `log_format` is not `text` or `json`
    /// - `log_dir` or `service_name` is empty
    pub fn validate(&self) -> Result<()> {
        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.log_dir.as_os_str().is_empty() {
            anyhow::bail!("LOG_DIR must not be empty");
        }

        if self.service_name.trim().is_empty() {
            anyhow::bail!("SERVICE_NAME must not be empty");
        }

        Ok(())
    }

    /// Logs a configuration summary through `sink`.
    pub fn print_summary(&self, sink: &dyn EventSink) {
        sink.info("Configuration loaded:");
        sink.info(&format!("  Listen address: {}", self.listen_addr));
        sink.info(&format!("  Log directory: {}", self.log_dir.display()));
        sink.info(&format!("  Log level: {}", self.log_level));
        sink.info(&format!("  Log format: {}", self.log_format));
        sink.info(&format!("  Service name: {}", self.service_name));
        sink.info(&format!(
            "  Number parsing: {}",
            self.number_parsing.as_str()
        ));
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable has an invalid value.
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
