//! Configuration loader for the `cropcast` backend service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). By consolidating configuration logic here, we
//! avoid scattering `env::var` calls throughout the codebase.
use std::env;

use anyhow::{anyhow, Result};

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env_u16 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<u16>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Parse a required string environment variable.
macro_rules! require_env {
    ($var_name:expr) => {
        env::var($var_name)
            .map_err(|_| anyhow!("{} must be set in .env or environment", $var_name))?
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Path to the trained regressor JSON artifact.
    pub model_path: String,

    /// Port the HTTP server listens on.
    pub http_port: u16,
}

/// Load configuration from environment variables with defaults.
///
/// Required:
/// - `MODEL_PATH` – path to the trained regressor JSON artifact
///
/// Optional:
/// - `HTTP_PORT` – listen port (default: 8080)
///
/// Returns an error if any required variable is missing or invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    let model_path = require_env!("MODEL_PATH");
    let http_port = parse_env_u16!("HTTP_PORT", 8080);

    Ok(Config {
        model_path,
        http_port,
    })
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  MODEL_PATH : {}", self.model_path);
        tracing::info!("  HTTP_PORT  : {}", self.http_port);
    }
}
