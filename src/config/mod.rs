//! Typed configuration from environment variables.
//!
//! Loads once at startup, fails fast if required vars are missing.
//! The library never reads the environment on its own; binaries opt in.

use crate::credentials::Credentials;
use crate::error::{Error, Result};

const DEFAULT_PORT: &str = "9091";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: String,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `PUSHPROM_HOST` (required)
    /// - `PUSHPROM_PORT` (default `9091`)
    /// - `LOG_LEVEL` (default `info`)
    ///
    /// In local dev, call `dotenvy::dotenv().ok()` before this.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: required_var("PUSHPROM_HOST")?,
            port: std::env::var("PUSHPROM_PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.host, &self.port)
    }
}

fn required_var(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::Config(format!("required environment variable {name} is not set")))
}
