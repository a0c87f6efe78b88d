//! Configuration management for the contact directory server.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read with `dotenvy`, which never writes to stdout (MCP uses stdout
//! for communication).

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the contact directory server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default file used by the save and load tools when no path is given
    pub contacts_file: Option<PathBuf>,

    /// Load `contacts_file` at startup if it exists (default: true)
    pub autoload: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_FILE`: Default path of the contact file
    /// - `CONTACTS_AUTOLOAD`: Load `CONTACTS_FILE` on startup (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();
        Self::from_current_env()
    }

    /// Read configuration from the process environment without touching `.env`.
    pub fn from_current_env() -> ConfigResult<Self> {
        let contacts_file = match env::var("CONTACTS_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACTS_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(val) => Some(PathBuf::from(val)),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACTS_FILE".to_string(),
                    reason: "Must be valid unicode".to_string(),
                })
            }
        };

        let autoload = Self::parse_env_bool("CONTACTS_AUTOLOAD", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            contacts_file,
            autoload,
            log_level,
        })
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: None,
            autoload: true,
            log_level: "error".to_string(),
        }
    }
}
