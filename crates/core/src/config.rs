//! Client configuration for the payroll backend connection.
//!
//! The engine itself never talks to the backend; it only carries the
//! connection handle into each command's execution context. Settings come
//! from a YAML file, default `~/.paycmd/config.yml`, with environment
//! variable overrides for scripting setups.

use std::fs::File;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default path for the client configuration file
const DEFAULT_CONFIG_PATH: &str = "~/.paycmd/config.yml";

/// Environment variable overriding the configuration file path
pub const CONFIG_PATH_VARIABLE: &str = "PAYCMD_CONFIG";
/// Environment variable overriding the backend URL
pub const BACKEND_URL_VARIABLE: &str = "PAYCMD_BACKEND_URL";

const fn default_request_timeout() -> u64 {
    100
}

/// Connection handle to the payroll backend, passed opaquely to commands.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Connection {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Connection {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            api_key: None,
            request_timeout: default_request_timeout(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Config {
    pub connection: Option<Connection>,
}

/// Resolves the configuration file path.
///
/// An explicit argument wins, then the `PAYCMD_CONFIG` environment
/// variable, then the default path. Shell expansions like `~` are resolved.
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path.clone(),
        None => std::env::var(CONFIG_PATH_VARIABLE)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string()),
    };

    shellexpand::tilde(&config_path).to_string()
}

/// Loads the client configuration.
///
/// A missing file is not an error: the engine runs without a backend
/// connection and commands that need one report that themselves.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or contains
/// invalid YAML.
pub fn load_config(config_path: &str) -> Result<Config> {
    if !Path::new(config_path).exists() {
        debug!("No client configuration at `{config_path}`");
        return Ok(Config::default());
    }

    let reader = File::open(config_path)
        .map_err(|e| Error::io_error("config", config_path, e))?;

    serde_yaml::from_reader(reader)
        .map_err(|e| Error::yaml_error("reading", "config", config_path, e))
}

/// Resolves the backend connection from configuration and environment.
///
/// The `PAYCMD_BACKEND_URL` environment variable supplies a connection when
/// the configuration has none.
pub fn resolve_connection(config: &Config) -> Option<Connection> {
    if let Some(connection) = &config.connection {
        return Some(connection.clone());
    }

    std::env::var(BACKEND_URL_VARIABLE).ok().map(Connection::new)
}
