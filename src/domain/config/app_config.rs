//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Address the listener binds when none is configured (all interfaces).
pub const DEFAULT_ADDRESS: &str = "0.0.0.0";

/// Well-known listen port used when none is configured.
pub const DEFAULT_PORT: u16 = 8733;

/// Largest message a single connection may accumulate (16 MiB).
pub const DEFAULT_MAX_MESSAGE_BYTES: u64 = 16 * 1024 * 1024;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub address: Option<String>,
    pub port: Option<u16>,
    pub random_port: Option<bool>,
    pub pid_file: Option<PathBuf>,
    pub port_file: Option<PathBuf>,
    pub max_message_bytes: Option<u64>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            address: Some(DEFAULT_ADDRESS.to_string()),
            port: Some(DEFAULT_PORT),
            random_port: Some(false),
            pid_file: None,
            port_file: None,
            max_message_bytes: Some(DEFAULT_MAX_MESSAGE_BYTES),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            address: other.address.or(self.address),
            port: other.port.or(self.port),
            random_port: other.random_port.or(self.random_port),
            pid_file: other.pid_file.or(self.pid_file),
            port_file: other.port_file.or(self.port_file),
            max_message_bytes: other.max_message_bytes.or(self.max_message_bytes),
        }
    }

    /// Get the listen address, or the all-interfaces default
    pub fn address_or_default(&self) -> &str {
        self.address.as_deref().unwrap_or(DEFAULT_ADDRESS)
    }

    /// Get the listen port, or the well-known default
    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Get the random-port setting, or false if not set
    pub fn random_port_or_default(&self) -> bool {
        self.random_port.unwrap_or(false)
    }

    /// Get the message size cap, or the default if not set
    pub fn max_message_bytes_or_default(&self) -> usize {
        self.max_message_bytes.unwrap_or(DEFAULT_MAX_MESSAGE_BYTES) as usize
    }
}
