//! Config store port interface

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for loading persisted configuration
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the configuration, returning an empty config if none exists
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Path of the backing config file
    fn path(&self) -> PathBuf;

    /// Whether a config file exists
    fn exists(&self) -> bool;
}
