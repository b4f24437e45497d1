//! Configuration value objects

mod app_config;

pub use app_config::{AppConfig, DEFAULT_ADDRESS, DEFAULT_MAX_MESSAGE_BYTES, DEFAULT_PORT};
