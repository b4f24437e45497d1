//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the platform clipboard, process table, and filesystem.

pub mod clipboard;
pub mod config;
pub mod process;

// Re-export adapters
pub use clipboard::ArboardClipboard;
pub use config::{default_pid_path, default_port_path, XdgConfigStore};
pub use process::create_probe;
