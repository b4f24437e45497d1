//! Configuration and record-path infrastructure

mod xdg;

pub use xdg::{default_pid_path, default_port_path, XdgConfigStore};
