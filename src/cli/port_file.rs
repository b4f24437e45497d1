//! Port record management
//!
//! The port record names the port the running instance is bound to. It is
//! only written when the OS assigned the port (`--random-port`); with an
//! explicit port there is nothing to discover, so nothing is persisted.
//! Later invocations that find a live owner read it back for reporting.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Port record errors
#[derive(Debug, Error)]
pub enum PortFileError {
    #[error("Failed to access port file: {0}")]
    Io(#[from] io::Error),

    #[error("Port file {} holds \"{content}\", not a port number", .path.display())]
    Malformed { path: PathBuf, content: String },
}

/// Port record: plain decimal text, world-readable so senders on the same
/// machine can look the port up
pub struct PortFile {
    path: PathBuf,
}

impl PortFile {
    /// Create a port record manager for the given path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the port record path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create or overwrite the record with the given port
    pub fn save(&self, port: u16) -> Result<(), PortFileError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        let mut file = options.open(&self.path)?;
        write!(file, "{}", port)?;
        Ok(())
    }

    /// Read the recorded port, or None when no record exists
    pub fn load(&self) -> Result<Option<u16>, PortFileError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        content
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| PortFileError::Malformed {
                path: self.path.clone(),
                content: content.trim().to_string(),
            })
    }
}
