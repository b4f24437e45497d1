//! PID record management for singleton coordination
//!
//! At most one netclip instance may own the listen role per machine. The
//! owner is named by a PID record: plain decimal text under the cache dir.
//! The record survives process death on purpose; the next invocation's
//! staleness check is the cleanup path.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use thiserror::Error;

use crate::application::ports::ProcessProbe;

/// Outcome of attempting to claim the singleton role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acquisition {
    /// No live owner existed; the current process's id is now on record
    Acquired(u32),

    /// Another live process already owns the record
    AlreadyRunning(u32),
}

/// PID record errors. Both variants are fatal startup errors.
#[derive(Debug, Error)]
pub enum PidFileError {
    #[error("Failed to access PID file: {0}")]
    Io(#[from] io::Error),

    #[error("PID file {} holds \"{content}\", not a decimal process id", .path.display())]
    Malformed { path: PathBuf, content: String },
}

/// PID record for singleton coordination
pub struct PidFile {
    path: PathBuf,
}

impl PidFile {
    /// Create a PID record manager for the given path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the PID record path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Claim the singleton role, or detect the live instance that holds it.
    ///
    /// Claiming is a single create-exclusive step, so two concurrent
    /// starters cannot both believe they own the record. When the record
    /// already exists, the stored process is probed: a live process wins
    /// and the record is left byte-for-byte untouched; a dead process (or
    /// one the probe cannot verify) leaves a stale record, which is removed
    /// before the claim is retried.
    pub fn acquire_or_detect(
        &self,
        probe: &dyn ProcessProbe,
    ) -> Result<Acquisition, PidFileError> {
        loop {
            match self.try_claim() {
                Ok(pid) => return Ok(Acquisition::Acquired(pid)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
                Err(e) => return Err(PidFileError::Io(e)),
            }

            let stored = match self.read_record() {
                Ok(pid) => pid,
                // Record vanished between the claim attempt and the read;
                // treat it as another claim opportunity.
                Err(PidFileError::Io(e)) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e),
            };

            match probe.is_alive(stored) {
                Ok(true) => return Ok(Acquisition::AlreadyRunning(stored)),
                // An unverifiable record is indistinguishable from a stale
                // one, so both fall through to removal.
                Ok(false) | Err(_) => self.remove_stale()?,
            }
        }
    }

    /// Atomically create the record holding the current process id
    fn try_claim(&self) -> io::Result<u32> {
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path)?;
        let pid = process::id();
        write!(file, "{}", pid)?;
        Ok(pid)
    }

    /// Read and parse the stored process id
    fn read_record(&self) -> Result<u32, PidFileError> {
        let content = fs::read_to_string(&self.path)?;
        content
            .trim()
            .parse()
            .map_err(|_| PidFileError::Malformed {
                path: self.path.clone(),
                content: content.trim().to_string(),
            })
    }

    /// Remove a stale record; a record already gone is fine
    fn remove_stale(&self) -> Result<(), PidFileError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PidFileError::Io(e)),
        }
    }
}
