//! Process liveness port interface

use thiserror::Error;

/// Liveness probe errors
#[derive(Debug, Clone, Error)]
pub enum ProbeError {
    #[error("Process lookup failed: {0}")]
    LookupFailed(String),
}

/// Port for checking whether a process is alive.
///
/// A probe failure (e.g. permission denied) means the answer is unknown;
/// callers decide how to treat an unverifiable process.
pub trait ProcessProbe: Send + Sync {
    /// Report whether the process with the given id is currently running.
    fn is_alive(&self, pid: u32) -> Result<bool, ProbeError>;
}
