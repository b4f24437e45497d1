//! Unix process probe using signal 0

use nix::errno::Errno;
use nix::sys::signal::kill;
use nix::unistd::Pid;

use crate::application::ports::{ProbeError, ProcessProbe};

/// Process probe backed by `kill(pid, 0)`
pub struct NixProcessProbe;

impl NixProcessProbe {
    /// Create a new probe
    pub fn new() -> Self {
        Self
    }
}

impl Default for NixProcessProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessProbe for NixProcessProbe {
    fn is_alive(&self, pid: u32) -> Result<bool, ProbeError> {
        // Signal 0 performs the permission and existence checks without
        // delivering anything to the target.
        match kill(Pid::from_raw(pid as i32), None) {
            Ok(()) => Ok(true),
            Err(Errno::ESRCH) => Ok(false),
            Err(e) => Err(ProbeError::LookupFailed(e.to_string())),
        }
    }
}
