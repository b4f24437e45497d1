//! Windows process probe using OpenProcess

use windows_sys::Win32::Foundation::{CloseHandle, STILL_ACTIVE};
use windows_sys::Win32::System::Threading::{
    GetExitCodeProcess, OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION,
};

use crate::application::ports::{ProbeError, ProcessProbe};

/// Process probe backed by the Win32 process API
pub struct WindowsProcessProbe;

impl WindowsProcessProbe {
    /// Create a new probe
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsProcessProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessProbe for WindowsProcessProbe {
    fn is_alive(&self, pid: u32) -> Result<bool, ProbeError> {
        unsafe {
            let handle = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, 0, pid);
            if handle.is_null() {
                // No handle at all: the process id is not in the table
                return Ok(false);
            }

            let mut exit_code: u32 = 0;
            let ok = GetExitCodeProcess(handle, &mut exit_code);
            CloseHandle(handle);

            if ok == 0 {
                return Err(ProbeError::LookupFailed(
                    "GetExitCodeProcess failed".to_string(),
                ));
            }

            // A handle to an exited process stays openable until released,
            // so the exit code decides liveness.
            Ok(exit_code == STILL_ACTIVE as u32)
        }
    }
}
