//! Process liveness probe adapters

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::NixProcessProbe;
#[cfg(windows)]
pub use windows::WindowsProcessProbe;

use crate::application::ports::ProcessProbe;

/// Create the process probe for the current platform
pub fn create_probe() -> Box<dyn ProcessProbe> {
    #[cfg(unix)]
    {
        Box::new(NixProcessProbe::new())
    }
    #[cfg(windows)]
    {
        Box::new(WindowsProcessProbe::new())
    }
}
