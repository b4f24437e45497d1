//! Running service instance value object

/// A bound (or about-to-bind) receiver instance.
///
/// The authoritative on-disk projection of this value is the pair of
/// PID and port records; this struct only lives in memory for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInstance {
    pub pid: u32,
    pub address: String,
    pub port: u16,
}

impl ServiceInstance {
    /// The endpoint this instance is (or would be) listening on.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}
