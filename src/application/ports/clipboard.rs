//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),
}

/// Port for clipboard operations
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Write bytes to the system clipboard.
    ///
    /// # Arguments
    /// * `data` - The bytes to place on the clipboard
    ///
    /// # Returns
    /// Ok(()) on success, error otherwise. Failures are not retried.
    async fn write(&self, data: &[u8]) -> Result<(), ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl Clipboard for Box<dyn Clipboard> {
    async fn write(&self, data: &[u8]) -> Result<(), ClipboardError> {
        self.as_ref().write(data).await
    }
}
