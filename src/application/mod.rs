//! Application layer - Use cases and port interfaces
//!
//! Contains the core receive operation and trait definitions
//! for external system interactions.

pub mod ports;
pub mod receive;

// Re-export use cases
pub use receive::{ReceiveError, ReceiveUseCase};
