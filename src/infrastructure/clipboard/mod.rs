//! Clipboard infrastructure module
//!
//! Provides cross-platform clipboard support using arboard.

mod arboard;

pub use arboard::ArboardClipboard;
