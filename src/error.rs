//! Error types for the input core.
//!
//! Only window lifecycle operations are fallible. Input bookkeeping
//! (queries, ingestion, callback registration) never errors: an unknown
//! window or out-of-range code degrades to a safe default instead.

use crate::window::WindowId;
use thiserror::Error;

/// Result type alias for latchio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during window lifecycle operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The id does not name an open window.
    #[error("unknown window {0}")]
    UnknownWindow(WindowId),

    /// No window currently holds the cursor lock.
    #[error("no cursor lock is held")]
    NoCursorLock,
}
