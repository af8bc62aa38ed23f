//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages:
//!
//! - [`StorageError`] - localStorage persistence failures

use std::fmt;

/// Persistence errors for localStorage-backed stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// localStorage not available (private browsing, disabled, no window).
    Unavailable,
    /// Failed to serialize a record to JSON.
    SerializationFailed,
    /// Failed to write to storage (quota exceeded, denied).
    WriteFailed,
    /// Failed to remove a key from storage.
    RemoveFailed,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "localStorage not available"),
            Self::SerializationFailed => write!(f, "failed to serialize record to JSON"),
            Self::WriteFailed => write!(f, "failed to write to localStorage"),
            Self::RemoveFailed => write!(f, "failed to remove from localStorage"),
        }
    }
}

impl std::error::Error for StorageError {}
