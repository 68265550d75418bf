//! Storage backend errors.

use std::fmt;

/// Failure surfaced by a storage backend.
///
/// Only writes report errors; unreadable entries are indistinguishable from
/// absent ones at the port boundary.
#[derive(Debug, Clone)]
pub enum StorageError {
    /// The backing medium could not be prepared for use.
    Unavailable(String),
    /// The backing medium rejected the value (quota, permissions, I/O).
    WriteFailed(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "storage unavailable: {msg}"),
            Self::WriteFailed(msg) => write!(f, "storage write failed: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}
