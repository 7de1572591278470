//! # Store Error Types
//!
//! Error types for snapshot persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds the snapshot path for context         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller surfaces it; in-memory state stays last-known-good             │
//! │                                                                         │
//! │  NOTE: "not found" is deliberately absent. Commands on a missing id    │
//! │  are no-ops by contract, not errors.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Snapshot persistence errors.
///
/// The only failure class the store can report: every command either
/// persists fully or changes nothing.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading the snapshot file failed.
    ///
    /// ## When This Occurs
    /// - File permissions issue at startup
    /// - Disk/media error
    #[error("failed to read snapshot {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the snapshot file failed.
    ///
    /// ## When This Occurs
    /// - Storage quota exceeded / disk full
    /// - Target directory missing or not writable
    #[error("failed to write snapshot {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file exists but is not a valid store blob.
    ///
    /// ## When This Occurs
    /// - Truncated or hand-edited file
    /// - Data written by an incompatible schema (no migrations exist)
    #[error("snapshot {path:?} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the in-memory state failed.
    ///
    /// Should be unreachable for these types; kept so the save path never
    /// panics.
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_include_path() {
        let err = StoreError::Write {
            path: PathBuf::from("/data/store.json"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        let msg = err.to_string();
        assert!(msg.contains("store.json"));
        assert!(msg.contains("disk full"));
    }
}
