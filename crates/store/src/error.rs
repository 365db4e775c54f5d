//! Error types for snapshot store operations.

use std::path::PathBuf;

/// Errors that can occur while reading or writing a snapshot store.
///
/// The widget read path never surfaces these: [`SnapshotReader`] logs them
/// and falls back to the default snapshot. They reach callers only on the
/// write path.
///
/// [`SnapshotReader`]: crate::SnapshotReader
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An I/O error on the store file.
    #[error("I/O error on widget store {path}: {source}")]
    Io {
        /// The store file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The store file is not valid JSON.
    #[error("widget store {path} is not valid JSON: {source}")]
    Parse {
        /// The store file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The store file holds JSON that is not an object.
    #[error("widget store {path} does not hold a JSON object")]
    NotAnObject {
        /// The store file.
        path: PathBuf,
    },

    /// Entries could not be serialized.
    #[error("failed to serialize widget entries: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The platform has no data directory to put the default store in.
    #[error("could not determine data directory")]
    NoDataDirectory,
}

/// A specialized Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
