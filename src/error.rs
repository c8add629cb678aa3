//! Error types for `taskdeck`.

/// Errors that can occur in the task and settings stores.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON parsing error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML parsing error occurred.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A `SQLite` database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A task title was empty or whitespace-only.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// A task index did not refer to an existing entry.
    #[error("no task at index {index} (list has {len} tasks)")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of entries in the list.
        len: usize,
    },

    /// Biometric authentication was requested but is not available.
    #[error("biometric authentication is not available on this device")]
    BiometricsUnavailable,

    /// The data directory could not be determined.
    #[error("could not determine the home directory for data storage")]
    NoDataDir,
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
