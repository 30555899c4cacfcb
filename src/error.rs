use std::{io, path::PathBuf};

/// Error returned when the storage status of the device cannot be retrieved.
///
/// The underlying cause is logged and then discarded, so every failure looks
/// the same to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, thiserror::Error)]
#[error("Failed to get storage status")]
pub struct StorageError;

/// Why a volume query failed.
///
/// Returned by [`VolumeQuery`](crate::storage::VolumeQuery) implementations and
/// only ever surfaced through the log.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum QueryError {
    #[error("Home directory could not be determined")]
    HomeDirectoryUnavailable,

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Volume query failed for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Volume capacity for important usage is not available")]
    MissingCapacity,

    #[error("File system size is not available")]
    MissingSystemSize,

    #[error("Value out of range: {0} bytes")]
    SizeOutOfRange(u64),

    #[error("Volume queries are not supported on this platform")]
    Unsupported,
}

impl QueryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        QueryError::Io { path: path.into(), source }
    }

    pub(crate) fn invalid_path<S: Into<String>>(msg: S) -> Self {
        QueryError::InvalidPath(msg.into())
    }
}

/// Result type for storage-sense operations
pub type Result<T, E = StorageError> = std::result::Result<T, E>;
