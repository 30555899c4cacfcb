use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

use crate::{error::QueryError, utils::bindings};

/// Source of the volume figures a [`StorageStatus`](super::StorageStatus) is built from.
///
/// [`SystemVolumeQuery`] asks the operating system; tests and callers with
/// their own data source can provide another implementation and hand it to
/// [`StorageStatus::create_with`](super::StorageStatus::create_with).
#[cfg_attr(test, automock)]
pub trait VolumeQuery: Send + Sync + std::fmt::Debug {
    /// Path whose volume is measured, the user's home directory
    fn home_directory(&self) -> Result<PathBuf, QueryError>;

    /// Free bytes on the volume containing `path`, excluding space the system
    /// keeps for itself. `Ok(None)` means the figure is not available.
    fn available_capacity_for_important_usage(&self, path: &Path) -> Result<Option<i64>, QueryError>;

    /// Total size in bytes of the file system containing `path`
    fn file_system_size(&self, path: &Path) -> Result<Option<u64>, QueryError>;
}

/// [`VolumeQuery`] backed by `statvfs(3)`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemVolumeQuery;

impl VolumeQuery for SystemVolumeQuery {
    fn home_directory(&self) -> Result<PathBuf, QueryError> {
        dirs::home_dir().ok_or(QueryError::HomeDirectoryUnavailable)
    }

    fn available_capacity_for_important_usage(&self, path: &Path) -> Result<Option<i64>, QueryError> {
        // Blocks available to unprivileged users leave out the root reserve
        match bindings::statvfs(path)?.available_bytes() {
            Some(bytes) => i64::try_from(bytes).map(Some).map_err(|_| QueryError::SizeOutOfRange(bytes)),
            None => Ok(None),
        }
    }

    fn file_system_size(&self, path: &Path) -> Result<Option<u64>, QueryError> {
        Ok(bindings::statvfs(path)?.total_bytes())
    }
}
