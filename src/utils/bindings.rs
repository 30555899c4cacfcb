//! FFI bindings to the volume APIs of the host system.
//!
//! Raw `libc` calls stay in this module; everything else in the crate works
//! with [`VolumeStats`].

use std::path::Path;

use crate::error::QueryError;

//------------------------------------------------------------------------------
// statvfs(3)
//------------------------------------------------------------------------------

/// Block counts of a mounted file system, already widened to `u64`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VolumeStats {
    /// Fragment size, the unit of the block counts
    pub fragment_size: u64,
    /// Total data blocks in the file system
    pub blocks: u64,
    /// Free blocks available to unprivileged users
    pub blocks_available: u64,
}

impl VolumeStats {
    pub(crate) fn total_bytes(&self) -> Option<u64> {
        self.blocks.checked_mul(self.fragment_size)
    }

    pub(crate) fn available_bytes(&self) -> Option<u64> {
        self.blocks_available.checked_mul(self.fragment_size)
    }
}

/// Reads the statistics of the file system containing `path`.
#[cfg(unix)]
#[allow(clippy::useless_conversion)]
pub(crate) fn statvfs(path: &Path) -> Result<VolumeStats, QueryError> {
    use std::{ffi::CString, io, mem::MaybeUninit, os::unix::ffi::OsStrExt};

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| QueryError::invalid_path(path.display().to_string()))?;
    let mut stat = MaybeUninit::<libc::statvfs>::uninit();

    let result = unsafe { libc::statvfs(c_path.as_ptr(), stat.as_mut_ptr()) };
    if result != 0 {
        return Err(QueryError::io(path, io::Error::last_os_error()));
    }

    let stat = unsafe { stat.assume_init() };

    // Field widths differ between targets (u32 on some 32-bit platforms)
    Ok(VolumeStats {
        fragment_size: u64::from(stat.f_frsize),
        blocks: u64::from(stat.f_blocks),
        blocks_available: u64::from(stat.f_bavail),
    })
}

#[cfg(not(unix))]
pub(crate) fn statvfs(_path: &Path) -> Result<VolumeStats, QueryError> {
    Err(QueryError::Unsupported)
}
