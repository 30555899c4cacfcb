//! Storage status of the device.
//!
//! [`StorageStatus`] holds the size of the file system containing the user's
//! home directory and the free space on it. The figures come from a
//! [`VolumeQuery`]; [`SystemVolumeQuery`] reads them from the operating system.

/// Constants for storage status display
pub mod constants;

mod query;
mod status;


#[cfg(test)]
pub(crate) use query::MockVolumeQuery;
pub use query::{SystemVolumeQuery, VolumeQuery};
pub use status::StorageStatus;
