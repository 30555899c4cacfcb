//! Storage Sense - query a device's filesystem capacity and free space
//!
//! This crate reads the size of the file system holding the user's home
//! directory and the space still available on it, and formats both for display.
//!
//! # Examples
//!
//! ```rust,no_run
//! use storage_sense::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let status = StorageStatus::create()?;
//!     println!("{status}");
//!     println!("Free: {}", status.formatted_free_space());
//!     Ok(())
//! }
//! ```
//!
//! Values can also be built directly, which never fails:
//!
//! ```rust
//! use storage_sense::StorageStatus;
//!
//! let status = StorageStatus::new(1_000_000_000, 400_000_000);
//! assert_eq!(status.used_space(), 600_000_000);
//! assert_eq!(status.description(), "600 MB used out of 1 GB (60.00%)");
//! ```
//!
//! # Error Handling
//!
//! Every failure is reported as the same [`StorageError`]. The underlying
//! cause is emitted as a `tracing` event at error level and then dropped:
//!
//! ```rust
//! use storage_sense::StorageError;
//!
//! assert_eq!(StorageError.to_string(), "Failed to get storage status");
//! ```
//!
//! # Features
//!
//! - **async** (default): `StorageStatus::create_async` on the tokio blocking pool
//! - **serde**: `Serialize`/`Deserialize` for [`StorageStatus`]

#![doc(html_root_url = "https://docs.rs/storage-sense/0.1.0")]

pub mod error;
pub mod format;
pub mod storage;

// Private modules
mod utils;

pub use error::{QueryError, Result, StorageError};
pub use storage::{StorageStatus, SystemVolumeQuery, VolumeQuery};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::error::{QueryError, Result, StorageError};
    pub use crate::format::{ByteCountFormatter, ByteUnit, CountStyle};
    pub use crate::storage::{StorageStatus, SystemVolumeQuery, VolumeQuery};
}
