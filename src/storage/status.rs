use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::{
    constants::{PERCENT_DIGITS, STORAGE_COUNT_STYLE, STORAGE_UNITS, USED_OUT_OF},
    query::{SystemVolumeQuery, VolumeQuery},
};
use crate::{
    error::{QueryError, Result, StorageError},
    format::ByteCountFormatter,
};

/// Capacity and free space of the volume holding the user's home directory.
///
/// A plain value: both figures are fixed at construction and everything else
/// is derived from them on access.
///
/// # Examples
///
/// ```rust
/// use storage_sense::StorageStatus;
///
/// let status = StorageStatus::new(2_000_000_000, 1_000_000_000);
/// assert_eq!(status.used_space(), 1_000_000_000);
/// assert_eq!(status.to_string(), "1 GB used out of 2 GB (50.00%)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StorageStatus {
    system_size: i64,
    free_space: i64,
    #[cfg_attr(feature = "serde", serde(skip, default = "StorageStatus::formatter"))]
    formatter: ByteCountFormatter,
}

impl StorageStatus {
    /// Creates a status from a system size and free space, both in bytes.
    ///
    /// No validation happens here; see [`StorageStatus::is_consistent`].
    pub const fn new(system_size: i64, free_space: i64) -> Self {
        Self { system_size, free_space, formatter: Self::formatter() }
    }

    const fn formatter() -> ByteCountFormatter {
        ByteCountFormatter::new().with_allowed_units(STORAGE_UNITS).with_count_style(STORAGE_COUNT_STYLE)
    }

    /// Queries the operating system for the storage status of the volume
    /// holding the home directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the home directory, the available capacity
    /// or the file system size cannot be determined. The cause is logged.
    pub fn create() -> Result<Self> {
        Self::create_with(&SystemVolumeQuery)
    }

    /// Same as [`StorageStatus::create`] but reads the figures from `query`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if any query fails or yields no value.
    #[tracing::instrument(name = "storage_status", level = "info", skip_all)]
    pub fn create_with<Q: VolumeQuery + ?Sized>(query: &Q) -> Result<Self> {
        match Self::read(query) {
            Ok(status) => {
                debug!(system_size = status.system_size, free_space = status.free_space, "storage status retrieved");
                Ok(status)
            }
            Err(err) => {
                error!(error = %err, "failed to get storage status");
                Err(StorageError)
            }
        }
    }

    /// Runs [`StorageStatus::create`] on the tokio blocking pool.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the query fails or the blocking task panics.
    #[cfg(feature = "async")]
    pub async fn create_async() -> Result<Self> {
        tokio::task::spawn_blocking(Self::create).await.unwrap_or_else(|err| {
            error!(error = %err, "storage status task failed");
            Err(StorageError)
        })
    }

    fn read<Q: VolumeQuery + ?Sized>(query: &Q) -> Result<Self, QueryError> {
        let home = query.home_directory()?;

        let free_space =
            query.available_capacity_for_important_usage(&home)?.ok_or(QueryError::MissingCapacity)?;
        let size = query.file_system_size(&home)?.ok_or(QueryError::MissingSystemSize)?;
        let system_size = i64::try_from(size).map_err(|_| QueryError::SizeOutOfRange(size))?;

        Ok(Self::new(system_size, free_space))
    }

    /// Size of the file system in bytes
    pub const fn system_size(&self) -> i64 {
        self.system_size
    }

    /// Free space in bytes
    pub const fn free_space(&self) -> i64 {
        self.free_space
    }

    /// Used space in bytes. Negative when free space exceeds the system size.
    pub const fn used_space(&self) -> i64 {
        self.system_size.wrapping_sub(self.free_space)
    }

    /// Used space as a fraction of the system size.
    ///
    /// A zero system size gives NaN when nothing is free and an infinity
    /// otherwise; use [`StorageStatus::checked_used_fraction`] to rule that out.
    pub fn used_fraction(&self) -> f64 {
        self.used_space() as f64 / self.system_size as f64
    }

    /// [`StorageStatus::used_fraction`], or `None` for a zero system size
    pub fn checked_used_fraction(&self) -> Option<f64> {
        (self.system_size != 0).then(|| self.used_fraction())
    }

    /// Whether both figures are non-negative and free space fits in the system size
    pub const fn is_consistent(&self) -> bool {
        self.free_space >= 0 && self.free_space <= self.system_size
    }

    /// Free space for display, e.g. `"1.2 GB"`
    pub fn formatted_free_space(&self) -> String {
        self.formatter.string_from_byte_count(self.free_space)
    }

    /// Used space for display
    pub fn formatted_used_space(&self) -> String {
        self.formatter.string_from_byte_count(self.used_space())
    }

    /// System size for display
    pub fn formatted_system_size(&self) -> String {
        self.formatter.string_from_byte_count(self.system_size)
    }

    /// Summary such as `"600 MB used out of 1 GB (60.00%)"`
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StorageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{} ({:.*}%)",
            self.formatted_used_space(),
            USED_OUT_OF,
            self.formatted_system_size(),
            PERCENT_DIGITS,
            self.used_fraction() * 100.0
        )
    }
}
