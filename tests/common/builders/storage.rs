use std::path::{Path, PathBuf};

use storage_sense::{QueryError, VolumeQuery};

/// A [`VolumeQuery`] answering with fixed figures
#[derive(Debug, Clone)]
pub struct FixedVolumeQuery {
    home: Option<PathBuf>,
    capacity: Option<i64>,
    size: Option<u64>,
}

impl VolumeQuery for FixedVolumeQuery {
    fn home_directory(&self) -> Result<PathBuf, QueryError> {
        self.home.clone().ok_or(QueryError::HomeDirectoryUnavailable)
    }

    fn available_capacity_for_important_usage(&self, _path: &Path) -> Result<Option<i64>, QueryError> {
        Ok(self.capacity)
    }

    fn file_system_size(&self, _path: &Path) -> Result<Option<u64>, QueryError> {
        Ok(self.size)
    }
}

/// Builder for [`FixedVolumeQuery`], defaulting to a 1 GB volume with 400 MB free
#[derive(Debug, Clone)]
pub struct TestVolumeQueryBuilder {
    query: FixedVolumeQuery,
}

impl Default for TestVolumeQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestVolumeQueryBuilder {
    pub fn new() -> Self {
        Self {
            query: FixedVolumeQuery {
                home: Some(PathBuf::from("/home/test")),
                capacity: Some(400_000_000),
                size: Some(1_000_000_000),
            },
        }
    }

    pub fn without_home(mut self) -> Self {
        self.query.home = None;
        self
    }

    pub fn capacity(mut self, capacity: Option<i64>) -> Self {
        self.query.capacity = capacity;
        self
    }

    pub fn size(mut self, size: Option<u64>) -> Self {
        self.query.size = size;
        self
    }

    pub fn build(self) -> FixedVolumeQuery {
        self.query
    }
}
