pub mod builders;

pub use builders::storage::TestVolumeQueryBuilder;
