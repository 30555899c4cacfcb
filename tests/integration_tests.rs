mod common;
mod integration;

use common::TestVolumeQueryBuilder;
use storage_sense::prelude::*;

#[test]
fn test_create_with_custom_query() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let query = TestVolumeQueryBuilder::new().build();

    let status = StorageStatus::create_with(&query)?;
    assert_eq!(status.system_size(), 1_000_000_000);
    assert_eq!(status.free_space(), 400_000_000);
    assert_eq!(status.to_string(), "600 MB used out of 1 GB (60.00%)");

    Ok(())
}

#[test]
fn test_create_with_trait_object() {
    let query: Box<dyn VolumeQuery> = Box::new(TestVolumeQueryBuilder::new().capacity(Some(0)).build());

    let status = StorageStatus::create_with(&*query).unwrap();
    assert_eq!(status.used_fraction(), 1.0);
    assert!(status.description().ends_with("(100.00%)"));
}

#[test]
fn test_every_failure_reads_the_same() {
    let failing = [
        TestVolumeQueryBuilder::new().without_home().build(),
        TestVolumeQueryBuilder::new().capacity(None).build(),
        TestVolumeQueryBuilder::new().size(None).build(),
        TestVolumeQueryBuilder::new().size(Some(u64::MAX)).build(),
    ];

    for query in &failing {
        let err = StorageStatus::create_with(query).unwrap_err();
        assert_eq!(err, StorageError);
        assert_eq!(err.to_string(), "Failed to get storage status");
    }
}
