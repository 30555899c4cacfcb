use storage_sense::{StorageStatus, SystemVolumeQuery, VolumeQuery};

#[cfg(unix)]
#[test]
fn test_create_reads_home_volume() {
    let status = StorageStatus::create();
    assert!(status.is_ok(), "Should be able to get the storage status of the home volume");

    if let Ok(status) = status {
        assert!(status.system_size() > 0, "System size should be > 0");
        assert!(status.free_space() >= 0, "Free space should not be negative");
        assert!(status.is_consistent(), "Free space should not exceed system size");
        assert!(status.description().contains(" used out of "));
        println!("Home volume: {status}");
    }
}

#[cfg(unix)]
#[test]
fn test_create_matches_system_query() {
    let query = SystemVolumeQuery;
    let home = query.home_directory().expect("home directory should be known");
    let size = query.file_system_size(&home).unwrap().unwrap();

    let status = StorageStatus::create().unwrap();
    assert_eq!(status.system_size() as u64, size);
}

#[cfg(unix)]
#[test]
fn test_used_fraction_for_home_volume() {
    let status = StorageStatus::create().unwrap();
    let fraction = status.checked_used_fraction().expect("home volume should not be empty");

    assert!((0.0..=1.0).contains(&fraction), "Used fraction {fraction} out of range");
    assert!(status.description().ends_with(&format!("({:.2}%)", fraction * 100.0)));
}

#[cfg(all(unix, feature = "async"))]
#[tokio::test]
async fn test_create_async() {
    let status = StorageStatus::create_async().await.unwrap();
    assert!(status.system_size() > 0);
    assert!(status.is_consistent());
}

#[cfg(not(unix))]
#[test]
fn test_create_unsupported() {
    assert!(StorageStatus::create().is_err());
}
