use storage_sense::StorageStatus;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    println!("Storage Sense - Storage Status Example\n");

    let status = StorageStatus::create_async().await?;

    println!("System size: {} bytes ({})", status.system_size(), status.formatted_system_size());
    println!("Free space: {} bytes ({})", status.free_space(), status.formatted_free_space());
    println!("Used space: {} bytes ({})", status.used_space(), status.formatted_used_space());
    println!("\n{status}");

    Ok(())
}
