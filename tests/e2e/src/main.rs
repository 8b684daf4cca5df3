mod device_validator;
mod test_utils;

use anyhow::{Context, Result};
use rest_client::{Client, ClientConfig};
use serde_json::json;
use std::path::{Path, PathBuf};
use test_utils::*;
use tracing::warn;

/// More files than one listing page holds with the simulator's default page size
const TEST_FILES_COUNT: usize = 7;

const REMOTE_DIR: &str = "/e2e";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("e2e_tests=debug,info")
        .init();

    let device_url =
        std::env::var("DEVICE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .and_then(Path::parent)
        .context("Failed to locate workspace root")?
        .to_path_buf();
    let client_binary = workspace_root.join("target").join("release").join("pixelix");
    let test_data_dir = manifest_dir.join("test_data");

    println!("Device URL: {}", device_url);
    println!("Client binary: {:?}", client_binary);

    wait_for_device(&device_url).await?;

    let client = Client::new(ClientConfig::new(device_url.as_str()))?;
    let test_files = create_test_files(&test_data_dir.join("test_files"), TEST_FILES_COUNT)?;

    let result = run_tests(&client, &client_binary, &device_url, &test_files).await;

    // Always cleanup, even on error
    for (local, _) in &test_files {
        let remote = remote_path(local);
        if client.remove_file(&remote).await.is_err() {
            warn!("Could not remove {} (already removed?)", remote);
        }
    }
    if let Err(e) = cleanup_test_data(&test_data_dir) {
        eprintln!("Warning: Failed to cleanup test data: {}", e);
    }

    result?;
    println!("\n✅ All E2E tests passed!");
    Ok(())
}

async fn run_tests(
    client: &Client,
    client_binary: &Path,
    device_url: &str,
    test_files: &[(PathBuf, String)],
) -> Result<()> {
    let remote_paths: Vec<String> = test_files
        .iter()
        .map(|(local, _)| remote_path(local))
        .collect();

    println!("\n📤 Testing upload...");
    for ((local, _), remote) in test_files.iter().zip(&remote_paths) {
        let local = local.to_string_lossy();
        run_cli(
            client_binary,
            device_url,
            &["put", &*local, "--remote", remote.as_str()],
        )?;
    }
    device_validator::validate_listing(client, REMOTE_DIR, &remote_paths).await?;
    println!("✅ Upload validation passed");

    println!("\n📂 Testing paginated listing through the CLI...");
    let listing = run_cli(client_binary, device_url, &["ls", REMOTE_DIR])?;
    let listed = listing.lines().filter(|line| !line.trim().is_empty()).count();
    anyhow::ensure!(
        listed == TEST_FILES_COUNT,
        "Expected {} listed files, got {}:\n{}",
        TEST_FILES_COUNT,
        listed,
        listing
    );
    println!("✅ Listing validation passed");

    println!("\n📥 Testing read...");
    let (_, first_content) = &test_files[0];
    let content = run_cli(client_binary, device_url, &["cat", remote_paths[0].as_str()])?;
    anyhow::ensure!(
        &content == first_content,
        "Read back {:?}, expected {:?}",
        content,
        first_content
    );
    device_validator::validate_content(client, &remote_paths[0], first_content).await?;
    println!("✅ Read validation passed");

    println!("\n🗑️  Testing remove...");
    run_cli(client_binary, device_url, &["rm", remote_paths[0].as_str()])?;
    device_validator::validate_removed(client, &remote_paths[0]).await?;
    device_validator::validate_listing(client, REMOTE_DIR, &remote_paths[1..]).await?;
    println!("✅ Remove validation passed");

    println!("\n⚙️  Testing settings...");
    run_cli(client_binary, device_url, &["set", "brightness", "42"])?;
    device_validator::validate_setting(client, "brightness", &json!(42)).await?;
    let keys = run_cli(client_binary, device_url, &["settings"])?;
    anyhow::ensure!(
        keys.contains("brightness"),
        "Setting keys do not contain brightness:\n{}",
        keys
    );
    println!("✅ Settings validation passed");

    Ok(())
}

fn remote_path(local: &Path) -> String {
    let name = local
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    format!("{}/{}", REMOTE_DIR, name)
}
