//! Checks device state through the library client

use anyhow::{Context, Result};
use rest_client::{Client, ClientError};
use serde_json::Value;

pub async fn validate_listing(client: &Client, dir: &str, expected: &[String]) -> Result<()> {
    let entries = client
        .list_all_files(dir)
        .await
        .with_context(|| format!("Failed to list {}", dir))?;
    let mut names: Vec<String> = entries.into_iter().map(|entry| entry.name).collect();
    names.sort();

    let mut expected = expected.to_vec();
    expected.sort();
    anyhow::ensure!(
        names == expected,
        "Listing of {} mismatch: expected {:?}, got {:?}",
        dir,
        expected,
        names
    );

    println!("  ✓ {} lists {} files", dir, names.len());
    Ok(())
}

pub async fn validate_content(client: &Client, path: &str, expected: &str) -> Result<()> {
    let content = client
        .read_file(path)
        .await
        .with_context(|| format!("Failed to read {}", path))?;
    anyhow::ensure!(
        content == expected,
        "Content of {} mismatch: expected {:?}, got {:?}",
        path,
        expected,
        content
    );

    println!("  ✓ {} has the uploaded content", path);
    Ok(())
}

pub async fn validate_removed(client: &Client, path: &str) -> Result<()> {
    match client.read_file(path).await {
        Err(ClientError::Status { status: 404, .. }) => {
            println!("  ✓ {} is gone", path);
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("Unexpected error reading {}", path)),
        Ok(_) => anyhow::bail!("{} still exists after removal", path),
    }
}

pub async fn validate_setting(client: &Client, key: &str, expected: &Value) -> Result<()> {
    let response = client
        .get_setting_by_key(key)
        .await
        .with_context(|| format!("Failed to get setting {}", key))?;
    let value = &response["data"]["value"];
    anyhow::ensure!(
        value == expected,
        "Setting {} mismatch: expected {}, got {}",
        key,
        expected,
        value
    );

    println!("  ✓ {} = {}", key, value);
    Ok(())
}
