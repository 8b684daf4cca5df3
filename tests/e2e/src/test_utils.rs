use anyhow::{Context, Result};
use common::api::{BASE_URI, SENSORS_ENDPOINT};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;
use tokio::time::sleep;

/// Create `count` local text files, returning their paths and contents
pub fn create_test_files(dir: &Path, count: usize) -> Result<Vec<(PathBuf, String)>> {
    fs::create_dir_all(dir)?;
    (0..count)
        .map(|i| {
            let file_path = dir.join(format!("file{}.txt", i));
            let content = format!("Test file {} content\n", i);
            fs::write(&file_path, &content)
                .with_context(|| format!("Failed to create test file: {:?}", file_path))?;
            Ok((file_path, content))
        })
        .collect()
}

pub async fn wait_for_device(url: &str) -> Result<()> {
    let client = reqwest::Client::new();
    let probe_url = format!("{}{}{}", url, BASE_URI, SENSORS_ENDPOINT);

    println!("Waiting for device to be ready...");
    for i in 0..30 {
        match client.get(&probe_url).send().await {
            Ok(response) if response.status().is_success() => {
                println!("Device is ready!");
                return Ok(());
            }
            _ => {
                if i < 29 {
                    sleep(Duration::from_secs(1)).await;
                }
            }
        }
    }

    anyhow::bail!("Device did not become ready within 30 seconds");
}

/// Run the CLI against the device and return its stdout
pub fn run_cli(client_binary: &Path, device_url: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(client_binary)
        .args(args)
        .arg("--host")
        .arg(device_url)
        .output()
        .with_context(|| format!("Failed to run client binary: {:?}", client_binary))?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "`pixelix {}` failed:\nSTDOUT: {}\nSTDERR: {}",
            args.join(" "),
            stdout,
            stderr
        );
    }

    Ok(stdout)
}

pub fn cleanup_test_data(test_data_dir: &Path) -> Result<()> {
    if test_data_dir.exists() {
        fs::remove_dir_all(test_data_dir)
            .with_context(|| format!("Failed to remove {:?}", test_data_dir))?;
    }
    Ok(())
}
