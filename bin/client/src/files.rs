use crate::output::print_json;
use anyhow::{anyhow, Context, Result};
use common::path_utils::normalize_path;
use common::FileEntry;
use log::info;
use rest_client::Client;
use std::fs;
use std::path::Path;

/// List a directory, either one page or all of it
pub async fn list(client: &Client, dir: &str, page: Option<u32>) -> Result<()> {
    let entries = match page {
        Some(page) => {
            client
                .list_files(dir, page)
                .await
                .with_context(|| format!("Failed to list page {} of {}", page, dir))?
                .data
        }
        None => client
            .list_all_files(dir)
            .await
            .with_context(|| format!("Failed to list {}", dir))?,
    };

    info!("Listed {} entries in {}", entries.len(), dir);
    for entry in &entries {
        println!("{}", format_entry(entry));
    }
    Ok(())
}

/// Print a file or save it locally
pub async fn cat(client: &Client, path: &str, output: Option<&Path>) -> Result<()> {
    let content = client
        .read_file(path)
        .await
        .with_context(|| format!("Failed to read {}", path))?;

    match output {
        Some(output) => {
            fs::write(output, &content)
                .with_context(|| format!("Failed to write {:?}", output))?;
            info!("Saved {} to {:?}", path, output);
        }
        None => print!("{}", content),
    }
    Ok(())
}

/// Upload a local text file
pub async fn put(client: &Client, local: &Path, remote: Option<&str>) -> Result<()> {
    let content = fs::read_to_string(local)
        .with_context(|| format!("Failed to read local file: {:?}", local))?;
    let remote = match remote {
        Some(remote) => remote.to_string(),
        None => default_remote_path(local)?,
    };

    let ack = client
        .write_file(&remote, &content)
        .await
        .with_context(|| format!("Failed to upload {}", remote))?;

    info!("Uploaded {:?} to {}", local, remote);
    print_json(&ack)
}

pub async fn remove(client: &Client, path: &str) -> Result<()> {
    let ack = client
        .remove_file(path)
        .await
        .with_context(|| format!("Failed to remove {}", path))?;

    info!("Removed {}", path);
    print_json(&ack)
}

/// "/" followed by the local file name
fn default_remote_path(local: &Path) -> Result<String> {
    let name = local
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("Cannot derive a remote path from {:?}", local))?;
    Ok(normalize_path(name))
}

fn format_entry(entry: &FileEntry) -> String {
    let size = entry
        .size
        .map(|size| size.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:<4} {:>8}  {}",
        entry.kind.as_deref().unwrap_or("?"),
        size,
        entry.name
    )
}
