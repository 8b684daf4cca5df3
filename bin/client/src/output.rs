use anyhow::{Context, Result};
use serde_json::Value;

/// Print a device response as pretty JSON
pub fn print_json(value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to format response")?;
    println!("{}", text);
    Ok(())
}
