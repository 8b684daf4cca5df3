//! Display slots, sensors and settings

use crate::output::print_json;
use anyhow::{Context, Result};
use log::info;
use rest_client::{Client, SettingValue};

pub async fn slots(client: &Client) -> Result<()> {
    let slots = client
        .get_plugin_instances()
        .await
        .context("Failed to get plugin instances")?;
    print_json(&slots)
}

pub async fn sensors(client: &Client) -> Result<()> {
    let sensors = client.get_sensors().await.context("Failed to get sensors")?;
    print_json(&sensors)
}

pub async fn setting_keys(client: &Client) -> Result<()> {
    let keys = client
        .get_setting_keys()
        .await
        .context("Failed to get setting keys")?;
    print_json(&keys)
}

pub async fn get_setting(client: &Client, key: &str) -> Result<()> {
    let setting = client
        .get_setting_by_key(key)
        .await
        .with_context(|| format!("Failed to get setting {}", key))?;
    print_json(&setting)
}

/// Set a setting; `raw_value` is typed the way the command line reads it
pub async fn set_setting(client: &Client, key: &str, raw_value: &str) -> Result<()> {
    let value: SettingValue = raw_value.parse().unwrap_or_else(|never| match never {});
    info!("Setting {} to {:?}", key, value);

    let ack = client
        .set_setting(key, value)
        .await
        .with_context(|| format!("Failed to set setting {}", key))?;
    print_json(&ack)
}
