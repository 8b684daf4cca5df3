//! CLI configuration

use crate::constants::{DEFAULT_HOST, DEFAULT_TIMEOUT_SECS, HOST_ENV, TIMEOUT_ENV};
use anyhow::{Context, Result};
use rest_client::{Client, ClientConfig, HttpExecutor};
use std::sync::Arc;
use std::time::Duration;

/// Resolved connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Device URL
    pub host: String,
    /// Request timeout
    pub timeout: Duration,
}

impl CliConfig {
    /// Resolve settings
    /// Priority: command-line args > environment variables > defaults
    pub fn resolve(host: Option<String>, timeout_secs: Option<u64>) -> Result<Self> {
        Self::resolve_with(
            host,
            timeout_secs,
            std::env::var(HOST_ENV).ok(),
            std::env::var(TIMEOUT_ENV).ok(),
        )
    }

    fn resolve_with(
        host: Option<String>,
        timeout_secs: Option<u64>,
        env_host: Option<String>,
        env_timeout: Option<String>,
    ) -> Result<Self> {
        let host = host
            .or(env_host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let timeout_secs = match (timeout_secs, env_timeout) {
            (Some(secs), _) => secs,
            (None, Some(value)) => value
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {}", TIMEOUT_ENV, value))?,
            (None, None) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            host,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Build a REST client for the configured device
    pub fn build_client(&self) -> Result<Client> {
        let executor = HttpExecutor::with_timeout(Some(self.timeout))
            .context("Failed to create HTTP client")?;
        Ok(Client::with_executor(
            ClientConfig::new(self.host.as_str()),
            Arc::new(executor),
        ))
    }
}
