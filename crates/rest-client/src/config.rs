//! Client configuration

use common::api::BASE_URI;

/// Where the device lives. An empty hostname yields URLs relative to
/// the base URI, which only a same-origin executor can resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    hostname: String,
}

impl ClientConfig {
    /// Create a configuration for the given hostname, e.g. `http://192.168.4.1`
    pub fn new(hostname: impl Into<String>) -> Self {
        let hostname = hostname.into().trim_end_matches('/').to_string();
        Self { hostname }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn base_uri(&self) -> &str {
        BASE_URI
    }

    /// Full URL of an endpoint below the base URI
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.hostname, BASE_URI, path)
    }
}
