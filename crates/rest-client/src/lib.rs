//! Typed client for the Pixelix device REST API
//!
//! ```no_run
//! use rest_client::{Client, ClientConfig};
//!
//! # async fn example() -> Result<(), rest_client::ClientError> {
//! let client = Client::new(ClientConfig::new("http://192.168.4.1"))?;
//!
//! for entry in client.list_all_files("/").await? {
//!     println!("{}", entry.name);
//! }
//! client.set_setting("brightness", 80).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod request;
pub mod setting;

#[cfg(test)]
mod test_utils;

pub use client::Client;
pub use common::{FileEntry, FilePage};
pub use config::ClientConfig;
pub use error::ClientError;
pub use executor::{HttpExecutor, RequestExecutor};
pub use request::{FilePart, Method, Request, ResponseBody, ResponseKind};
pub use setting::SettingValue;

/// JSON acknowledgement of a mutating request; the device defines no shape for it
pub type Ack = serde_json::Value;
