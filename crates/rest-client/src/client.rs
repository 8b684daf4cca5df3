use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::executor::{HttpExecutor, RequestExecutor};
use crate::request::{FilePart, Method, Request, ResponseKind};
use crate::setting::SettingValue;
use crate::Ack;
use common::api::{
    DISPLAY_SLOTS_ENDPOINT, FS_ENDPOINT, FS_FILE_ENDPOINT, ROOT_DIR, SENSORS_ENDPOINT,
    SETTING_ENDPOINT, UPLOAD_FIELD, UPLOAD_MIME,
};
use common::{FileEntry, FilePage};
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Client for the device REST API
///
/// Each operation builds one request and hands it to the executor.
/// The configuration cannot change once the client exists.
#[derive(Clone)]
pub struct Client {
    config: ClientConfig,
    executor: Arc<dyn RequestExecutor>,
}

impl Client {
    /// Create a client that talks HTTP through `reqwest`
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::with_executor(config, Arc::new(HttpExecutor::new()?)))
    }

    /// Create a client on top of any executor
    pub fn with_executor(config: ClientConfig, executor: Arc<dyn RequestExecutor>) -> Self {
        Self { config, executor }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// List one page of a directory
    pub async fn list_files(&self, dir: &str, page: u32) -> Result<FilePage, ClientError> {
        let request = self
            .request(Method::Get, FS_ENDPOINT, ResponseKind::Json)
            .query("dir", dir)
            .query("page", page);
        self.send_as(request).await
    }

    /// List a whole directory by fetching pages 0, 1, 2, ... until one comes back empty.
    /// Pages are fetched one at a time; the first failure aborts the listing.
    pub async fn list_all_files(&self, dir: &str) -> Result<Vec<FileEntry>, ClientError> {
        let mut entries = Vec::new();
        let mut page = 0;

        loop {
            let listing = self.list_files(dir, page).await?;
            if listing.data.is_empty() {
                debug!("Listed {} entries of {} in {} pages", entries.len(), dir, page);
                return Ok(entries);
            }
            entries.extend(listing.data);
            page += 1;
        }
    }

    /// First page of the root directory
    pub async fn list_root(&self) -> Result<FilePage, ClientError> {
        self.list_files(ROOT_DIR, 0).await
    }

    /// Every entry of the root directory, see [`Client::list_all_files`]
    pub async fn list_all_root(&self) -> Result<Vec<FileEntry>, ClientError> {
        self.list_all_files(ROOT_DIR).await
    }

    /// Read a file, returning its raw content
    pub async fn read_file(&self, path: &str) -> Result<String, ClientError> {
        let request = self
            .request(Method::Get, FS_FILE_ENDPOINT, ResponseKind::Raw)
            .query("path", path);
        Ok(self.executor.execute(request).await?.into_text())
    }

    /// Upload `content` as a file named `path`
    pub async fn write_file(&self, path: &str, content: &str) -> Result<Ack, ClientError> {
        let request = self
            .request(Method::Post, FS_FILE_ENDPOINT, ResponseKind::Json)
            .file_part(FilePart {
                field: UPLOAD_FIELD.to_string(),
                file_name: path.to_string(),
                mime: UPLOAD_MIME.to_string(),
                content: content.to_string(),
            });
        self.send(request).await
    }

    pub async fn remove_file(&self, path: &str) -> Result<Ack, ClientError> {
        let request = self
            .request(Method::Delete, FS_FILE_ENDPOINT, ResponseKind::Json)
            .query("path", path);
        self.send(request).await
    }

    /// Plugin instances installed in the display slots
    pub async fn get_plugin_instances(&self) -> Result<Value, ClientError> {
        self.send(self.request(Method::Get, DISPLAY_SLOTS_ENDPOINT, ResponseKind::Json))
            .await
    }

    pub async fn get_sensors(&self) -> Result<Value, ClientError> {
        self.send(self.request(Method::Get, SENSORS_ENDPOINT, ResponseKind::Json))
            .await
    }

    pub async fn get_setting_keys(&self) -> Result<Value, ClientError> {
        self.send(self.request(Method::Get, SETTING_ENDPOINT, ResponseKind::Json))
            .await
    }

    pub async fn get_setting_by_key(&self, key: &str) -> Result<Value, ClientError> {
        let request = self
            .request(Method::Get, SETTING_ENDPOINT, ResponseKind::Json)
            .query("key", key);
        self.send(request).await
    }

    pub async fn set_setting(
        &self,
        key: &str,
        value: impl Into<SettingValue>,
    ) -> Result<Ack, ClientError> {
        let value: SettingValue = value.into();

        let request = self
            .request(Method::Post, SETTING_ENDPOINT, ResponseKind::Json)
            .query("key", key)
            .query("value", value);
        self.send(request).await
    }

    fn request(&self, method: Method, endpoint: &str, response: ResponseKind) -> Request {
        Request::new(method, self.config.endpoint(endpoint), response)
    }

    async fn send(&self, request: Request) -> Result<Value, ClientError> {
        let url = request.url.clone();
        self.executor.execute(request).await?.into_json(&url)
    }

    async fn send_as<T: DeserializeOwned>(&self, request: Request) -> Result<T, ClientError> {
        let url = request.url.clone();
        let value = self.send(request).await?;
        serde_json::from_value(value).map_err(|source| ClientError::Decode { url, source })
    }
}
