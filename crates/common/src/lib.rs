pub mod api;
pub mod path_utils;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status string of a successful device response
pub const STATUS_OK: &str = "ok";

/// Status string of a failed device response
pub const STATUS_ERROR: &str = "error";

/// One entry of a directory listing
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FileEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// "file" or "dir"
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// One page of a directory listing (GET /fs)
/// An empty `data` marks the end of the listing
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FilePage {
    pub data: Vec<FileEntry>,
}

/// Successful device response: `{"status": "ok", "data": ...}`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DataResponse<T> {
    pub status: String,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            data,
        }
    }
}

/// Failed device response: `{"status": "error", "error": {"msg": ...}}`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorResponse {
    pub status: String,
    pub error: ErrorDetail,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorDetail {
    pub msg: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            error: ErrorDetail { msg: msg.into() },
        }
    }
}

/// Response data of GET /setting without a key
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SettingKeys {
    pub keys: Vec<String>,
}

/// Response data of GET /setting?key=
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SettingEntry {
    pub key: String,
    pub value: Value,
}
