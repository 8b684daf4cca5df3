//! In-memory file system and settings of the simulated device

use common::path_utils::{normalize_dir, normalize_path};
use common::FileEntry;
use serde_json::{Number, Value};
use std::collections::BTreeMap;

const KIND_FILE: &str = "file";
const KIND_DIR: &str = "dir";

/// Flat map of absolute path to text content.
/// Directories exist implicitly through the files below them.
#[derive(Debug, Default)]
pub struct FileStore {
    files: BTreeMap<String, String>,
}

impl FileStore {
    pub fn insert(&mut self, path: &str, content: String) {
        self.files.insert(normalize_path(path), content);
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(&normalize_path(path)).map(String::as_str)
    }

    /// Returns false if there was no such file
    pub fn remove(&mut self, path: &str) -> bool {
        self.files.remove(&normalize_path(path)).is_some()
    }

    /// Direct children of `dir`, sorted by name
    pub fn list(&self, dir: &str) -> Vec<FileEntry> {
        let prefix = normalize_dir(dir);
        let mut entries: BTreeMap<String, FileEntry> = BTreeMap::new();

        for (path, content) in self.files.range(prefix.clone()..) {
            let Some(rest) = path.strip_prefix(&prefix) else {
                break;
            };

            match rest.split_once('/') {
                Some((child, _)) => {
                    let name = format!("{}{}", prefix, child);
                    entries.entry(name.clone()).or_insert(FileEntry {
                        name,
                        size: None,
                        kind: Some(KIND_DIR.to_string()),
                    });
                }
                None => {
                    entries.insert(
                        path.clone(),
                        FileEntry {
                            name: path.clone(),
                            size: Some(content.len() as u64),
                            kind: Some(KIND_FILE.to_string()),
                        },
                    );
                }
            }
        }

        entries.into_values().collect()
    }

    /// One page of `list`; pages past the end are empty
    pub fn page(&self, dir: &str, page: usize, page_size: usize) -> Vec<FileEntry> {
        let Some(start) = page.checked_mul(page_size) else {
            return Vec::new();
        };
        self.list(dir)
            .into_iter()
            .skip(start)
            .take(page_size)
            .collect()
    }
}

/// Why a setting could not be changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingError {
    UnknownKey,
    TypeMismatch(&'static str),
}

impl SettingError {
    pub fn message(&self) -> String {
        match self {
            SettingError::UnknownKey => "Unknown setting key".to_string(),
            SettingError::TypeMismatch(expected) => format!("Value must be a {}", expected),
        }
    }
}

impl std::fmt::Display for SettingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Settings keyed by name. A setting keeps the JSON type it was created with.
#[derive(Debug, Default)]
pub struct SettingsStore {
    values: BTreeMap<String, Value>,
}

impl SettingsStore {
    pub fn with_defaults(defaults: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self {
            values: defaults.into_iter().collect(),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Set a setting from its query string form
    pub fn set(&mut self, key: &str, raw: &str) -> Result<(), SettingError> {
        let current = self.values.get_mut(key).ok_or(SettingError::UnknownKey)?;
        *current = parse_like(current, raw)?;
        Ok(())
    }
}

fn parse_like(current: &Value, raw: &str) -> Result<Value, SettingError> {
    match current {
        Value::Bool(_) => raw
            .parse::<bool>()
            .map(Value::Bool)
            .map_err(|_| SettingError::TypeMismatch("boolean")),
        Value::Number(number) if number.is_f64() => raw
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or(SettingError::TypeMismatch("number")),
        Value::Number(_) => raw
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| SettingError::TypeMismatch("integer")),
        Value::String(_) => Ok(Value::String(raw.to_string())),
        _ => serde_json::from_str(raw).map_err(|_| SettingError::TypeMismatch("JSON value")),
    }
}
