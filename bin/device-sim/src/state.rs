//! Simulator application state

use crate::store::{FileStore, SettingsStore};
use serde_json::{json, Value};
use std::sync::Mutex;

pub struct AppState {
    pub files: Mutex<FileStore>,
    pub settings: Mutex<SettingsStore>,
    /// Response data of GET /display/slots
    pub slots: Value,
    /// Response data of GET /sensors
    pub sensors: Value,
    pub page_size: usize,
}

impl AppState {
    /// Empty device: no files, no settings
    #[cfg(test)]
    pub fn new(page_size: usize) -> Self {
        Self {
            files: Mutex::new(FileStore::default()),
            settings: Mutex::new(SettingsStore::default()),
            slots: json!({ "slots": [] }),
            sensors: json!({ "sensors": [] }),
            page_size,
        }
    }

    /// Device with a factory-like configuration
    pub fn seeded(page_size: usize) -> Self {
        let mut files = FileStore::default();
        files.insert(
            "/configuration.json",
            json!({ "version": 1, "hostname": "pixelix" }).to_string(),
        );
        files.insert(
            "/configuration/12.json",
            json!({ "format": "%H:%M" }).to_string(),
        );

        let settings = SettingsStore::with_defaults([
            ("hostname".to_string(), json!("pixelix")),
            ("brightness".to_string(), json!(50)),
            ("auto_brightness_ctrl".to_string(), json!(true)),
            ("timezone".to_string(), json!("CET-1CEST,M3.5.0,M10.5.0/3")),
            ("ntp_server".to_string(), json!("pool.ntp.org")),
            ("scroll_pause".to_string(), json!(80)),
        ]);

        Self {
            files: Mutex::new(files),
            settings: Mutex::new(settings),
            slots: json!({
                "slots": [
                    { "name": "DateTimePlugin", "uid": 12, "alias": "", "isLocked": false, "duration": 30000 },
                    { "name": "JustTextPlugin", "uid": 34, "alias": "greeting", "isLocked": false, "duration": 10000 },
                    { "name": "", "uid": 0, "alias": "", "isLocked": false, "duration": 0 }
                ]
            }),
            sensors: json!({
                "sensors": [
                    {
                        "name": "SHT3x",
                        "available": true,
                        "channels": [
                            { "type": "temperature", "unit": "C" },
                            { "type": "humidity", "unit": "%" }
                        ]
                    },
                    {
                        "name": "LDR",
                        "available": true,
                        "channels": [{ "type": "illuminance", "unit": "lux" }]
                    }
                ]
            }),
            page_size,
        }
    }
}
