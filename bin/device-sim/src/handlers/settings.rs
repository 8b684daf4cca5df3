use crate::handlers::error::{handle_error, handle_not_found, handle_server_error};
use crate::state::AppState;
use crate::store::SettingError;
use actix_web::{get, post, web, HttpResponse, Result as ActixResult};
use common::path_utils::validate_key;
use common::{DataResponse, SettingEntry, SettingKeys};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct KeyQuery {
    pub key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetQuery {
    pub key: String,
    pub value: String,
}

/// Key list without `key`, the single setting with it
#[get("/setting")]
pub async fn get_setting(
    query: web::Query<KeyQuery>,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let Some(key) = query.into_inner().key else {
        info!("GET /setting");
        return setting_keys(&state);
    };
    info!(key = ?key, "GET /setting");
    validate_key(&key).map_err(|e| handle_error("Invalid key", e))?;

    let value = state
        .settings
        .lock()
        .map_err(|e| handle_server_error("Settings unavailable", e))?
        .get(&key)
        .cloned()
        .ok_or_else(|| handle_not_found("Unknown setting key", &key))?;

    Ok(HttpResponse::Ok().json(DataResponse::ok(SettingEntry { key, value })))
}

/// Key list, as served by the device firmware
#[get("/settings")]
pub async fn list_settings(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    info!("GET /settings");
    setting_keys(&state)
}

#[post("/setting")]
pub async fn set_setting(
    query: web::Query<SetQuery>,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let SetQuery { key, value } = query.into_inner();
    info!(key = ?key, value = ?value, "POST /setting");
    validate_key(&key).map_err(|e| handle_error("Invalid key", e))?;

    state
        .settings
        .lock()
        .map_err(|e| handle_server_error("Settings unavailable", e))?
        .set(&key, &value)
        .map_err(|e| match e {
            SettingError::UnknownKey => handle_not_found(&e.message(), &key),
            SettingError::TypeMismatch(_) => handle_error("Invalid value", e),
        })?;

    Ok(HttpResponse::Ok().json(DataResponse::ok(json!({}))))
}

fn setting_keys(state: &AppState) -> ActixResult<HttpResponse> {
    let keys = state
        .settings
        .lock()
        .map_err(|e| handle_server_error("Settings unavailable", e))?
        .keys();
    Ok(HttpResponse::Ok().json(DataResponse::ok(SettingKeys { keys })))
}
