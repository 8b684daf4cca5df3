use crate::handlers::error::{handle_error, handle_not_found, handle_server_error};
use crate::handlers::upload_form::UploadForm;
use crate::state::AppState;
use actix_multipart::form::MultipartForm;
use actix_web::{delete, get, post, web, HttpResponse, Result as ActixResult};
use common::api::ROOT_DIR;
use common::path_utils::{normalize_path, validate_path};
use common::DataResponse;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

fn default_dir() -> String {
    ROOT_DIR.to_string()
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_dir")]
    pub dir: String,
    #[serde(default)]
    pub page: usize,
}

#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub path: String,
}

/// List one page of a directory
#[get("/fs")]
pub async fn list_files(
    query: web::Query<ListQuery>,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let ListQuery { dir, page } = query.into_inner();
    info!(dir = ?dir, page, "GET /fs");

    let entries = state
        .files
        .lock()
        .map_err(|e| handle_server_error("File store unavailable", e))?
        .page(&dir, page, state.page_size);

    Ok(HttpResponse::Ok().json(DataResponse::ok(entries)))
}

/// Return the raw file content
#[get("/fs/file")]
pub async fn read_file(
    query: web::Query<PathQuery>,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let path = &query.path;
    info!(path = ?path, "GET /fs/file");
    validate_path(path).map_err(|e| handle_error("Invalid path", e))?;

    let files = state
        .files
        .lock()
        .map_err(|e| handle_server_error("File store unavailable", e))?;
    let content = files
        .get(path)
        .ok_or_else(|| handle_not_found("File not found", path))?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain")
        .body(content.to_string()))
}

/// Store an uploaded file under its file name
#[post("/fs/file")]
pub async fn write_file(
    form: MultipartForm<UploadForm>,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let path = form
        .target_path()
        .map_err(|e| handle_error("Invalid upload", e))?;
    validate_path(path).map_err(|e| handle_error("Invalid path", e))?;
    let path = normalize_path(path);
    info!(path = ?path, size = form.file.size, "POST /fs/file");

    // Size is already limited by #[multipart(limit = "1MB")] in UploadForm
    let content = std::fs::read_to_string(form.file.file.path())
        .map_err(|e| handle_error("Failed to read uploaded file", e))?;

    state
        .files
        .lock()
        .map_err(|e| handle_server_error("File store unavailable", e))?
        .insert(&path, content);

    Ok(HttpResponse::Ok().json(DataResponse::ok(json!({}))))
}

#[delete("/fs/file")]
pub async fn remove_file(
    query: web::Query<PathQuery>,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let path = &query.path;
    info!(path = ?path, "DELETE /fs/file");
    validate_path(path).map_err(|e| handle_error("Invalid path", e))?;

    let removed = state
        .files
        .lock()
        .map_err(|e| handle_server_error("File store unavailable", e))?
        .remove(path);
    if !removed {
        return Err(handle_not_found("File not found", path));
    }

    Ok(HttpResponse::Ok().json(DataResponse::ok(json!({}))))
}
