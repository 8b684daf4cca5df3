use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use common::ErrorResponse;
use tracing::error;

/// Error with the device's JSON error envelope as body
fn json_error(status: StatusCode, msg: String) -> actix_web::Error {
    let response = HttpResponse::build(status).json(ErrorResponse::new(msg.clone()));
    InternalError::from_response(msg, response).into()
}

/// Helper function for bad request errors
pub fn handle_error<E: std::fmt::Display>(msg: &str, e: E) -> actix_web::Error {
    error!("{}: {}", msg, e);
    json_error(StatusCode::BAD_REQUEST, format!("{}: {}", msg, e))
}

/// Helper function for server errors
pub fn handle_server_error<E: std::fmt::Display>(msg: &str, e: E) -> actix_web::Error {
    error!("{}: {}", msg, e);
    json_error(StatusCode::INTERNAL_SERVER_ERROR, format!("{}: {}", msg, e))
}

/// Helper function for not found errors
pub fn handle_not_found(msg: &str, id: &str) -> actix_web::Error {
    error!("{}: {}", msg, id);
    json_error(StatusCode::NOT_FOUND, format!("{}: {}", msg, id))
}
