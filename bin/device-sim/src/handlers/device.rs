use crate::state::AppState;
use actix_web::{get, web, HttpResponse, Result as ActixResult};
use common::DataResponse;
use tracing::info;

/// Plugin instances of all display slots
#[get("/display/slots")]
pub async fn display_slots(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    info!("GET /display/slots");
    Ok(HttpResponse::Ok().json(DataResponse::ok(&state.slots)))
}

#[get("/sensors")]
pub async fn sensors(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    info!("GET /sensors");
    Ok(HttpResponse::Ok().json(DataResponse::ok(&state.sensors)))
}
