//! Simulator of the Pixelix device REST API

mod config;
mod constants;
mod handlers;
mod state;
mod store;

use actix_web::{web, App, HttpServer};
use common::api::BASE_URI;
use config::SimConfig;
use state::AppState;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Filter out actix-server worker lifecycle messages
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "info,actix_server::worker=warn,actix_server::accept=warn",
                )
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting Pixelix device simulator (PID: {})",
        std::process::id()
    );

    let config = SimConfig::load()?;
    let bind_address = config.bind_address();
    let state = web::Data::new(AppState::seeded(config.page_size));

    info!(
        "Serving {} on http://{} ({} entries per listing page)",
        BASE_URI, bind_address, config.page_size
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(web::scope(BASE_URI).configure(handlers::configure))
    })
    .bind(&bind_address)
    .map_err(|e| {
        error!("Failed to bind to {}: {}", bind_address, e);
        e
    })?;

    server.workers(1).run().await
}
