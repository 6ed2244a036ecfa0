//! # Geoblog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod config;
mod cors;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().context("Invalid configuration")?;

    tracing::info!(
        "Starting Geoblog API Server on {}:{}",
        config.host,
        config.port
    );

    // A database we cannot reach is fatal; nothing is served without it.
    let state = AppState::connect(&config.database)
        .await
        .context("Could not connect to database")?;

    let server_state = state.clone();
    let cors_config = config.cors.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors::build_cors(&cors_config))
            .app_data(web::Data::new(server_state.clone()))
            .configure(handlers::configure_routes)
            .default_service(web::route().to(handlers::route_not_found))
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("Could not bind {}:{}", config.host, config.port))?
    .run()
    .await
    .context("HTTP server failed")?;

    state.shutdown().await;

    Ok(())
}
