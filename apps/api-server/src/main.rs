//! # Kentekencheck API Server
//!
//! Actix-web front end for Dutch vehicle-registration lookups against the
//! RDW open-data service, with per-client rate limiting and an in-process
//! response cache.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod background;
mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use background::{Scheduler, SchedulerConfig};
use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

/// Sweep cadence for expired rate-limit windows.
const PURGE_SCHEDULE: &str = "0 */5 * * * *";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting kentekencheck API server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config)?;

    // Independent of request handling, purge expired rate-limit windows
    // every five minutes so steady-state memory stays bounded even when
    // the key cap is never hit.
    let scheduler = Scheduler::new(SchedulerConfig::from_env())
        .await
        .map_err(std::io::Error::other)?;
    let limiter = state.limiter.clone();
    scheduler
        .add_cron(PURGE_SCHEDULE, move || {
            let limiter = limiter.clone();
            async move {
                limiter.purge_expired().await;
            }
        })
        .await
        .map_err(std::io::Error::other)?;
    scheduler.start().await.map_err(std::io::Error::other)?;

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
