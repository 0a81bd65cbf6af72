//! HTTP handlers and route configuration.

mod health;
mod vehicle;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/vehicle/{plate}", web::get().to(vehicle::lookup));
}
