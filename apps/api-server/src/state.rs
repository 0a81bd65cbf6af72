//! Application state - shared across all handlers.

use std::sync::Arc;

use kenteken_core::ports::{RateLimiter, VehicleCache, VehicleDataSource};
use kenteken_infra::{FixedWindowLimiter, InMemoryVehicleCache, RdwClient};

use crate::config::AppConfig;

/// Shared application state.
///
/// Cache and limiter are process-wide singletons injected through this
/// struct rather than reached as globals, so tests can stand up isolated
/// instances and swap the upstream source for a stub.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<dyn VehicleCache>,
    pub limiter: Arc<dyn RateLimiter>,
    pub source: Arc<dyn VehicleDataSource>,
}

impl AppState {
    /// Build the application state from configuration.
    pub fn new(config: &AppConfig) -> std::io::Result<Self> {
        let source = RdwClient::new(config.rdw.clone()).map_err(std::io::Error::other)?;

        if config.rdw.app_token.is_some() {
            tracing::info!("RDW app token configured");
        } else {
            tracing::info!("No RDW app token set, using anonymous upstream quota");
        }

        Ok(Self {
            cache: Arc::new(InMemoryVehicleCache::new(config.cache.clone())),
            limiter: Arc::new(FixedWindowLimiter::new(config.rate_limit.clone())),
            source: Arc::new(source),
        })
    }
}
