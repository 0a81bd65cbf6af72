//! Application configuration loaded from environment variables.

use std::env;

use kenteken_infra::{CacheConfig, RateLimitConfig, RdwConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub rdw: RdwConfig,
    pub cache: CacheConfig,
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// Load configuration from environment variables. Values are read once
    /// at startup; the core logic never touches the environment again.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            rdw: RdwConfig::from_env(),
            cache: CacheConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
        }
    }
}
