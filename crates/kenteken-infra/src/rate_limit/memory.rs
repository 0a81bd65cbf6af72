//! In-memory fixed-window rate limiter.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use kenteken_core::ports::{RateLimitDecision, RateLimiter};

/// Fixed-window rate limiter configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per window per client key.
    pub max_requests: u32,
    /// Window duration.
    pub window: Duration,
    /// Hard cap on distinct tracked client keys.
    pub max_keys: usize,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window: Duration::from_secs(60),
            max_keys: 10_000,
        }
    }
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_requests: std::env::var("RATE_LIMIT_MAX_REQUESTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_requests),
            window: std::env::var("RATE_LIMIT_WINDOW_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.window),
            max_keys: std::env::var("RATE_LIMIT_MAX_KEYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_keys),
        }
    }
}

struct Window {
    count: u32,
    reset_at: Instant,
}

/// Fixed-window counter keyed by client identifier.
///
/// Each key gets a quota per wall-clock window; the counter resets on the
/// first request after the window deadline. The tracked-key cap is a
/// denial-of-service safety valve: a new key arriving at cap triggers an
/// expired-window sweep, and if the map is still full the request is
/// denied. Process memory wins over serving a burst of unique new
/// clients.
pub struct FixedWindowLimiter {
    windows: RwLock<HashMap<String, Window>>,
    config: RateLimitConfig,
}

impl FixedWindowLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            windows: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Number of tracked client keys, expired windows included.
    pub async fn tracked_keys(&self) -> usize {
        self.windows.read().await.len()
    }
}

#[async_trait]
impl RateLimiter for FixedWindowLimiter {
    async fn check(&self, key: &str) -> RateLimitDecision {
        let now = Instant::now();
        let mut windows = self.windows.write().await;

        if let Some(window) = windows.get_mut(key) {
            if now < window.reset_at {
                window.count = window.count.saturating_add(1);
                return RateLimitDecision {
                    allowed: window.count <= self.config.max_requests,
                    retry_after: window.reset_at.duration_since(now),
                };
            }
        }

        // First request for this key, or its window has elapsed. Starting
        // a fresh window only grows the map for genuinely new keys, so the
        // cap check is limited to those.
        if !windows.contains_key(key) && windows.len() >= self.config.max_keys {
            windows.retain(|_, window| now < window.reset_at);
            if windows.len() >= self.config.max_keys {
                tracing::warn!(
                    tracked = windows.len(),
                    "rate limiter at key cap, denying new client"
                );
                return RateLimitDecision {
                    allowed: false,
                    retry_after: self.config.window,
                };
            }
        }

        windows.insert(
            key.to_string(),
            Window {
                count: 1,
                reset_at: now + self.config.window,
            },
        );
        RateLimitDecision {
            allowed: true,
            retry_after: self.config.window,
        }
    }

    async fn purge_expired(&self) {
        let now = Instant::now();
        let mut windows = self.windows.write().await;
        let before = windows.len();
        windows.retain(|_, window| now < window.reset_at);
        let purged = before - windows.len();
        if purged > 0 {
            tracing::debug!(purged, tracked = windows.len(), "purged expired rate windows");
        }
    }
}
