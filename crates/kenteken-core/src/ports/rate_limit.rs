//! Rate limiting port.

use async_trait::async_trait;
use std::time::Duration;

/// Rate limiter trait - a per-client-key request quota.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Record a request for `key` and decide whether it is allowed.
    async fn check(&self, key: &str) -> RateLimitDecision;

    /// Remove bookkeeping for windows that have already elapsed. Called
    /// periodically by a background sweep to bound steady-state memory.
    async fn purge_expired(&self);
}

/// Result of a rate limit check.
#[derive(Debug, Clone)]
pub struct RateLimitDecision {
    pub allowed: bool,
    /// Time until the client's window resets.
    pub retry_after: Duration,
}
