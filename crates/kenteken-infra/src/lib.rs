//! # Kenteken Infrastructure
//!
//! Concrete implementations of the ports defined in `kenteken-core`:
//! the RDW open-data HTTP client, the in-memory response cache, and the
//! in-memory fixed-window rate limiter.
//!
//! Cache and limiter are per-process. A horizontally scaled deployment
//! gets one of each per instance; coordinating them across instances
//! would need an external shared store, which is out of scope.

pub mod cache;
pub mod rate_limit;
pub mod rdw;

pub use cache::{CacheConfig, InMemoryVehicleCache};
pub use rate_limit::{FixedWindowLimiter, RateLimitConfig};
pub use rdw::{RdwClient, RdwConfig};
