//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod cache;
mod rate_limit;
mod source;

pub use cache::VehicleCache;
pub use rate_limit::{RateLimitDecision, RateLimiter};
pub use source::VehicleDataSource;
