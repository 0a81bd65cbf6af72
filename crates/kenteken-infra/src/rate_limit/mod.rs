//! Rate limiter implementations.

mod memory;

pub use memory::{FixedWindowLimiter, RateLimitConfig};
