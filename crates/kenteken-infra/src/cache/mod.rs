//! Response cache implementations.

mod memory;

pub use memory::{CacheConfig, InMemoryVehicleCache};
