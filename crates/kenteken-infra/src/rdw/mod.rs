//! RDW open-data gateway.

mod client;

pub use client::{RdwClient, RdwConfig};
