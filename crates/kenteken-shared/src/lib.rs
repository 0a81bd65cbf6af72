//! # Kenteken Shared
//!
//! Wire-level types shared between the API server and its consumers: the
//! lookup response body and the `{ "error": ... }` error body with the
//! Dutch user-facing messages.

pub mod dto;
pub mod response;

pub use dto::{ApkInspection, VehicleLookupResponse};
pub use response::ErrorBody;
