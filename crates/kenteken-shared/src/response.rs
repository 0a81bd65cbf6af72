//! The error body of the lookup API.
//!
//! Every error response is `{ "error": "<message>" }` with a sanitized,
//! Dutch user-facing message. Upstream error detail stays in the server
//! logs and never reaches the caller verbatim.

use serde::{Deserialize, Serialize};

/// Wire-level error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// 400 - the plate failed validation.
    pub fn invalid_plate() -> Self {
        Self::new("Ongeldig kenteken formaat")
    }

    /// 429 - the client exhausted its request quota.
    pub fn too_many_requests() -> Self {
        Self::new("Te veel verzoeken. Probeer het later opnieuw.")
    }

    /// 502 - the upstream payload did not match its schema.
    pub fn bad_upstream_data() -> Self {
        Self::new("Ongeldige respons van RDW API")
    }

    /// 503 - the upstream service is unavailable.
    pub fn upstream_unavailable() -> Self {
        Self::new("RDW API is tijdelijk niet beschikbaar. Probeer het later opnieuw.")
    }

    /// 500 - anything else.
    pub fn internal() -> Self {
        Self::new("Kon voertuiggegevens niet ophalen")
    }
}
