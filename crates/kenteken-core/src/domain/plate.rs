//! Normalized Dutch license plate identifier.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Raw input is limited to ten characters, dashes included.
const MAX_RAW_LEN: usize = 10;

/// The plate did not match `[A-Z0-9-]{1,10}` (case-insensitive), or was
/// nothing but dashes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid plate format: {0:?}")]
pub struct InvalidPlate(pub String);

/// A normalized plate: uppercase, dashes stripped, 1-10 chars of `[A-Z0-9]`.
///
/// Every cache and rate-limit key derives from this canonical form, so
/// `AB-123-CD` and `ab123cd` collapse to the same entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Plate(String);

impl Plate {
    /// Validate raw user input and normalize it.
    pub fn parse(raw: &str) -> Result<Self, InvalidPlate> {
        if raw.is_empty() || raw.len() > MAX_RAW_LEN {
            return Err(InvalidPlate(raw.to_string()));
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(InvalidPlate(raw.to_string()));
        }

        let normalized: String = raw
            .chars()
            .filter(|c| *c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if normalized.is_empty() {
            return Err(InvalidPlate(raw.to_string()));
        }

        Ok(Plate(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
