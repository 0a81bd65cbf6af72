//! Request-scoped plumbing: error-to-HTTP mapping.

pub mod error;

pub use error::{AppError, AppResult};
