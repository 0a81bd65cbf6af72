//! # Kenteken Core
//!
//! The domain layer of the kentekencheck backend: the plate identifier,
//! the RDW record types, the error taxonomy, and the ports the request
//! handler depends on. This crate contains no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::SourceError;
