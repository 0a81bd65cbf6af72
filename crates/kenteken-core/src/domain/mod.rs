//! Domain types: the plate identifier and the RDW record shapes.

mod plate;
mod records;

pub use plate::{InvalidPlate, Plate};
pub use records::{AxleRecord, FuelRecord, VehicleData, VehicleRecord};
