//! Upstream gateway port.

use async_trait::async_trait;

use crate::domain::{Plate, VehicleData};
use crate::error::SourceError;

/// Upstream vehicle-data gateway. One call fans out to the vehicle, fuel
/// and axle collections and joins the results.
///
/// All-or-nothing by policy: if any collection fails, so does the whole
/// fetch. A vehicle view without fuel/axle context is considered
/// incomplete, so no partial results are ever returned.
#[async_trait]
pub trait VehicleDataSource: Send + Sync {
    async fn fetch_vehicle_data(&self, plate: &Plate) -> Result<VehicleData, SourceError>;
}
