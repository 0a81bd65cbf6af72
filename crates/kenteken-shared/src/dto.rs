//! Data Transfer Objects - response types for the lookup API.

use serde::{Deserialize, Serialize};

use kenteken_core::domain::{AxleRecord, FuelRecord, VehicleData, VehicleRecord};

/// One historical APK (periodic inspection) entry.
///
/// The upstream history source is not wired yet, so `apkHistory` is always
/// empty on the wire, but the shape is part of the contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApkInspection {
    pub inspection_date: String,
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_repair: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defects: Option<Vec<String>>,
}

/// Body of a successful `GET /vehicle/{plate}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleLookupResponse {
    pub vehicle: Option<VehicleRecord>,
    pub fuel: Option<FuelRecord>,
    pub axles: Vec<AxleRecord>,
    #[serde(rename = "apkHistory")]
    pub apk_history: Vec<ApkInspection>,
}

impl From<VehicleData> for VehicleLookupResponse {
    fn from(data: VehicleData) -> Self {
        Self {
            vehicle: data.vehicle,
            fuel: data.fuel,
            axles: data.axles,
            apk_history: Vec::new(),
        }
    }
}
