//! HTTP client for the RDW open-data service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use kenteken_core::domain::{AxleRecord, FuelRecord, Plate, VehicleData, VehicleRecord};
use kenteken_core::error::SourceError;
use kenteken_core::ports::VehicleDataSource;

// Socrata dataset identifiers on opendata.rdw.nl.
const VEHICLE_DATASET: &str = "m9d7-ebf2";
const FUEL_DATASET: &str = "8ys7-d773";
const AXLE_DATASET: &str = "3huj-srit";

const APP_TOKEN_HEADER: &str = "X-App-Token";

/// RDW client configuration.
#[derive(Debug, Clone)]
pub struct RdwConfig {
    pub base_url: String,
    /// Optional Socrata app token. Anonymous access works too, at a lower
    /// upstream quota, so absence is not an error.
    pub app_token: Option<String>,
    /// Overall deadline per upstream request.
    pub timeout: Duration,
}

impl Default for RdwConfig {
    fn default() -> Self {
        Self {
            base_url: "https://opendata.rdw.nl/resource".to_string(),
            app_token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl RdwConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("RDW_BASE_URL").unwrap_or(defaults.base_url),
            app_token: std::env::var("RDW_APP_TOKEN").ok(),
            timeout: std::env::var("RDW_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}

/// Gateway to the three RDW collections a lookup needs: licensed vehicles,
/// fuel/emissions, and axles.
pub struct RdwClient {
    http: reqwest::Client,
    config: RdwConfig,
}

impl RdwClient {
    pub fn new(config: RdwConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// Fetch one collection, filtered server-side on the plate column, and
    /// parse it as an array of rows. Parsing is an explicit step so a shape
    /// change upstream surfaces as `Schema`, not as an outage.
    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        dataset: &str,
        plate: &Plate,
    ) -> Result<Vec<T>, SourceError> {
        let url = format!("{}/{dataset}.json", self.config.base_url);
        let mut request = self
            .http
            .get(&url)
            .query(&[("kenteken", plate.as_str())])
            .header(ACCEPT, "application/json");
        if let Some(token) = &self.config.app_token {
            request = request.header(APP_TOKEN_HEADER, token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(dataset, status = status.as_u16(), "RDW collection request failed");
            return Err(SourceError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;
        serde_json::from_slice(&body)
            .map_err(|err| SourceError::Schema(format!("{dataset}: {err}")))
    }
}

#[async_trait]
impl VehicleDataSource for RdwClient {
    /// Fan out to the three collections concurrently and join. The first
    /// failure short-circuits the whole fetch; partial data is never
    /// returned.
    async fn fetch_vehicle_data(&self, plate: &Plate) -> Result<VehicleData, SourceError> {
        let (vehicles, fuels, axles) = tokio::try_join!(
            self.fetch_collection::<VehicleRecord>(VEHICLE_DATASET, plate),
            self.fetch_collection::<FuelRecord>(FUEL_DATASET, plate),
            self.fetch_collection::<AxleRecord>(AXLE_DATASET, plate),
        )?;

        tracing::debug!(
            plate = %plate,
            vehicle = !vehicles.is_empty(),
            fuel = !fuels.is_empty(),
            axles = axles.len(),
            "fetched vehicle data from RDW"
        );

        // Vehicle and fuel carry at most one registration row for an
        // active plate; first entry wins if upstream ever returns more.
        Ok(VehicleData {
            vehicle: vehicles.into_iter().next(),
            fuel: fuels.into_iter().next(),
            axles,
        })
    }
}
