//! Vehicle lookup handler - the request orchestrator.
//!
//! Per request: validate the plate, gate on the rate limiter, try the
//! cache, fall through to the RDW gateway on a miss, store the result,
//! respond. Validation failures never touch the limiter or the gateway.

use actix_web::{HttpRequest, HttpResponse, http::header, web};

use kenteken_core::domain::{Plate, VehicleData};
use kenteken_shared::VehicleLookupResponse;

use crate::middleware::{AppError, AppResult};
use crate::state::AppState;

/// Shared-cache hint for CDN/browser layers in front of this API.
const CACHE_CONTROL_VALUE: &str = "public, s-maxage=3600, stale-while-revalidate=600";

/// GET /vehicle/{plate}
pub async fn lookup(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    let plate = Plate::parse(&path.into_inner()).map_err(|_| AppError::InvalidPlate)?;

    let client = client_key(&req);
    let decision = state.limiter.check(&client).await;
    if !decision.allowed {
        tracing::warn!(client = %client, "rate limit exceeded");
        return Err(AppError::RateLimited {
            retry_after: decision.retry_after,
        });
    }

    if let Some(data) = state.cache.get(&plate).await {
        tracing::debug!(plate = %plate, "served from cache");
        return Ok(cacheable(data));
    }

    let data = state.source.fetch_vehicle_data(&plate).await?;
    state.cache.put(&plate, data.clone()).await;

    Ok(cacheable(data))
}

fn cacheable(data: VehicleData) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, CACHE_CONTROL_VALUE))
        .json(VehicleLookupResponse::from(data))
}

/// Derive the rate-limit key for a request: first entry of
/// `x-forwarded-for`, else `x-real-ip`, else a literal "unknown".
///
/// The first forwarded value is trusted as the nearest proxy hop's
/// declaration. Without a trusted proxy chain there is no spoof-proof way
/// to resolve the origin IP; this is a known, accepted trust boundary.
fn client_key(req: &HttpRequest) -> String {
    if let Some(forwarded) = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    req.headers()
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(String::from)
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use actix_web::{App, test};
    use async_trait::async_trait;

    use kenteken_core::SourceError;
    use kenteken_core::domain::{AxleRecord, FuelRecord, VehicleRecord};
    use kenteken_core::ports::VehicleDataSource;
    use kenteken_infra::{
        CacheConfig, FixedWindowLimiter, InMemoryVehicleCache, RateLimitConfig,
    };

    enum StubBehavior {
        Data(VehicleData),
        Upstream(u16),
        Schema,
    }

    struct StubSource {
        behavior: StubBehavior,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn new(behavior: StubBehavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl VehicleDataSource for StubSource {
        async fn fetch_vehicle_data(&self, _plate: &Plate) -> Result<VehicleData, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.behavior {
                StubBehavior::Data(data) => Ok(data.clone()),
                StubBehavior::Upstream(status) => Err(SourceError::Upstream { status: *status }),
                StubBehavior::Schema => Err(SourceError::Schema("stub".into())),
            }
        }
    }

    fn alfa_romeo() -> VehicleData {
        VehicleData {
            vehicle: Some(VehicleRecord {
                kenteken: "07XRVN".into(),
                merk: Some("ALFA ROMEO".into()),
                ..VehicleRecord::default()
            }),
            fuel: Some(FuelRecord {
                brandstof_omschrijving: Some("Benzine".into()),
                ..FuelRecord::default()
            }),
            axles: vec![AxleRecord {
                as_nummer: Some("1".into()),
                ..AxleRecord::default()
            }],
        }
    }

    struct TestHarness {
        state: AppState,
        source: Arc<StubSource>,
        limiter: Arc<FixedWindowLimiter>,
    }

    fn harness(behavior: StubBehavior) -> TestHarness {
        let source = StubSource::new(behavior);
        let limiter = Arc::new(FixedWindowLimiter::new(RateLimitConfig {
            max_requests: 10,
            window: Duration::from_secs(60),
            max_keys: 10_000,
        }));
        let state = AppState {
            cache: Arc::new(InMemoryVehicleCache::new(CacheConfig::default())),
            limiter: limiter.clone(),
            source: source.clone(),
        };
        TestHarness {
            state,
            source,
            limiter,
        }
    }

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(crate::handlers::configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn lookup_returns_merged_data_with_cache_header() {
        let harness = harness(StubBehavior::Data(alfa_romeo()));
        let app = test_app!(harness.state.clone());

        let req = test::TestRequest::get()
            .uri("/vehicle/07-XR-VN")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get(header::CACHE_CONTROL).unwrap(),
            CACHE_CONTROL_VALUE
        );

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["vehicle"]["merk"], "ALFA ROMEO");
        assert_eq!(body["fuel"]["brandstof_omschrijving"], "Benzine");
        assert_eq!(body["axles"].as_array().unwrap().len(), 1);
        assert_eq!(body["apkHistory"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn invalid_plate_short_circuits_before_limiter_and_source() {
        let harness = harness(StubBehavior::Data(alfa_romeo()));
        let app = test_app!(harness.state.clone());

        let req = test::TestRequest::get()
            .uri("/vehicle/ABC!123")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Ongeldig kenteken formaat");

        assert_eq!(harness.source.calls(), 0);
        assert_eq!(harness.limiter.tracked_keys().await, 0);
    }

    #[actix_web::test]
    async fn eleventh_request_in_a_window_is_rejected() {
        let harness = harness(StubBehavior::Data(alfa_romeo()));
        let app = test_app!(harness.state.clone());

        for _ in 0..10 {
            let req = test::TestRequest::get()
                .uri("/vehicle/07XRVN")
                .insert_header(("x-forwarded-for", "9.9.9.9"))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), 200);
        }

        let req = test::TestRequest::get()
            .uri("/vehicle/07XRVN")
            .insert_header(("x-forwarded-for", "9.9.9.9"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 429);
        assert!(resp.headers().contains_key("retry-after"));

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Te veel verzoeken. Probeer het later opnieuw.");
    }

    #[actix_web::test]
    async fn cache_hit_skips_the_upstream_fetch() {
        let harness = harness(StubBehavior::Data(alfa_romeo()));
        let app = test_app!(harness.state.clone());

        // Dash/case variants hit the same normalized key.
        for uri in ["/vehicle/07-XR-VN", "/vehicle/07xrvn"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            assert_eq!(test::call_service(&app, req).await.status(), 200);
        }

        assert_eq!(harness.source.calls(), 1);
    }

    #[actix_web::test]
    async fn upstream_503_maps_to_service_unavailable() {
        let harness = harness(StubBehavior::Upstream(503));
        let app = test_app!(harness.state.clone());

        let req = test::TestRequest::get().uri("/vehicle/07XRVN").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 503);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "RDW API is tijdelijk niet beschikbaar. Probeer het later opnieuw."
        );
    }

    #[actix_web::test]
    async fn schema_failure_maps_to_bad_gateway() {
        let harness = harness(StubBehavior::Schema);
        let app = test_app!(harness.state.clone());

        let req = test::TestRequest::get().uri("/vehicle/07XRVN").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 502);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Ongeldige respons van RDW API");
    }

    #[actix_web::test]
    async fn other_upstream_failures_map_to_internal_error() {
        let harness = harness(StubBehavior::Upstream(500));
        let app = test_app!(harness.state.clone());

        let req = test::TestRequest::get().uri("/vehicle/07XRVN").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Kon voertuiggegevens niet ophalen");
    }

    #[actix_web::test]
    async fn failed_fetches_are_not_cached() {
        let harness = harness(StubBehavior::Upstream(500));
        let app = test_app!(harness.state.clone());

        for _ in 0..2 {
            let req = test::TestRequest::get().uri("/vehicle/07XRVN").to_request();
            test::call_service(&app, req).await;
        }

        // No cached failure: both requests reached the source.
        assert_eq!(harness.source.calls(), 2);
    }

    #[std::prelude::v1::test]
    fn client_key_prefers_the_first_forwarded_hop() {
        let req = test::TestRequest::default()
            .insert_header(("x-forwarded-for", "1.1.1.1, 2.2.2.2"))
            .insert_header(("x-real-ip", "3.3.3.3"))
            .to_http_request();
        assert_eq!(client_key(&req), "1.1.1.1");
    }

    #[std::prelude::v1::test]
    fn client_key_falls_back_to_real_ip_then_unknown() {
        let req = test::TestRequest::default()
            .insert_header(("x-real-ip", "3.3.3.3"))
            .to_http_request();
        assert_eq!(client_key(&req), "3.3.3.3");

        let req = test::TestRequest::default().to_http_request();
        assert_eq!(client_key(&req), "unknown");
    }
}
