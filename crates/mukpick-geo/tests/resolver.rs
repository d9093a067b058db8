//! Integration tests for the location resolver using wiremock HTTP mocks.
//!
//! Every failure injection (position error, position timeout, geocode
//! transport error, non-2xx status, malformed JSON) must resolve to the fixed
//! fallback location with the `Fallback` source tag, never an error.

use async_trait::async_trait;
use mukpick_geo::{
    FixedPositionProvider, GeoError, GeocodeClient, LocationResolver, LocationSource, Position,
    PositionProvider, UnavailablePositionProvider,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Never produces a position within any reasonable bounded wait.
struct SlowPositionProvider;

#[async_trait]
impl PositionProvider for SlowPositionProvider {
    async fn current_position(&self) -> Result<Position, GeoError> {
        tokio::time::sleep(std::time::Duration::from_secs(600)).await;
        Ok(Position::new(0.0, 0.0))
    }
}

fn geocode_client(base_url: &str) -> GeocodeClient {
    GeocodeClient::with_base_url(5, base_url).expect("client construction should not fail")
}

#[tokio::test]
async fn device_position_geocodes_to_device_location() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "countryName": "대한민국",
        "principalSubdivision": "서울특별시",
        "city": "서울",
        "locality": "강남구",
        "latitude": 37.4979,
        "longitude": 127.0276
    });

    Mock::given(method("GET"))
        .and(path("/data/reverse-geocode-client"))
        .and(query_param("latitude", "37.4979"))
        .and(query_param("longitude", "127.0276"))
        .and(query_param("localityLanguage", "ko"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let resolver = LocationResolver::new(
        FixedPositionProvider::new(37.4979, 127.0276),
        geocode_client(&server.uri()),
        30,
        "ko",
    );
    let resolved = resolver.resolve().await;

    assert_eq!(resolved.source, LocationSource::Device);
    assert_eq!(resolved.info.city, "서울");
    assert_eq!(resolved.info.district, "강남구");
    assert_eq!(resolved.info.country, "대한민국");
}

#[tokio::test]
async fn position_failure_resolves_to_fallback() {
    let server = MockServer::start().await;

    // No geocode request may be issued when the position step fails.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let resolver = LocationResolver::new(
        UnavailablePositionProvider,
        geocode_client(&server.uri()),
        30,
        "ko",
    );
    let resolved = resolver.resolve().await;

    assert_eq!(resolved.source, LocationSource::Fallback);
    assert_eq!(resolved.info.city, "서울");
    assert_eq!(resolved.info.district, "중구");
    assert_eq!(resolved.info.country, "대한민국");
}

#[tokio::test(start_paused = true)]
async fn position_timeout_resolves_to_fallback() {
    // Paused time: the 600s sleep in the provider is auto-advanced, so the
    // 30s bounded wait fires first without real waiting.
    let resolver = LocationResolver::new(
        SlowPositionProvider,
        geocode_client("http://127.0.0.1:9"),
        30,
        "ko",
    );
    let resolved = resolver.resolve().await;

    assert_eq!(resolved.source, LocationSource::Fallback);
    assert_eq!(resolved.info.district, "중구");
}

#[tokio::test]
async fn geocode_server_error_resolves_to_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/reverse-geocode-client"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let resolver = LocationResolver::new(
        FixedPositionProvider::new(37.5665, 126.978),
        geocode_client(&server.uri()),
        30,
        "ko",
    );
    let resolved = resolver.resolve().await;

    assert_eq!(resolved.source, LocationSource::Fallback);
    assert_eq!(resolved.info.district, "중구");
}

#[tokio::test]
async fn geocode_malformed_json_resolves_to_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/reverse-geocode-client"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let resolver = LocationResolver::new(
        FixedPositionProvider::new(37.5665, 126.978),
        geocode_client(&server.uri()),
        30,
        "ko",
    );
    let resolved = resolver.resolve().await;

    assert_eq!(resolved.source, LocationSource::Fallback);
}

#[tokio::test]
async fn geocode_unreachable_host_resolves_to_fallback() {
    // Nothing is listening here; the connect fails immediately.
    let resolver = LocationResolver::new(
        FixedPositionProvider::new(37.5665, 126.978),
        geocode_client("http://127.0.0.1:9"),
        30,
        "ko",
    );
    let resolved = resolver.resolve().await;

    assert_eq!(resolved.source, LocationSource::Fallback);
    assert_eq!(resolved.info, mukpick_core::LocationInfo::fallback());
}

#[tokio::test]
async fn fallback_location_has_every_field_populated() {
    let resolver = LocationResolver::new(
        UnavailablePositionProvider,
        geocode_client("http://127.0.0.1:9"),
        30,
        "ko",
    );
    let resolved = resolver.resolve().await;

    assert_eq!(resolved.source, LocationSource::Fallback);
    assert!(!resolved.info.country.is_empty());
    assert!(!resolved.info.province.is_empty());
    assert!(!resolved.info.city.is_empty());
    assert!(!resolved.info.district.is_empty());
}

#[tokio::test]
async fn geocode_echo_missing_coordinates_falls_back_to_request_coords() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "countryName": "대한민국",
        "principalSubdivision": "서울특별시",
        "city": "서울",
        "locality": "마포구"
    });

    Mock::given(method("GET"))
        .and(path("/data/reverse-geocode-client"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let resolver = LocationResolver::new(
        FixedPositionProvider::new(37.55, 126.92),
        geocode_client(&server.uri()),
        30,
        "ko",
    );
    let resolved = resolver.resolve().await;

    assert_eq!(resolved.source, LocationSource::Device);
    assert!((resolved.info.latitude - 37.55).abs() < f64::EPSILON);
    assert!((resolved.info.longitude - 126.92).abs() < f64::EPSILON);
}
