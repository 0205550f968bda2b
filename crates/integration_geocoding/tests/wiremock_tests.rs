//! Integration tests for geocoding clients using WireMock
//!
//! These tests mock HTTP responses to verify client behavior without
//! calling the real geocoding services.

use domain::{CountryCode, GeoPoint, Viewbox};
use integration_geocoding::{
    GeocodeBias, GeocodeError, GeocodeProvider, GeocodingConfig, GoogleGeocoder, MapboxGeocoder,
    NominatimGeocoder,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, path_regex, query_param, query_param_is_missing},
};

/// Sample Google Geocoding API response
fn google_success_response() -> serde_json::Value {
    serde_json::json!({
        "status": "OK",
        "results": [
            {
                "geometry": {
                    "location": {"lat": -0.6564, "lng": -78.7144}
                },
                "formatted_address": "Illiniza Norte, Ecuador"
            }
        ]
    })
}

/// Sample Nominatim search response
fn nominatim_success_response() -> serde_json::Value {
    serde_json::json!([
        {
            "lat": "-0.7123",
            "lon": "-78.5512",
            "class": "boundary",
            "type": "administrative",
            "display_name": "Cotopaxi, Ecuador",
            "importance": 0.55
        },
        {
            "lat": "-0.7052",
            "lon": "-78.6102",
            "class": "tourism",
            "type": "hostel",
            "display_name": "Secret Garden, Cotopaxi, Ecuador",
            "importance": 0.21
        }
    ])
}

/// Sample Mapbox response with a well-ranked POI
fn mapbox_poi_response() -> serde_json::Value {
    serde_json::json!({
        "features": [
            {
                "place_type": ["poi"],
                "relevance": 0.97,
                "place_name": "Khao San Road, Bangkok, Thailand",
                "center": [100.4973, 13.759]
            }
        ]
    })
}

// =============================================================================
// Google Geocoder Tests
// =============================================================================

fn google_config(server: &MockServer) -> GeocodingConfig {
    GeocodingConfig {
        google_api_key: Some("test-key".to_string()),
        google_base_url: server.uri(),
        ..GeocodingConfig::for_testing()
    }
}

#[tokio::test]
async fn test_google_geocode_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .and(query_param("address", "Illiniza Norte, Ecuador"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(google_success_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GoogleGeocoder::new(&google_config(&mock_server)).expect("client");
    let hit = client
        .resolve("Illiniza Norte, Ecuador", &GeocodeBias::default())
        .await
        .expect("resolve")
        .expect("hit");

    assert_eq!(hit.formatted_name, "Illiniza Norte, Ecuador");
    assert!(hit.exact);
    assert!((hit.coordinates.longitude() - -78.7144).abs() < f64::EPSILON);
    assert!((hit.coordinates.latitude() - -0.6564).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_google_sends_region_bias() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .and(query_param("region", "ec"))
        .respond_with(ResponseTemplate::new(200).set_body_json(google_success_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GoogleGeocoder::new(&google_config(&mock_server)).expect("client");
    let bias = GeocodeBias::for_country(Some(CountryCode::new("ec").expect("code")));
    let hit = client
        .resolve("Illiniza Norte", &bias)
        .await
        .expect("resolve");
    assert!(hit.is_some());
}

#[tokio::test]
async fn test_google_zero_results_is_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ZERO_RESULTS",
            "results": []
        })))
        .mount(&mock_server)
        .await;

    let client = GoogleGeocoder::new(&google_config(&mock_server)).expect("client");
    let hit = client
        .resolve("Nonexistent Hostel", &GeocodeBias::default())
        .await
        .expect("resolve");
    assert!(hit.is_none());
}

#[tokio::test]
async fn test_google_request_denied_is_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "REQUEST_DENIED",
            "results": [],
            "error_message": "The provided API key is invalid."
        })))
        .mount(&mock_server)
        .await;

    let client = GoogleGeocoder::new(&google_config(&mock_server)).expect("client");
    let result = client.resolve("Quito", &GeocodeBias::default()).await;
    assert!(matches!(result, Err(GeocodeError::AuthenticationFailed(_))));
}

#[tokio::test]
async fn test_google_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = GoogleGeocoder::new(&google_config(&mock_server)).expect("client");
    let result = client.resolve("Quito", &GeocodeBias::default()).await;
    assert!(matches!(result, Err(GeocodeError::RequestFailed(_))));
}

#[tokio::test]
async fn test_google_rate_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let client = GoogleGeocoder::new(&google_config(&mock_server)).expect("client");
    let result = client.resolve("Quito", &GeocodeBias::default()).await;
    assert!(matches!(result, Err(GeocodeError::RateLimitExceeded)));
    assert!(result.unwrap_err().should_fallback());
}

// =============================================================================
// Nominatim Geocoder Tests
// =============================================================================

fn nominatim_config(server: &MockServer) -> GeocodingConfig {
    GeocodingConfig {
        nominatim_base_url: server.uri(),
        ..GeocodingConfig::for_testing()
    }
}

#[tokio::test]
async fn test_nominatim_skips_non_poi_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Secret Garden, Cotopaxi"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(nominatim_success_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = NominatimGeocoder::new(&nominatim_config(&mock_server)).expect("client");
    let hit = client
        .resolve("Secret Garden, Cotopaxi", &GeocodeBias::default())
        .await
        .expect("resolve")
        .expect("hit");

    // The administrative boundary ranks first but the hostel wins
    assert_eq!(hit.formatted_name, "Secret Garden, Cotopaxi, Ecuador");
    assert!((hit.coordinates.latitude() - -0.7052).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_nominatim_sends_viewbox_when_biased() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("viewbox", "-79,-0.25,-78,-1.25"))
        .and(query_param("bounded", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = NominatimGeocoder::new(&nominatim_config(&mock_server)).expect("client");
    let center = GeoPoint::new(-78.5, -0.75).expect("point");
    let bias = GeocodeBias {
        viewbox: Some(Viewbox::around(center, 0.5)),
        ..GeocodeBias::default()
    };

    let hit = client.resolve("hostel", &bias).await.expect("resolve");
    assert!(hit.is_none());
}

#[tokio::test]
async fn test_nominatim_omits_viewbox_without_bias() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param_is_missing("viewbox"))
        .and(query_param_is_missing("bounded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = NominatimGeocoder::new(&nominatim_config(&mock_server)).expect("client");
    let hit = client
        .resolve("hostel", &GeocodeBias::default())
        .await
        .expect("resolve");
    assert!(hit.is_none());
}

#[tokio::test]
async fn test_nominatim_no_acceptable_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "lat": "13.75",
                "lon": "100.49",
                "class": "place",
                "type": "city",
                "display_name": "Bangkok, Thailand"
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = NominatimGeocoder::new(&nominatim_config(&mock_server)).expect("client");
    let hit = client
        .resolve("Bangkok", &GeocodeBias::default())
        .await
        .expect("resolve");
    assert!(hit.is_none());
}

#[tokio::test]
async fn test_nominatim_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = NominatimGeocoder::new(&nominatim_config(&mock_server)).expect("client");
    let result = client.resolve("hostel", &GeocodeBias::default()).await;
    assert!(matches!(result, Err(GeocodeError::RequestFailed(_))));
}

// =============================================================================
// Mapbox Geocoder Tests
// =============================================================================

fn mapbox_config(server: &MockServer) -> GeocodingConfig {
    GeocodingConfig {
        mapbox_access_token: Some("test-token".to_string()),
        mapbox_base_url: server.uri(),
        ..GeocodingConfig::for_testing()
    }
}

#[tokio::test]
async fn test_mapbox_accepts_relevant_poi() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/geocoding/v5/mapbox\.places/.*\.json$"))
        .and(query_param("access_token", "test-token"))
        .and(query_param("types", "poi,address"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mapbox_poi_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = MapboxGeocoder::new(&mapbox_config(&mock_server)).expect("client");
    let hit = client
        .resolve("Khao San Road", &GeocodeBias::default())
        .await
        .expect("resolve")
        .expect("hit");

    assert!(hit.exact);
    assert_eq!(hit.formatted_name, "Khao San Road, Bangkok, Thailand");
}

#[tokio::test]
async fn test_mapbox_rejects_low_relevance_poi() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/geocoding/v5/mapbox\.places/.*\.json$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "features": [
                {
                    "place_type": ["poi"],
                    "relevance": 0.4,
                    "place_name": "Some Other Road, Elsewhere",
                    "center": [10.0, 50.0]
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = MapboxGeocoder::new(&mapbox_config(&mock_server)).expect("client");
    let hit = client
        .resolve("Khao San Road", &GeocodeBias::default())
        .await
        .expect("resolve");
    assert!(hit.is_none());
}

#[tokio::test]
async fn test_mapbox_strict_mode_ignores_localities() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/geocoding/v5/mapbox\.places/.*\.json$"))
        .and(query_param("types", "poi,address"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "features": [
                {
                    "place_type": ["place"],
                    "relevance": 0.9,
                    "place_name": "Banos, Ecuador",
                    "center": [-78.4246, -1.3964]
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = MapboxGeocoder::new(&mapbox_config(&mock_server)).expect("client");
    let hit = client
        .resolve("Banos", &GeocodeBias::default())
        .await
        .expect("resolve");
    assert!(hit.is_none());
}

#[tokio::test]
async fn test_mapbox_fallback_mode_accepts_locality_as_approximate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/geocoding/v5/mapbox\.places/.*\.json$"))
        .and(query_param("types", "poi,address,place,locality"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "features": [
                {
                    "place_type": ["place"],
                    "relevance": 0.9,
                    "place_name": "Banos, Ecuador",
                    "center": [-78.4246, -1.3964]
                }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = MapboxGeocoder::new(&mapbox_config(&mock_server)).expect("client");
    let bias = GeocodeBias {
        allow_place_fallback: true,
        ..GeocodeBias::default()
    };
    let hit = client
        .resolve("Banos", &bias)
        .await
        .expect("resolve")
        .expect("hit");

    assert!(!hit.exact);
    assert_eq!(hit.formatted_name, "Banos, Ecuador");
}

#[tokio::test]
async fn test_mapbox_poi_wins_over_earlier_locality() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/geocoding/v5/mapbox\.places/.*\.json$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "features": [
                {
                    "place_type": ["place"],
                    "relevance": 0.8,
                    "place_name": "Banos, Ecuador",
                    "center": [-78.4246, -1.3964]
                },
                {
                    "place_type": ["poi"],
                    "relevance": 0.85,
                    "place_name": "Swing at the End of the World, Banos, Ecuador",
                    "center": [-78.4433, -1.4169]
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = MapboxGeocoder::new(&mapbox_config(&mock_server)).expect("client");
    let bias = GeocodeBias {
        allow_place_fallback: true,
        ..GeocodeBias::default()
    };
    let hit = client
        .resolve("Swing at the End of the World", &bias)
        .await
        .expect("resolve")
        .expect("hit");

    assert!(hit.exact);
    assert_eq!(
        hit.formatted_name,
        "Swing at the End of the World, Banos, Ecuador"
    );
}

#[tokio::test]
async fn test_mapbox_sends_proximity_and_country() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/geocoding/v5/mapbox\.places/.*\.json$"))
        .and(query_param("proximity", "-78.44,-0.68"))
        .and(query_param("country", "ec"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"features": []})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = MapboxGeocoder::new(&mapbox_config(&mock_server)).expect("client");
    let bias = GeocodeBias {
        country: Some(CountryCode::new("ec").expect("code")),
        proximity: Some(GeoPoint::new(-78.44, -0.68).expect("point")),
        ..GeocodeBias::default()
    };
    let hit = client.resolve("hostel", &bias).await.expect("resolve");
    assert!(hit.is_none());
}

#[tokio::test]
async fn test_mapbox_invalid_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/geocoding/v5/mapbox\.places/.*\.json$"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = MapboxGeocoder::new(&mapbox_config(&mock_server)).expect("client");
    let result = client.resolve("anywhere", &GeocodeBias::default()).await;
    assert!(matches!(result, Err(GeocodeError::AuthenticationFailed(_))));
}
