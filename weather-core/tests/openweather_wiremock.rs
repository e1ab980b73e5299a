//! OpenWeather client against a mock HTTP server.

use chrono::Timelike;
use weather_core::{OpenWeatherClient, WeatherProvider, load_dashboard};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn current_body() -> serde_json::Value {
    serde_json::json!({
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
        "main": {"temp": 31.42, "feels_like": 30.1, "temp_min": 30.0, "temp_max": 32.0,
                 "pressure": 1011, "humidity": 28},
        "visibility": 10000,
        "wind": {"speed": 3.6, "deg": 292},
        "clouds": {"all": 3},
        "dt": 1_709_544_600,
        "sys": {"country": "IN", "sunrise": 1_709_515_380, "sunset": 1_709_558_160},
        "timezone": 19800,
        "name": "Sangli"
    })
}

/// `count` entries, 3 hours apart, starting 2024-03-04 00:00 UTC.
fn forecast_body(count: i64) -> serde_json::Value {
    let list: Vec<_> = (0..count)
        .map(|i| {
            serde_json::json!({
                "dt": 1_709_510_400 + i * 3 * 3600,
                "main": {"temp": 20.0 + i as f64, "pressure": 1010, "humidity": 40},
                "weather": [{"main": "Clouds", "description": "few clouds", "icon": "02d"}]
            })
        })
        .collect();

    serde_json::json!({
        "cod": "200",
        "cnt": count,
        "list": list,
        "city": {"name": "Sangli", "country": "IN", "timezone": 0}
    })
}

fn client(server: &MockServer) -> OpenWeatherClient {
    OpenWeatherClient::with_base_url("TEST_KEY".to_string(), server.uri())
}

#[tokio::test]
async fn current_sends_city_key_and_metric_units() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Sangli"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .expect(1)
        .mount(&server)
        .await;

    let snap = client(&server).current("Sangli").await.expect("current weather");

    assert_eq!(snap.city, "Sangli");
    assert_eq!(snap.condition, "Clear");
    assert!((snap.temperature_c - 31.42).abs() < f64::EPSILON);
    assert_eq!(snap.observed_at.hour(), 15);
}

#[tokio::test]
async fn forecast_parses_all_entries_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(40)))
        .mount(&server)
        .await;

    let entries = client(&server).forecast("Sangli").await.expect("forecast");

    assert_eq!(entries.len(), 40);
    assert!(entries.windows(2).all(|w| w[0].time < w[1].time));
}

#[tokio::test]
async fn unknown_city_is_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&server)
        .await;

    let err = client(&server).current("Atlantis").await.unwrap_err();

    assert_eq!(err.city(), "Atlantis");
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn invalid_credential_is_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    assert!(client(&server).forecast("Sangli").await.is_err());
}

#[tokio::test]
async fn malformed_body_is_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    assert!(client(&server).current("Sangli").await.is_err());
}

#[tokio::test]
async fn current_body_without_humidity_is_unavailable() {
    let server = MockServer::start().await;
    let mut body = current_body();
    body["main"].as_object_mut().unwrap().remove("humidity");

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let err = client(&server).current("Sangli").await.unwrap_err();
    assert_eq!(err.city(), "Sangli");
}

#[tokio::test]
async fn unreachable_server_is_unavailable() {
    let client =
        OpenWeatherClient::with_base_url("TEST_KEY".to_string(), "http://127.0.0.1:1".to_string());
    assert!(client.current("Sangli").await.is_err());
}

#[tokio::test]
async fn dashboard_reduces_forecast_feed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(40)))
        .mount(&server)
        .await;

    let dashboard = load_dashboard(&client(&server), "Sangli").await.expect("dashboard");

    assert_eq!(dashboard.hourly.len(), 8);
    assert_eq!(dashboard.daily.len(), 5);
    // UTC city: 09:00 is the first qualifying slot each day.
    assert!((dashboard.daily[0].temperature_c - 23.0).abs() < f64::EPSILON);
    assert_eq!(dashboard.daily[0].date, "Mar 04");
}

#[tokio::test]
async fn dashboard_fails_when_forecast_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(load_dashboard(&client(&server), "Sangli").await.is_err());
}
