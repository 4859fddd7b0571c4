//! HTTP-level tests of the provider and Telegram clients against a mock server

use std::time::Duration;

use kitebot::config::{GeocodingConfig, TelegramConfig, WeatherConfig};
use kitebot::telegram::TelegramClient;
use kitebot::{
    ChatTransport, Geocoder, KiteBotError, LocationQuery, MessageHandle, NominatimClient,
    OpenMeteoClient, WeatherProvider,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn geocoding_config(server: &MockServer) -> GeocodingConfig {
    GeocodingConfig {
        base_url: server.uri(),
        timeout_seconds: 1,
        ..GeocodingConfig::default()
    }
}

fn weather_config(server: &MockServer) -> WeatherConfig {
    WeatherConfig {
        base_url: server.uri(),
        timeout_seconds: 1,
    }
}

fn telegram_client(server: &MockServer) -> TelegramClient {
    let config = TelegramConfig {
        base_url: server.uri(),
        ..TelegramConfig::default()
    };
    TelegramClient::new(&config, "123:secret").unwrap()
}

#[tokio::test]
async fn test_nominatim_first_match_is_used() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Cumbuco, Ceará, Brazil"))
        .and(query_param("format", "jsonv2"))
        .and(query_param("limit", "1"))
        .and(header("user-agent", GeocodingConfig::default().user_agent.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "lat": "-3.6261",
                "lon": "-38.7300",
                "display_name": "Cumbuco, Caucaia, Ceará, Brasil"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = NominatimClient::new(&geocoding_config(&server)).unwrap();
    let query = LocationQuery::parse("Cumbuco, Ceará").unwrap();
    let place = client.geocode(&query).await.unwrap().unwrap();

    assert_eq!(place.latitude, -3.6261);
    assert_eq!(place.longitude, -38.73);
    assert_eq!(place.display_address, "Cumbuco, Caucaia, Ceará, Brasil");
}

#[tokio::test]
async fn test_nominatim_empty_list_is_no_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = NominatimClient::new(&geocoding_config(&server)).unwrap();
    let query = LocationQuery::parse("Xyzzy123Nowhere").unwrap();
    assert_eq!(client.geocode(&query).await.unwrap(), None);
}

#[tokio::test]
async fn test_nominatim_server_error_is_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = NominatimClient::new(&geocoding_config(&server)).unwrap();
    let query = LocationQuery::parse("Taiba").unwrap();
    let err = client.geocode(&query).await.unwrap_err();
    assert!(matches!(err, KiteBotError::Geocoding { .. }));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_nominatim_garbage_is_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    let client = NominatimClient::new(&geocoding_config(&server)).unwrap();
    let query = LocationQuery::parse("Taiba").unwrap();
    assert!(matches!(
        client.geocode(&query).await,
        Err(KiteBotError::Geocoding { .. })
    ));
}

#[tokio::test]
async fn test_nominatim_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = NominatimClient::new(&geocoding_config(&server)).unwrap();
    let query = LocationQuery::parse("Taiba").unwrap();
    assert!(matches!(
        client.geocode(&query).await,
        Err(KiteBotError::Geocoding { .. })
    ));
}

#[tokio::test]
async fn test_open_meteo_current_conditions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "-2.7957"))
        .and(query_param("longitude", "-40.5123"))
        .and(query_param(
            "current",
            "temperature_2m,wind_speed_10m,wind_gusts_10m,wind_direction_10m",
        ))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "latitude": -2.8,
            "longitude": -40.5,
            "current": {
                "time": "2026-10-19T14:00",
                "interval": 900,
                "temperature_2m": 29.1,
                "wind_speed_10m": 27.78,
                "wind_gusts_10m": 38.9,
                "wind_direction_10m": 95
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenMeteoClient::new(&weather_config(&server)).unwrap();
    let snapshot = client.current_conditions(-2.7957, -40.5123).await.unwrap();

    assert_eq!(snapshot.temperature_c, Some(29.1));
    assert_eq!(snapshot.wind_speed_kmh, Some(27.78));
    assert_eq!(snapshot.wind_gust_kmh, Some(38.9));
    assert_eq!(snapshot.wind_direction_deg, Some(95.0));
}

#[tokio::test]
async fn test_open_meteo_null_fields_stay_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current": {
                "temperature_2m": 24.0,
                "wind_speed_10m": 12.0,
                "wind_gusts_10m": null
            }
        })))
        .mount(&server)
        .await;

    let client = OpenMeteoClient::new(&weather_config(&server)).unwrap();
    let snapshot = client.current_conditions(-27.59, -48.55).await.unwrap();
    assert_eq!(snapshot.wind_gust_kmh, None);
    assert_eq!(snapshot.wind_direction_deg, None);
}

#[tokio::test]
async fn test_open_meteo_missing_current_block_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "latitude": -2.8,
            "longitude": -40.5
        })))
        .mount(&server)
        .await;

    let client = OpenMeteoClient::new(&weather_config(&server)).unwrap();
    assert!(matches!(
        client.current_conditions(-2.7957, -40.5123).await,
        Err(KiteBotError::Weather { .. })
    ));
}

#[tokio::test]
async fn test_open_meteo_server_error_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = OpenMeteoClient::new(&weather_config(&server)).unwrap();
    let err = client.current_conditions(0.0, 0.0).await.unwrap_err();
    assert!(matches!(err, KiteBotError::Weather { .. }));
    assert!(err.to_string().contains("502"));
}

#[tokio::test]
async fn test_open_meteo_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "current": {} }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = OpenMeteoClient::new(&weather_config(&server)).unwrap();
    assert!(matches!(
        client.current_conditions(0.0, 0.0).await,
        Err(KiteBotError::Weather { .. })
    ));
}

#[tokio::test]
async fn test_telegram_send_then_edit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:secret/sendMessage"))
        .and(body_partial_json(json!({
            "chat_id": 42,
            "text": "🔍 Searching: Preá...",
            "parse_mode": "Markdown"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": {
                "message_id": 7,
                "chat": { "id": 42, "type": "private" },
                "date": 1760880000,
                "text": "🔍 Searching: Preá..."
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/bot123:secret/editMessageText"))
        .and(body_partial_json(json!({
            "chat_id": 42,
            "message_id": 7,
            "text": "done",
            "parse_mode": "Markdown"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": {
                "message_id": 7,
                "chat": { "id": 42, "type": "private" },
                "date": 1760880000,
                "text": "done"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = telegram_client(&server);
    let handle = client.send_message(42, "🔍 Searching: Preá...").await.unwrap();
    assert_eq!(
        handle,
        MessageHandle {
            chat_id: 42,
            message_id: 7
        }
    );
    client.edit_message(&handle, "done").await.unwrap();
}

#[tokio::test]
async fn test_telegram_error_envelope_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:secret/sendMessage"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: can't parse entities"
        })))
        .mount(&server)
        .await;

    let client = telegram_client(&server);
    let err = client.send_message(42, "*broken").await.unwrap_err();
    assert!(matches!(err, KiteBotError::Transport { .. }));
    assert!(err.to_string().contains("can't parse entities"));
    assert!(!err.to_string().contains("secret"));
}

#[tokio::test]
async fn test_telegram_get_updates_reads_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:secret/getUpdates"))
        .and(body_partial_json(json!({
            "offset": 10,
            "timeout": 0,
            "allowed_updates": ["message"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": [
                {
                    "update_id": 10,
                    "message": {
                        "message_id": 3,
                        "chat": { "id": 42, "type": "private" },
                        "from": { "id": 99, "is_bot": false, "first_name": "Ana" },
                        "date": 1760880000,
                        "text": "Cumbuco, Ceará"
                    }
                },
                { "update_id": 11 }
            ]
        })))
        .mount(&server)
        .await;

    let client = telegram_client(&server);
    let updates = client.get_updates(Some(10), 0).await.unwrap();

    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].id, 10);
    let message = updates[0].message.as_ref().unwrap();
    assert_eq!(message.chat.id, 42);
    assert_eq!(message.text.as_deref(), Some("Cumbuco, Ceará"));
    assert!(updates[1].message.is_none());
}
