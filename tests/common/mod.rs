// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use ridewithgps_client::RideWithGpsClient;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test_api_key";
pub const TEST_AUTH_TOKEN: &str = "test_auth_token";

/// Install a test subscriber so `RUST_LOG=ridewithgps_client=debug` shows
/// client logs in failing tests.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Base URL of the mock server, mounted under the same path prefix as the
/// real API.
#[allow(dead_code)]
pub fn api_base(server: &MockServer) -> String {
    format!("{}/api/v1", server.uri())
}

/// Create a client pointed at the mock server.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> RideWithGpsClient {
    init_tracing();
    RideWithGpsClient::new(reqwest::Client::new(), TEST_API_KEY, TEST_AUTH_TOKEN)
        .with_base_url(&api_base(server))
}

/// A minimal trip object with an ID-derived distance.
#[allow(dead_code)]
pub fn trip_json(id: u64) -> Value {
    json!({
        "id": id,
        "user_id": 7,
        "name": format!("Trip {}", id),
        "distance": id as f64 * 10.0,
        "duration": 3600,
        "moving_time": 3300,
        "elevation_gain": 120.5,
        "elevation_loss": 118.0,
        "departed_at": "2024-01-15T10:30:00-08:00",
        "activity_type": "cycling"
    })
}

/// A wrapper page of `len` trips starting at `first_id`.
#[allow(dead_code)]
pub fn trip_page(first_id: u64, len: u64) -> Value {
    let trips: Vec<Value> = (first_id..first_id + len).map(trip_json).collect();
    json!({
        "trips": trips,
        "meta": {"pagination": {"record_count": 447, "page_count": 3, "page_size": 200}}
    })
}

#[allow(dead_code)]
pub fn route_json(id: u64) -> Value {
    json!({
        "id": id,
        "user_id": 7,
        "name": format!("Route {}", id),
        "distance": 25000.0,
        "elevation_gain": 400.0,
        "elevation_loss": 400.0,
        "terrain": "rolling"
    })
}

#[allow(dead_code)]
pub fn read_fixture(name: &str) -> Value {
    let path = std::path::Path::new("tests/fixtures").join(name);
    let raw = std::fs::read_to_string(&path).expect("Failed to read fixture");
    serde_json::from_str(&raw).expect("Failed to parse fixture")
}
