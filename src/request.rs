// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP request execution for the Ride with GPS API.
//!
//! Handles:
//! - Attaching the API key / auth token header pair
//! - Mapping non-2xx responses to `RwgpsError::Api`
//! - Decoding response bodies into JSON
//!
//! There is no retry and no timeout policy here. Timeouts, proxies and
//! connection pooling are configured on the `reqwest::Client` the caller
//! injects.

use crate::error::{Result, RwgpsError};
use crate::mapper::BODY_FIELD;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde_json::{Map, Value};

/// Base URL for all v1 endpoints.
pub const DEFAULT_BASE_URL: &str = "https://ridewithgps.com/api/v1";

/// Identifies the application.
pub const API_KEY_HEADER: &str = "x-rwgps-api-key";

/// Identifies the authenticated user.
pub const AUTH_TOKEN_HEADER: &str = "x-rwgps-auth-token";

/// Join a base URL and an endpoint path (which starts with `/`).
pub(crate) fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Attach both credential headers to a request.
pub(crate) fn authorize(request: RequestBuilder, api_key: &str, auth_token: &str) -> RequestBuilder {
    request
        .header(API_KEY_HEADER, api_key)
        .header(AUTH_TOKEN_HEADER, auth_token)
        .header(reqwest::header::ACCEPT, "application/json")
}

/// Send an authenticated request and return its parsed JSON body.
pub(crate) async fn execute(request: RequestBuilder, path: &str) -> Result<Value> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), path, "Ride with GPS API error");
        return Err(RwgpsError::Api {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }

    read_json(response).await
}

/// Decode a successful response body.
///
/// `204 No Content` and empty bodies decode to an empty object.
pub(crate) async fn read_json(response: Response) -> Result<Value> {
    if response.status() == StatusCode::NO_CONTENT {
        return Ok(Value::Object(Map::new()));
    }

    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_slice(&bytes)
        .map_err(|e| RwgpsError::parse(BODY_FIELD, format!("invalid JSON: {}", e)))
}

/// Extract the server's error message from an error response body.
///
/// Looks for `error`, `message` or `errors` in a JSON body, falls back to the
/// trimmed text, and returns `None` for an empty body.
pub(crate) fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(trimmed) {
        for key in ["error", "message"] {
            if let Some(Value::String(msg)) = object.get(key) {
                return Some(msg.clone());
            }
        }
        match object.get("errors") {
            Some(Value::String(msg)) => return Some(msg.clone()),
            Some(Value::Array(errors)) => {
                let joined = errors
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join("; ");
                if !joined.is_empty() {
                    return Some(joined);
                }
            }
            _ => {}
        }
    }

    Some(trimmed.to_string())
}
