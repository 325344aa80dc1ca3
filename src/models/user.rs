// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile and auth token records.

use crate::error::Result;
use crate::mapper::{decode, non_empty_string, null_as_default};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Ride with GPS account.
///
/// Returned by `GET /users/current.json` and embedded in the auth token
/// response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Account ID
    pub id: u64,
    /// Email address (empty if not shared)
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    /// Name shown on ridewithgps.com
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
    /// When the account was created (ISO 8601)
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    /// When the profile was last modified (ISO 8601)
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

#[derive(Deserialize)]
struct UserResponse {
    user: User,
}

impl User {
    /// Map a `GET /users/current.json` response body (`{"user": {...}}`).
    pub fn from_json(body: &Value) -> Result<Self> {
        Ok(decode::<UserResponse>(body, "")?.user)
    }
}

/// Token returned by `POST /auth_tokens.json`.
///
/// The token does not carry an expiry; callers persist it and pass it to
/// [`crate::RideWithGpsClient::new`]. The password used to obtain it is never
/// part of this record.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthToken {
    /// Opaque token sent as `x-rwgps-auth-token`
    #[serde(deserialize_with = "non_empty_string")]
    pub auth_token: String,
    /// API key the token was issued for
    pub api_key: Option<String>,
    /// Profile of the authenticated user
    pub user: User,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("auth_token", &"<redacted>")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

impl AuthToken {
    /// Map an auth token response body.
    ///
    /// The server nests the record under an `auth_token` key whose inner
    /// object holds another `auth_token` string. A flat
    /// `{"auth_token": "...", "user": {...}}` body is accepted too.
    pub fn from_json(body: &Value) -> Result<Self> {
        match body.get("auth_token") {
            Some(nested @ Value::Object(_)) => decode(nested, "auth_token"),
            _ => decode(body, ""),
        }
    }
}
