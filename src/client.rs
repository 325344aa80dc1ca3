// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ride with GPS API client for reading trips, routes and sync changes.
//!
//! Handles:
//! - Email/password authentication to obtain an auth token
//! - Single-page and full listing of trips and routes
//! - Incremental sync since a server timestamp

use crate::config::{Config, ConfigError};
use crate::error::{Result, RwgpsError};
use crate::mapper::map_page;
use crate::models::{AuthToken, Page, RouteSummary, SyncAssets, SyncResult, TripSummary, User};
use crate::pagination::{self, clamp_page_size, DEFAULT_PAGE_SIZE};
use crate::request::{self, API_KEY_HEADER, DEFAULT_BASE_URL};
use crate::time_utils::format_utc_rfc3339;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

/// Ride with GPS API client.
///
/// Holds the caller's `reqwest::Client` and read-only credentials; there is
/// no other state, so clones and concurrent calls are independent.
#[derive(Clone)]
pub struct RideWithGpsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    auth_token: String,
    page_size: u32,
}

impl std::fmt::Debug for RideWithGpsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RideWithGpsClient")
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl RideWithGpsClient {
    /// Create a client from an API key and a user's auth token.
    pub fn new(
        http: reqwest::Client,
        api_key: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            auth_token: auth_token.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Create a client from a loaded [`Config`], which must carry a token.
    pub fn from_config(
        http: reqwest::Client,
        config: &Config,
    ) -> std::result::Result<Self, ConfigError> {
        let auth_token = config
            .auth_token
            .clone()
            .ok_or(ConfigError::Missing("RWGPS_AUTH_TOKEN"))?;

        Ok(Self::new(http, config.api_key.clone(), auth_token)
            .with_base_url(&config.base_url)
            .with_page_size(config.page_size))
    }

    /// Point the client at another server (e.g. a mock in tests).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Page size for `get_trips`, `get_routes` and the `get_all_*` loops.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = clamp_page_size(page_size);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    // ─── Authentication ─────────────────────────────────────────────────────

    /// Exchange email and password for an auth token.
    ///
    /// The password is sent once and not kept anywhere; persist the returned
    /// token and build a client with [`RideWithGpsClient::new`].
    pub async fn authenticate(
        http: &reqwest::Client,
        api_key: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthToken> {
        Self::authenticate_at(http, DEFAULT_BASE_URL, api_key, email, password).await
    }

    /// [`RideWithGpsClient::authenticate`] against another base URL.
    pub async fn authenticate_at(
        http: &reqwest::Client,
        base_url: &str,
        api_key: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthToken> {
        let url = request::endpoint_url(base_url, "/auth_tokens.json");
        tracing::debug!(path = "/auth_tokens.json", "Requesting auth token");

        let response = http
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&json!({
                "user": {
                    "email": email,
                    "password": password,
                }
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Ride with GPS authentication failed");
            let message = request::error_message(&body).unwrap_or_else(|| match status.as_u16() {
                400 => "Bad request - check credentials".to_string(),
                401 => "Invalid email or password".to_string(),
                _ => status
                    .canonical_reason()
                    .unwrap_or("Unexpected response")
                    .to_string(),
            });
            return Err(RwgpsError::Authentication {
                status: status.as_u16(),
                message,
            });
        }

        let body = request::read_json(response).await?;
        let token = AuthToken::from_json(&body).map_err(|e| match e {
            RwgpsError::Parse { ref field, .. } if field.ends_with("auth_token") => {
                RwgpsError::Authentication {
                    status: status.as_u16(),
                    message: "Response did not contain an auth token".to_string(),
                }
            }
            other => other,
        })?;

        tracing::info!(user_id = token.user.id, "Ride with GPS authentication successful");
        Ok(token)
    }

    // ─── User ───────────────────────────────────────────────────────────────

    /// Get the authenticated user's profile.
    pub async fn get_user(&self) -> Result<User> {
        let body = self.get_json("/users/current.json", &[]).await?;
        User::from_json(&body)
    }

    // ─── Trips ──────────────────────────────────────────────────────────────

    /// Get one page of trips (1-indexed) at the client's page size.
    pub async fn get_trips(&self, page: u32) -> Result<Page<TripSummary>> {
        self.get_trips_with_size(page, self.page_size).await
    }

    /// Get one page of trips with an explicit page size (clamped to 20..=200).
    pub async fn get_trips_with_size(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Page<TripSummary>> {
        let body = self.get_page("/trips.json", page, page_size).await?;
        map_page(&body, "trips")
    }

    /// Fetch every trip, one page after another.
    pub async fn get_all_trips(&self) -> Result<Vec<TripSummary>> {
        let page_size = self.page_size;
        let trips = pagination::collect_all(page_size, move |page| {
            self.get_trips_with_size(page, page_size)
        })
        .await?;
        tracing::debug!(count = trips.len(), "Fetched all trips");
        Ok(trips)
    }

    /// Get a single trip summary (no track points).
    pub async fn get_trip(&self, trip_id: u64) -> Result<TripSummary> {
        let body = self
            .get_json(&format!("/trips/{}.json", trip_id), &[])
            .await?;
        TripSummary::from_json(&body)
    }

    // ─── Routes ─────────────────────────────────────────────────────────────

    /// Get one page of routes (1-indexed) at the client's page size.
    pub async fn get_routes(&self, page: u32) -> Result<Page<RouteSummary>> {
        self.get_routes_with_size(page, self.page_size).await
    }

    /// Get one page of routes with an explicit page size (clamped to 20..=200).
    pub async fn get_routes_with_size(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Page<RouteSummary>> {
        let body = self.get_page("/routes.json", page, page_size).await?;
        map_page(&body, "routes")
    }

    /// Fetch every route, one page after another.
    pub async fn get_all_routes(&self) -> Result<Vec<RouteSummary>> {
        let page_size = self.page_size;
        let routes = pagination::collect_all(page_size, move |page| {
            self.get_routes_with_size(page, page_size)
        })
        .await?;
        tracing::debug!(count = routes.len(), "Fetched all routes");
        Ok(routes)
    }

    /// Get a single route summary.
    pub async fn get_route(&self, route_id: u64) -> Result<RouteSummary> {
        let body = self
            .get_json(&format!("/routes/{}.json", route_id), &[])
            .await?;
        RouteSummary::from_json(&body)
    }

    // ─── Sync ───────────────────────────────────────────────────────────────

    /// Get every trip and route change recorded after `since`.
    ///
    /// Store the returned cursor ([`SyncResult::next_since`]) and continue
    /// with [`RideWithGpsClient::get_sync_since`].
    pub async fn get_sync(&self, since: DateTime<Utc>) -> Result<SyncResult> {
        self.get_sync_assets(since, SyncAssets::All).await
    }

    /// Like [`RideWithGpsClient::get_sync`], limited to some asset types.
    pub async fn get_sync_assets(
        &self,
        since: DateTime<Utc>,
        assets: SyncAssets,
    ) -> Result<SyncResult> {
        self.get_sync_since(&format_utc_rfc3339(since), assets).await
    }

    /// Get changes after a cursor returned by an earlier sync.
    ///
    /// The cursor is sent exactly as the server produced it.
    pub async fn get_sync_since(&self, since: &str, assets: SyncAssets) -> Result<SyncResult> {
        tracing::debug!(since, assets = assets.as_query(), "Fetching sync changes");

        let body = self
            .get_json(
                "/sync.json",
                &[
                    ("since", since.to_string()),
                    ("assets", assets.as_query().to_string()),
                ],
            )
            .await?;
        SyncResult::from_json(&body)
    }

    // ─── Helpers ────────────────────────────────────────────────────────────

    async fn get_page(&self, path: &str, page: u32, page_size: u32) -> Result<Value> {
        pagination::validate_page(page)?;
        let page_size = clamp_page_size(page_size);
        tracing::debug!(path, page, page_size, "Fetching page");

        self.get_json(
            path,
            &[
                ("page", page.to_string()),
                ("page_size", page_size.to_string()),
            ],
        )
        .await
    }

    /// Generic authenticated GET returning the JSON body.
    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = request::endpoint_url(&self.base_url, path);
        tracing::debug!(method = "GET", path, "Sending request");

        let mut builder = self.http.get(&url);
        if !query.is_empty() {
            builder = builder.query(query);
        }

        request::execute(
            request::authorize(builder, &self.api_key, &self.auth_token),
            path,
        )
        .await
    }
}
