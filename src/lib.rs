// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Ride with GPS: async client for the Ride with GPS API (v1)
//!
//! This crate authenticates against Ride with GPS, reads trips, routes and
//! the current user's profile, and follows incremental changes through the
//! sync endpoint. Responses are mapped into typed records.
//!
//! ```no_run
//! # async fn run() -> ridewithgps_client::error::Result<()> {
//! use ridewithgps_client::RideWithGpsClient;
//!
//! let http = reqwest::Client::new();
//! let auth = RideWithGpsClient::authenticate(&http, "api-key", "me@example.com", "secret").await?;
//!
//! let client = RideWithGpsClient::new(http, "api-key", auth.auth_token);
//! let trips = client.get_all_trips().await?;
//! println!("{} trips", trips.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod mapper;
pub mod models;
pub mod pagination;
pub mod request;
pub mod time_utils;

pub use client::RideWithGpsClient;
pub use config::{Config, ConfigError};
pub use error::RwgpsError;
pub use models::{
    AuthToken, ItemKind, Page, PaginationMeta, RouteSummary, SyncAction, SyncAssets, SyncItem,
    SyncResult, TripSummary, User,
};
