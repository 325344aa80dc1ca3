// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trip (recorded ride) summary record.

use crate::error::Result;
use crate::mapper::{decode, non_negative, null_as_default};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Summary of a recorded trip, without track points.
///
/// Units are the server's: meters, seconds, km/h, bpm, rpm, watts, kcal.
/// Sensor fields are `None` when the ride was recorded without that sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    /// Trip ID
    pub id: u64,
    /// Owner's user ID
    pub user_id: u64,
    /// Trip name/title
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Total distance in meters
    #[serde(default, deserialize_with = "non_negative")]
    pub distance: f64,
    /// Elapsed time in seconds, including stops
    #[serde(default, deserialize_with = "non_negative")]
    pub duration: f64,
    /// Moving time in seconds
    #[serde(default, deserialize_with = "non_negative")]
    pub moving_time: f64,
    /// Total climbing in meters
    #[serde(default, deserialize_with = "non_negative")]
    pub elevation_gain: f64,
    /// Total descending in meters
    #[serde(default, deserialize_with = "non_negative")]
    pub elevation_loss: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
    /// "public", "friends_only" or "private"
    #[serde(default, deserialize_with = "null_as_default")]
    pub visibility: String,
    /// Indoor / trainer activity
    #[serde(default, deserialize_with = "null_as_default")]
    pub stationary: bool,

    pub description: Option<String>,
    /// When the ride started (ISO 8601)
    pub departed_at: Option<String>,
    /// e.g. "America/Los_Angeles"
    pub time_zone: Option<String>,
    /// City name
    pub locality: Option<String>,
    /// State/province
    pub administrative_area: Option<String>,
    pub country_code: Option<String>,
    /// e.g. "cycling", "running"
    pub activity_type: Option<String>,

    // ─── Speed (km/h) ────────────────────────────────────────────
    pub avg_speed: Option<f64>,
    pub max_speed: Option<f64>,

    // ─── Heart rate (bpm) ────────────────────────────────────────
    pub avg_hr: Option<f64>,
    pub min_hr: Option<f64>,
    pub max_hr: Option<f64>,

    // ─── Cadence (rpm) ───────────────────────────────────────────
    pub avg_cad: Option<f64>,
    pub min_cad: Option<f64>,
    pub max_cad: Option<f64>,

    // ─── Power (watts) ───────────────────────────────────────────
    pub avg_watts: Option<f64>,
    pub min_watts: Option<f64>,
    pub max_watts: Option<f64>,

    /// Estimated kcal
    pub calories: Option<f64>,

    // ─── Start/end and bounding box ──────────────────────────────
    pub first_lat: Option<f64>,
    pub first_lng: Option<f64>,
    pub last_lat: Option<f64>,
    pub last_lng: Option<f64>,
    pub sw_lat: Option<f64>,
    pub sw_lng: Option<f64>,
    pub ne_lat: Option<f64>,
    pub ne_lng: Option<f64>,

    pub track_type: Option<String>,
    pub terrain: Option<String>,
    pub difficulty: Option<String>,
    /// Recording device name (e.g. "Garmin Edge 530")
    pub device: Option<String>,

    /// API URL
    pub url: Option<String>,
    /// Browser URL on ridewithgps.com
    pub web_url: Option<String>,
    pub html_url: Option<String>,
}

#[derive(Deserialize)]
struct TripResponse {
    trip: TripSummary,
}

impl TripSummary {
    /// Map a `GET /trips/{id}.json` response body (`{"trip": {...}}`).
    pub fn from_json(body: &Value) -> Result<Self> {
        Ok(decode::<TripResponse>(body, "")?.trip)
    }

    /// Any heart rate reading was recorded.
    pub fn has_heart_rate(&self) -> bool {
        self.avg_hr.is_some() || self.min_hr.is_some() || self.max_hr.is_some()
    }

    pub fn has_power(&self) -> bool {
        self.avg_watts.is_some() || self.min_watts.is_some() || self.max_watts.is_some()
    }

    pub fn has_cadence(&self) -> bool {
        self.avg_cad.is_some() || self.min_cad.is_some() || self.max_cad.is_some()
    }
}
