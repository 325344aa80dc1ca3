// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Planned route summary record.

use crate::error::Result;
use crate::mapper::{decode, non_negative, null_as_default};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Summary of a route drawn in the route planner.
///
/// Routes have not been ridden, so there is no time, speed or sensor data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub id: u64,
    pub user_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Total distance in meters
    #[serde(default, deserialize_with = "non_negative")]
    pub distance: f64,
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
    #[serde(default, deserialize_with = "null_as_default")]
    pub visibility: String,

    pub description: Option<String>,
    pub locality: Option<String>,
    pub administrative_area: Option<String>,
    pub country_code: Option<String>,

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
    /// Percentage of the route that is unpaved
    pub unpaved_pct: Option<f64>,
    pub surface: Option<String>,
    pub archived: Option<bool>,

    pub url: Option<String>,
    pub html_url: Option<String>,
}

#[derive(Deserialize)]
struct RouteResponse {
    route: RouteSummary,
}

impl RouteSummary {
    /// Map a `GET /routes/{id}.json` response body (`{"route": {...}}`).
    pub fn from_json(body: &Value) -> Result<Self> {
        Ok(decode::<RouteResponse>(body, "")?.route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RwgpsError;
    use serde_json::json;

    #[test]
    fn test_route_parses_terrain_and_surface() {
        let route = RouteSummary::from_json(&json!({"route": {
            "id": 55,
            "user_id": 7,
            "name": "Skyline loop",
            "distance": 48280.3,
            "elevation_gain": 1204.5,
            "elevation_loss": 1204.5,
            "terrain": "hilly",
            "unpaved_pct": 12,
            "archived": false
        }}))
        .unwrap();

        assert_eq!(route.name, "Skyline loop");
        assert_eq!(route.terrain.as_deref(), Some("hilly"));
        assert_eq!(route.unpaved_pct, Some(12.0));
        assert_eq!(route.archived, Some(false));
        assert!(route.surface.is_none());
    }

    #[test]
    fn test_archived_wrong_type() {
        let body = json!({"route": {"id": 1, "user_id": 1, "archived": "yes"}});
        let err = RouteSummary::from_json(&body).unwrap_err();
        assert!(matches!(err, RwgpsError::Parse { ref field, .. } if field == "route.archived"));
    }

    #[test]
    fn test_negative_elevation_rejected() {
        let body = json!({"route": {"id": 1, "user_id": 1, "elevation_gain": -3}});
        let err = RouteSummary::from_json(&body).unwrap_err();
        assert!(
            matches!(err, RwgpsError::Parse { ref field, .. } if field == "route.elevation_gain")
        );
    }
}
