// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Decoding of raw JSON responses into records.
//!
//! Records derive `Deserialize`; this module runs them through
//! `serde_path_to_error` so a failure reports the full path of the offending
//! field (e.g. `trips[3].distance`) as [`RwgpsError::Parse`].
//!
//! The API omits sensor fields (heart rate, power, cadence) when a ride was
//! recorded without the sensor, and sends `null` for others. Both decode to
//! `None`. Unknown fields are ignored.

use crate::error::{Result, RwgpsError};
use crate::models::{Page, PaginationMeta};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use serde_path_to_error::Segment;

/// Path reported when the response body itself has the wrong shape.
pub const BODY_FIELD: &str = "<body>";

/// Decode `value` into `T`. `prefix` is prepended to field paths in errors;
/// pass an empty string for the response root.
pub fn decode<T: DeserializeOwned>(value: &Value, prefix: &str) -> Result<T> {
    serde_path_to_error::deserialize(value).map_err(|e| {
        let mut field = prefix.to_string();
        for segment in e.path().iter() {
            match segment {
                Segment::Seq { index } => field.push_str(&format!("[{}]", index)),
                Segment::Map { key } | Segment::Enum { variant: key } => push_key(&mut field, key),
                _ => push_key(&mut field, "?"),
            }
        }

        let reason = e.inner().to_string();
        // serde reports a missing field against its parent object
        if let Some(missing) = missing_field(&reason) {
            push_key(&mut field, missing);
        }
        if field.is_empty() {
            field = BODY_FIELD.to_string();
        }

        RwgpsError::parse(field, reason)
    })
}

fn push_key(field: &mut String, key: &str) {
    if !field.is_empty() {
        field.push('.');
    }
    field.push_str(key);
}

fn missing_field(reason: &str) -> Option<&str> {
    reason
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
}

/// `null` and absent both decode to the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A measurement that defaults to zero and may not be negative.
pub(crate) fn non_negative<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    if value < 0.0 {
        return Err(D::Error::custom(format!(
            "expected a non-negative number, got {}",
            value
        )));
    }
    Ok(value)
}

/// A string that must be present and non-blank.
pub(crate) fn non_empty_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.trim().is_empty() {
        return Err(D::Error::custom("expected a non-empty string"));
    }
    Ok(value)
}

#[derive(Deserialize)]
struct PageMeta {
    #[serde(default)]
    pagination: Option<PaginationMeta>,
}

/// Map a collection response into a [`Page`].
///
/// Accepts either a bare JSON array or a wrapper object holding the array
/// under `key` next to an optional `meta.pagination` block.
pub fn map_page<T: DeserializeOwned>(body: &Value, key: &str) -> Result<Page<T>> {
    match body {
        Value::Array(_) => Ok(Page {
            items: decode(body, key)?,
            pagination: None,
        }),
        Value::Object(object) => {
            let items = match object.get(key) {
                None => return Err(RwgpsError::parse(key, "required field is missing")),
                Some(Value::Null) => Vec::new(),
                Some(items) => decode(items, key)?,
            };
            let pagination = match object.get("meta") {
                Some(meta) => decode::<Option<PageMeta>>(meta, "meta")?.and_then(|m| m.pagination),
                None => None,
            };
            Ok(Page { items, pagination })
        }
        other => Err(RwgpsError::parse(
            BODY_FIELD,
            format!("expected a JSON array or object, got {}", type_name(other)),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TripSummary;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        id: u64,
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
        #[serde(default, deserialize_with = "non_negative")]
        distance: f64,
        avg_hr: Option<f64>,
    }

    #[test]
    fn test_absent_and_null_optionals_are_none() {
        let sample: Sample = decode(&json!({"id": 1, "avg_hr": null}), "").unwrap();
        assert_eq!(sample.id, 1);
        assert_eq!(sample.avg_hr, None);
        assert_eq!(sample.name, "");
        assert_eq!(sample.distance, 0.0);

        let sample: Sample = decode(&json!({"id": 1, "name": null}), "").unwrap();
        assert_eq!(sample.name, "");
    }

    #[test]
    fn test_wrong_type_names_nested_path() {
        let err = decode::<Vec<Sample>>(
            &json!([{"id": 1}, {"id": 2}, {"id": 3, "distance": "far"}]),
            "trips",
        )
        .unwrap_err();
        assert!(matches!(err, RwgpsError::Parse { ref field, .. } if field == "trips[2].distance"));
    }

    #[test]
    fn test_missing_field_names_field() {
        let err = decode::<Sample>(&json!({"name": "x"}), "trip").unwrap_err();
        assert!(matches!(err, RwgpsError::Parse { ref field, .. } if field == "trip.id"));
    }

    #[test]
    fn test_negative_measurement_rejected() {
        let err = decode::<Sample>(&json!({"id": 1, "distance": -5.0}), "").unwrap_err();
        assert!(matches!(err, RwgpsError::Parse { ref field, .. } if field == "distance"));
    }

    #[test]
    fn test_root_shape_error_is_body() {
        let err = decode::<Sample>(&json!("nope"), "").unwrap_err();
        assert!(matches!(err, RwgpsError::Parse { ref field, .. } if field == BODY_FIELD));
    }

    #[test]
    fn test_map_page_wrapper_with_meta() {
        let body = json!({
            "trips": [{"id": 1, "user_id": 2}, {"id": 2, "user_id": 2}],
            "meta": {"pagination": {"record_count": 2, "page_count": 1, "page_size": 200, "next_page_url": null}}
        });
        let page: Page<TripSummary> = map_page(&body, "trips").unwrap();

        assert_eq!(page.len(), 2);
        let meta = page.pagination.unwrap();
        assert_eq!(meta.record_count, 2);
        assert!(meta.next_page_url.is_none());
    }

    #[test]
    fn test_map_page_bare_array_and_null_items() {
        let page: Page<TripSummary> = map_page(&json!([{"id": 1, "user_id": 2}]), "trips").unwrap();
        assert_eq!(page.len(), 1);
        assert!(page.pagination.is_none());

        let page: Page<TripSummary> = map_page(&json!({"trips": null}), "trips").unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn test_map_page_missing_key() {
        let err = map_page::<TripSummary>(&json!({"routes": []}), "trips").unwrap_err();
        assert!(matches!(err, RwgpsError::Parse { ref field, .. } if field == "trips"));
    }

    #[test]
    fn test_map_page_rejects_scalar_body() {
        let err = map_page::<TripSummary>(&json!(42), "trips").unwrap_err();
        assert!(matches!(err, RwgpsError::Parse { ref field, .. } if field == BODY_FIELD));
    }
}
