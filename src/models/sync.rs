// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Incremental sync records (`GET /sync.json`).

use crate::error::Result;
use crate::mapper::{decode, non_empty_string, null_as_default};
use crate::time_utils::parse_utc_rfc3339;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What happened to a synced item.
///
/// `added` and `removed` (collection membership changes) are reported as
/// `Created` and `Deleted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncAction {
    #[serde(alias = "added")]
    Created,
    Updated,
    #[serde(alias = "removed")]
    Deleted,
}

impl SyncAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncAction::Created => "created",
            SyncAction::Updated => "updated",
            SyncAction::Deleted => "deleted",
        }
    }
}

/// Kind of entity a sync item refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemKind {
    Route,
    Trip,
    /// Kind added server-side after this client was written
    Other(String),
}

impl ItemKind {
    pub fn as_str(&self) -> &str {
        match self {
            ItemKind::Route => "route",
            ItemKind::Trip => "trip",
            ItemKind::Other(tag) => tag,
        }
    }
}

impl From<String> for ItemKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "route" => ItemKind::Route,
            "trip" => ItemKind::Trip,
            _ => ItemKind::Other(tag),
        }
    }
}

impl From<ItemKind> for String {
    fn from(kind: ItemKind) -> Self {
        kind.as_str().to_string()
    }
}

/// One change reported by the sync endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncItem {
    #[serde(rename = "item_type")]
    pub kind: ItemKind,
    pub item_id: u64,
    /// Owner of the changed item
    pub item_user_id: u64,
    pub action: SyncAction,
    /// When the change happened, as sent by the server
    #[serde(default, deserialize_with = "null_as_default")]
    pub datetime: String,
    /// API URL for the changed item
    pub item_url: Option<String>,
}

impl SyncItem {
    /// `datetime` as UTC, if the server sent RFC 3339.
    pub fn datetime_utc(&self) -> Option<DateTime<Utc>> {
        parse_utc_rfc3339(&self.datetime)
    }
}

/// Full sync response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SyncResponse", into = "SyncResponse")]
pub struct SyncResult {
    /// Changes in server order
    pub items: Vec<SyncItem>,
    /// Server time of this sync, verbatim. Pass it back as `since` on the
    /// next call.
    pub rwgps_datetime: String,
    /// Pre-built URL for the next sync call
    pub next_sync_url: Option<String>,
}

/// Wire shape: `{"items": [...], "meta": {"rwgps_datetime", "next_sync_url"}}`.
#[derive(Serialize, Deserialize)]
struct SyncResponse {
    #[serde(deserialize_with = "null_as_default")]
    items: Vec<SyncItem>,
    meta: SyncMeta,
}

#[derive(Serialize, Deserialize)]
struct SyncMeta {
    #[serde(deserialize_with = "non_empty_string")]
    rwgps_datetime: String,
    next_sync_url: Option<String>,
}

impl From<SyncResponse> for SyncResult {
    fn from(response: SyncResponse) -> Self {
        Self {
            items: response.items,
            rwgps_datetime: response.meta.rwgps_datetime,
            next_sync_url: response.meta.next_sync_url,
        }
    }
}

impl From<SyncResult> for SyncResponse {
    fn from(result: SyncResult) -> Self {
        Self {
            items: result.items,
            meta: SyncMeta {
                rwgps_datetime: result.rwgps_datetime,
                next_sync_url: result.next_sync_url,
            },
        }
    }
}

impl SyncResult {
    /// Map a sync response body.
    pub fn from_json(body: &Value) -> Result<Self> {
        decode(body, "")
    }

    /// Cursor to pass to the next sync call, exactly as the server sent it.
    pub fn next_since(&self) -> &str {
        &self.rwgps_datetime
    }

    /// The sync horizon as UTC, if the server sent RFC 3339.
    pub fn rwgps_datetime_utc(&self) -> Option<DateTime<Utc>> {
        parse_utc_rfc3339(&self.rwgps_datetime)
    }
}

/// Which asset types the sync endpoint reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncAssets {
    #[default]
    All,
    Routes,
    Trips,
}

impl SyncAssets {
    pub fn as_query(&self) -> &'static str {
        match self {
            SyncAssets::All => "routes,trips",
            SyncAssets::Routes => "routes",
            SyncAssets::Trips => "trips",
        }
    }
}
