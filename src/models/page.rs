// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One page of a collection endpoint.

use crate::mapper::null_as_default;
use serde::{Deserialize, Serialize};

/// Pagination block from a collection response's `meta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Total records across all pages
    #[serde(default, deserialize_with = "null_as_default")]
    pub record_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_size: u64,
    /// Null on the last page
    pub next_page_url: Option<String>,
}

/// Items of one page, in server order.
///
/// There is no "has more" flag: a page shorter than the requested size is
/// the last one. `pagination` is whatever metadata the server sent, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<PaginationMeta>,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
