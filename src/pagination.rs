// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sequential page collection for collection endpoints.

use crate::error::{Result, RwgpsError};
use crate::models::Page;
use std::future::Future;

/// Largest page size the server accepts.
pub const MAX_PAGE_SIZE: u32 = 200;

/// Smallest page size the server accepts.
pub const MIN_PAGE_SIZE: u32 = 20;

/// Page size used unless the caller picks another; the maximum keeps the
/// number of requests for a full listing low.
pub const DEFAULT_PAGE_SIZE: u32 = MAX_PAGE_SIZE;

/// Clamp a requested page size into the range the server accepts.
pub fn clamp_page_size(page_size: u32) -> u32 {
    page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
}

/// Pages are 1-indexed.
pub fn validate_page(page: u32) -> Result<()> {
    if page < 1 {
        return Err(RwgpsError::InvalidRequest(
            "Page must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

/// A page shorter than the requested size (including an empty one) is the
/// last page.
pub fn is_last_page(item_count: usize, page_size: u32) -> bool {
    item_count < page_size as usize
}

/// Fetch pages 1, 2, 3, ... one at a time until a short page arrives,
/// concatenating items in page order.
///
/// The total count is unknown up front, so each request waits for the
/// previous one. There is no upper bound on the number of pages.
pub async fn collect_all<T, F, Fut>(page_size: u32, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut all = Vec::new();
    let mut page = 1u32;

    loop {
        let result = fetch(page).await?;
        let count = result.items.len();
        all.extend(result.items);

        tracing::debug!(page, count, total = all.len(), "Collected page");

        if is_last_page(count, page_size) {
            break;
        }
        page += 1;
    }

    Ok(all)
}
