// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Records mapped from Ride with GPS API responses.

pub mod page;
pub mod route;
pub mod sync;
pub mod trip;
pub mod user;

pub use page::{Page, PaginationMeta};
pub use route::RouteSummary;
pub use sync::{ItemKind, SyncAction, SyncAssets, SyncItem, SyncResult};
pub use trip::TripSummary;
pub use user::{AuthToken, User};
