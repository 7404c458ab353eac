// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inview Viewport: the visibility observation capability.
//!
//! Viewport-driven triggers need to know when a watched element's
//! intersection with a scrollable root crosses a configured area threshold.
//! This crate defines the contract between those triggers and whatever
//! actually watches geometry — a browser intersection observer, a UI
//! toolkit's scroll region, or a test harness:
//!
//! - [`ObserverConfig`]: threshold fraction plus root margins for one
//!   subscription.
//! - [`VisibilityEntry`]: one push signal — an intersecting flag and the
//!   element/root bounds at the time of the check.
//! - [`ViewportHost`]: the capability consumed by trigger controllers to
//!   create and drop subscriptions, generic over the caller's element key
//!   type.
//! - [`StubViewport`]: a deterministic in-memory host for tests and
//!   headless use.
//!
//! Hosts deliver `(SubscriptionId, VisibilityEntry)` pairs back to their
//! consumer. The delivery order between subscriptions that fire in the same
//! visibility pass is unspecified; consumers are expected to be correct
//! under either order.
//!
//! ## Minimal example
//!
//! ```rust
//! use inview_viewport::{ObserverConfig, StubViewport, ViewportHost};
//!
//! let mut viewport: StubViewport<u32> = StubViewport::new();
//!
//! let config = ObserverConfig::with_threshold(0.5);
//! let sub = viewport.observe(7, config);
//!
//! assert_eq!(viewport.active_count(), 1);
//! assert_eq!(viewport.config(sub), Some(config));
//!
//! viewport.unobserve(sub);
//! assert_eq!(viewport.active_count(), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod entry;
mod host;
mod stub;

pub use config::ObserverConfig;
pub use entry::{VisibilityEntry, travel_progress};
pub use host::{SubscriptionId, ViewportHost};
pub use stub::StubViewport;
