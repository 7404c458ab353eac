// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host capability that owns real subscriptions.

use crate::ObserverConfig;

/// Opaque key for one visibility subscription.
///
/// Ids are allocated by the [`ViewportHost`] and never reused within one
/// host's lifetime, so a consumer can use them to drop signals that arrive
/// after it has already unobserved (late callbacks).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates an id from its raw value. Intended for host implementations.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value of this id.
    #[must_use]
    pub const fn into_raw(self) -> u64 {
        self.0
    }
}

/// Capability for creating and dropping visibility subscriptions.
///
/// `K` is the caller's element key type. The host watches the element's
/// intersection with its root under the given configuration and delivers
/// `(SubscriptionId, VisibilityEntry)` pairs back to its consumer through
/// whatever channel the integration uses (typically a direct call into the
/// consumer's signal entry point once per observer pass).
///
/// Multiple subscriptions may observe the same element with different
/// configurations; the host must keep them independent. The delivery order
/// between subscriptions that fire in the same pass is unspecified.
pub trait ViewportHost<K> {
    /// Starts observing `key` under `config` and returns the subscription.
    fn observe(&mut self, key: K, config: ObserverConfig) -> SubscriptionId;

    /// Stops the given subscription.
    ///
    /// Unknown or already-dropped ids are a silent no-op.
    fn unobserve(&mut self, id: SubscriptionId);
}
