// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic in-memory [`ViewportHost`] for tests and headless use.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::{ObserverConfig, SubscriptionId, ViewportHost};

/// An in-memory host that records subscriptions instead of watching
/// geometry.
///
/// Ids are allocated monotonically and never reused. The stub keeps the
/// active subscription set plus observe/unobserve journals, so tests can
/// assert on exact subscription churn; the test itself plays the role of
/// the visibility check by delivering [`VisibilityEntry`] values to the
/// consumer under whatever order it wants to exercise.
///
/// [`VisibilityEntry`]: crate::VisibilityEntry
#[derive(Clone, Debug, Default)]
pub struct StubViewport<K> {
    next_id: u64,
    active: HashMap<SubscriptionId, (K, ObserverConfig)>,
    observed: Vec<(SubscriptionId, K, ObserverConfig)>,
    unobserved: Vec<SubscriptionId>,
}

impl<K: Copy> StubViewport<K> {
    /// Creates an empty stub.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 0,
            active: HashMap::new(),
            observed: Vec::new(),
            unobserved: Vec::new(),
        }
    }

    /// Returns the number of currently active subscriptions.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Returns the configuration of an active subscription.
    #[must_use]
    pub fn config(&self, id: SubscriptionId) -> Option<ObserverConfig> {
        self.active.get(&id).map(|(_, config)| *config)
    }

    /// Returns the element key of an active subscription.
    #[must_use]
    pub fn key(&self, id: SubscriptionId) -> Option<K> {
        self.active.get(&id).map(|(key, _)| *key)
    }

    /// Returns every `observe` call made so far, in order.
    #[must_use]
    pub fn observe_journal(&self) -> &[(SubscriptionId, K, ObserverConfig)] {
        &self.observed
    }

    /// Returns every `unobserve` call made so far, in order.
    ///
    /// Includes calls for ids that were already inactive.
    #[must_use]
    pub fn unobserve_journal(&self) -> &[SubscriptionId] {
        &self.unobserved
    }

    /// Returns the active subscription ids for the given element key.
    #[must_use]
    pub fn subscriptions_for(&self, key: K) -> Vec<SubscriptionId>
    where
        K: PartialEq,
    {
        let mut ids: Vec<SubscriptionId> = self
            .active
            .iter()
            .filter(|(_, (k, _))| *k == key)
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids
    }
}

impl<K: Copy> ViewportHost<K> for StubViewport<K> {
    fn observe(&mut self, key: K, config: ObserverConfig) -> SubscriptionId {
        let id = SubscriptionId::from_raw(self.next_id);
        self.next_id += 1;
        self.active.insert(id, (key, config));
        self.observed.push((id, key, config));
        id
    }

    fn unobserve(&mut self, id: SubscriptionId) {
        self.active.remove(&id);
        self.unobserved.push(id);
    }
}
