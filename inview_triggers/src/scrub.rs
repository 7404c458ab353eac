// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport-progress scrubbing.
//!
//! A progress binding pins playback at add time (persist then pause) and
//! thereafter maps an externally computed progress fraction straight onto
//! the handle with [`PlaybackHandle::seek`]. The fraction usually comes
//! from [`travel_progress`] over a viewport entry, but callers may feed
//! any clamped fraction.

use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;

use inview_playback::{EffectResolver, PlaybackHandle};
use inview_viewport::{VisibilityEntry, travel_progress};

/// Viewport-progress trigger handler.
pub struct ScrubTrigger<K, H> {
    bindings: HashMap<K, H>,
}

impl<K, H> Default for ScrubTrigger<K, H> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }
}

impl<K, H> fmt::Debug for ScrubTrigger<K, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrubTrigger")
            .field("bindings", &self.bindings.len())
            .finish()
    }
}

impl<K: Copy + Eq + Hash, H: PlaybackHandle> ScrubTrigger<K, H> {
    /// Creates an empty handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the element has a live binding.
    #[must_use]
    pub fn contains(&self, element: K) -> bool {
        self.bindings.contains_key(&element)
    }

    /// Binds `element` to the effect `spec`, animating `target`.
    ///
    /// The handle is persisted and immediately paused so the effect's
    /// resolved state sticks while progress holds it at a frame.
    pub fn add<R>(&mut self, element: K, target: K, spec: &R::Spec, resolver: &mut R)
    where
        R: EffectResolver<K, Handle = H>,
    {
        let Some(mut handle) = resolver.resolve(target, spec) else {
            return;
        };
        handle.persist();
        handle.pause();
        self.bindings.insert(element, handle);
    }

    /// Tears down the element's binding, if any. Idempotent.
    pub fn remove(&mut self, element: K) {
        self.bindings.remove(&element);
    }

    /// Seeks the bound handle to `fraction`, clamped to `0.0..=1.0`.
    pub fn on_progress(&mut self, element: K, fraction: f64) {
        if let Some(handle) = self.bindings.get_mut(&element) {
            handle.seek(fraction.clamp(0.0, 1.0));
        }
    }

    /// Derives progress from a viewport entry and seeks to it.
    pub fn on_visibility(&mut self, element: K, entry: &VisibilityEntry) {
        self.on_progress(element, travel_progress(entry));
    }
}
