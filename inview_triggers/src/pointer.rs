// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-driven scrubbing.
//!
//! Instead of playing an animation, a pointer-move binding maps the
//! pointer's fractional position across the bound element's bounds onto
//! playback progress: playback is paused once and then seeked on every
//! move. This reuses the playback-handle contract but deliberately not the
//! enter/exit state machine — there is no lifecycle, just a position.

use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Point, Rect};

use inview_playback::{EffectResolver, PlaybackHandle};

/// Which axis of pointer movement drives progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Horizontal position across the bounds.
    #[default]
    X,
    /// Vertical position across the bounds.
    Y,
}

/// Returns the pointer's fractional position along `axis` within `bounds`,
/// clamped to `0.0..=1.0`. Degenerate bounds report `0.0`.
#[must_use]
pub fn axis_fraction(axis: Axis, pos: Point, bounds: Rect) -> f64 {
    let (offset, extent) = match axis {
        Axis::X => (pos.x - bounds.x0, bounds.width()),
        Axis::Y => (pos.y - bounds.y0, bounds.height()),
    };
    if extent <= 0.0 {
        return 0.0;
    }
    (offset / extent).clamp(0.0, 1.0)
}

struct PointerBinding<H> {
    handle: H,
    axis: Axis,
    scrubbing: bool,
}

/// Pointer-move trigger handler.
pub struct PointerTrigger<K, H> {
    bindings: HashMap<K, PointerBinding<H>>,
}

impl<K, H> Default for PointerTrigger<K, H> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }
}

impl<K, H> fmt::Debug for PointerTrigger<K, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerTrigger")
            .field("bindings", &self.bindings.len())
            .finish()
    }
}

impl<K: Copy + Eq + Hash, H: PlaybackHandle> PointerTrigger<K, H> {
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
    pub fn add<R>(&mut self, element: K, target: K, spec: &R::Spec, axis: Axis, resolver: &mut R)
    where
        R: EffectResolver<K, Handle = H>,
    {
        let Some(mut handle) = resolver.resolve(target, spec) else {
            return;
        };
        handle.persist();
        self.bindings.insert(
            element,
            PointerBinding {
                handle,
                axis,
                scrubbing: false,
            },
        );
    }

    /// Tears down the element's binding, if any. Idempotent.
    pub fn remove(&mut self, element: K) {
        self.bindings.remove(&element);
    }

    /// Feeds one pointer position, with the element's current bounds.
    ///
    /// The first move pauses autonomous playback; every move (including
    /// the first) seeks to the pointer's axis fraction.
    pub fn on_pointer_move(&mut self, element: K, pos: Point, bounds: Rect) {
        let Some(binding) = self.bindings.get_mut(&element) else {
            return;
        };
        if !binding.scrubbing {
            binding.handle.pause();
            binding.scrubbing = true;
        }
        binding
            .handle
            .seek(axis_fraction(binding.axis, pos, bounds));
    }
}
