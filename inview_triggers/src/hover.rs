// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover-triggered playback.
//!
//! Hover is the same shape of signal as viewport entry: a boolean with two
//! polarities (pointer inside / pointer outside). The handler therefore
//! reuses the enter/exit transition table from `inview_enter` unchanged —
//! all four repeat modes work for hover exactly as they do for
//! viewport-enter, including the no-op handling of redundant signals.

use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;

use inview_enter::Mode;
use inview_enter::machine::{self, HandleOp, Phase};
use inview_playback::{EffectResolver, PlaybackHandle};

struct HoverBinding<H> {
    handle: H,
    mode: Mode,
    phase: Phase,
}

/// Hover trigger handler.
///
/// `add`/`remove` follow the uniform handler shape; hosts feed pointer
/// enter/leave transitions through [`on_hover`](Self::on_hover).
pub struct HoverTrigger<K, H> {
    bindings: HashMap<K, HoverBinding<H>>,
}

impl<K, H> Default for HoverTrigger<K, H> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }
}

impl<K, H> fmt::Debug for HoverTrigger<K, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoverTrigger")
            .field("bindings", &self.bindings.len())
            .finish()
    }
}

impl<K: Copy + Eq + Hash, H: PlaybackHandle> HoverTrigger<K, H> {
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
    pub fn add<R>(&mut self, element: K, target: K, spec: &R::Spec, mode: Mode, resolver: &mut R)
    where
        R: EffectResolver<K, Handle = H>,
    {
        let Some(mut handle) = resolver.resolve(target, spec) else {
            return;
        };
        handle.persist();
        self.bindings.insert(
            element,
            HoverBinding {
                handle,
                mode,
                phase: Phase::Unseen,
            },
        );
    }

    /// Tears down the element's binding, if any. Idempotent.
    pub fn remove(&mut self, element: K) {
        self.bindings.remove(&element);
    }

    /// Feeds one hover transition: `inside` is `true` on pointer enter and
    /// `false` on pointer leave. Unbound elements are a no-op.
    pub fn on_hover(&mut self, element: K, inside: bool) {
        let Some(binding) = self.bindings.get_mut(&element) else {
            return;
        };
        let transition = machine::step(binding.mode, binding.phase, inside);
        binding.phase = transition.phase;
        for op in &transition.ops {
            match op {
                HandleOp::Play => binding.handle.play(),
                HandleOp::Pause => binding.handle.pause(),
                HandleOp::Reverse => binding.handle.reverse(),
                HandleOp::Seek(progress) => binding.handle.seek(*progress),
            }
        }
    }
}
