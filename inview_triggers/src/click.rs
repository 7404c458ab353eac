// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-triggered playback.

use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;

use inview_playback::{EffectResolver, PlayState, PlaybackHandle};

/// How playback reacts to repeated clicks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ClickBehavior {
    /// Every click restarts playback from progress zero.
    #[default]
    Restart,
    /// Clicks alternate between playing and pausing.
    Toggle,
    /// Clicks alternate between playing forward and reversing.
    Alternate,
}

struct ClickBinding<H> {
    handle: H,
    behavior: ClickBehavior,
    /// Next direction for [`ClickBehavior::Alternate`].
    forward: bool,
}

/// Click trigger handler.
///
/// Exposes the same bind/unbind shape as every trigger handler: `add`
/// resolves the effect (a `None` resolution makes the call a no-op) and
/// replaces any previous binding for the element; `remove` is an
/// idempotent teardown. Hosts feed raw clicks through
/// [`on_click`](Self::on_click).
pub struct ClickTrigger<K, H> {
    bindings: HashMap<K, ClickBinding<H>>,
}

impl<K, H> Default for ClickTrigger<K, H> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }
}

impl<K, H> fmt::Debug for ClickTrigger<K, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickTrigger")
            .field("bindings", &self.bindings.len())
            .finish()
    }
}

impl<K: Copy + Eq + Hash, H: PlaybackHandle> ClickTrigger<K, H> {
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
    pub fn add<R>(
        &mut self,
        element: K,
        target: K,
        spec: &R::Spec,
        behavior: ClickBehavior,
        resolver: &mut R,
    ) where
        R: EffectResolver<K, Handle = H>,
    {
        let Some(mut handle) = resolver.resolve(target, spec) else {
            return;
        };
        handle.persist();
        self.bindings.insert(
            element,
            ClickBinding {
                handle,
                behavior,
                forward: true,
            },
        );
    }

    /// Tears down the element's binding, if any. Idempotent.
    pub fn remove(&mut self, element: K) {
        self.bindings.remove(&element);
    }

    /// Feeds one click on `element`. Unbound elements are a no-op.
    pub fn on_click(&mut self, element: K) {
        let Some(binding) = self.bindings.get_mut(&element) else {
            return;
        };
        match binding.behavior {
            ClickBehavior::Restart => {
                binding.handle.seek(0.0);
                binding.handle.play();
            }
            ClickBehavior::Toggle => {
                if binding.handle.play_state() == PlayState::Running {
                    binding.handle.pause();
                } else {
                    binding.handle.play();
                }
            }
            ClickBehavior::Alternate => {
                if binding.forward {
                    binding.handle.play();
                } else {
                    binding.handle.reverse();
                }
                binding.forward = !binding.forward;
            }
        }
    }
}
