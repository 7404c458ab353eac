// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effect resolution: from an opaque effect description to a live handle.

use crate::PlaybackHandle;

/// Resolves opaque effect descriptions into playback handles.
///
/// The resolver is the seam between declarative trigger configuration and
/// the animation engine. Trigger bindings pass the effect description
/// through untouched; only the resolver interprets it.
///
/// Returning `None` means "no implementation is registered for this
/// effect" (misconfigured, or not yet loaded). It is a degraded mode, not
/// an error: callers must skip the whole binding silently so that one bad
/// entry cannot take down unrelated bindings.
///
/// # Example
///
/// ```rust
/// use inview_playback::{EffectResolver, RecordingHandle};
///
/// /// Resolves only the effects it knows by name.
/// struct NamedEffects;
///
/// impl EffectResolver<u32> for NamedEffects {
///     type Spec = &'static str;
///     type Handle = RecordingHandle;
///
///     fn resolve(&mut self, _target: u32, spec: &Self::Spec) -> Option<Self::Handle> {
///         matches!(*spec, "fade-in" | "slide-up").then(RecordingHandle::new)
///     }
/// }
///
/// let mut effects = NamedEffects;
/// assert!(effects.resolve(1, &"fade-in").is_some());
/// assert!(effects.resolve(1, &"wobble").is_none());
/// ```
pub trait EffectResolver<K> {
    /// Opaque effect description carried by trigger configuration.
    type Spec;

    /// The handle type produced for resolved effects.
    type Handle: PlaybackHandle;

    /// Resolves `spec` into a handle animating `target`, or `None` when no
    /// implementation is registered for the effect.
    fn resolve(&mut self, target: K, spec: &Self::Spec) -> Option<Self::Handle>;
}
