// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The controllable playback contract driven by trigger state machines.

/// Coarse playback state reported by a [`PlaybackHandle`].
///
/// Trigger state machines do not branch on this value; it exists so hosts
/// and diagnostics can inspect what a handle is currently doing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum PlayState {
    /// The handle has been created but never played.
    #[default]
    Idle,
    /// Playback is advancing (forward or reversed).
    Running,
    /// Playback is suspended at its current progress.
    Paused,
    /// Playback ran to completion and has not been restarted.
    Finished,
}

/// An opaque, controllable playback object.
///
/// Handles are produced by an [`EffectResolver`](crate::EffectResolver) and
/// owned by exactly one trigger binding at a time. Every method is
/// fire-and-forget: implementations must not require callers to await
/// completion, and trigger state machines remain correct without observing
/// it.
///
/// Implementations are expected to reset playback to the initial state when
/// an animation finishes, unless [`persist`](Self::persist) has been called;
/// trigger bindings call `persist` exactly once at bind time so that pausing
/// or reversing mid-flight keeps the current visual state meaningful.
pub trait PlaybackHandle {
    /// Starts or resumes playback in the current direction.
    fn play(&mut self);

    /// Suspends playback at the current progress.
    fn pause(&mut self);

    /// Flips the playback direction and starts or resumes playback.
    fn reverse(&mut self);

    /// Jumps to the given progress fraction in `0.0..=1.0`.
    ///
    /// Values outside the range are clamped by the implementation.
    fn seek(&mut self, progress: f64);

    /// Detaches the handle's reset-on-finish default.
    ///
    /// After this call, a finished animation holds its final state instead
    /// of snapping back, and pausing mid-flight keeps the current frame.
    fn persist(&mut self);

    /// Discards the handle's effect and releases engine resources.
    ///
    /// Trigger bindings never call this; the handle's lifecycle beyond a
    /// binding belongs to the effect resolver that produced it.
    fn cancel(&mut self);

    /// Returns the current coarse playback state.
    fn play_state(&self) -> PlayState;
}
