// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inview Enter: the viewport-enter playback state machine.
//!
//! This crate binds "element became sufficiently visible" signals to
//! declarative animation playback and keeps playback state consistent
//! across repeated, overlapping, and interrupted enter/exit cycles. It is
//! organized around three pieces:
//!
//! - [`machine`]: a pure transition function
//!   `(mode, phase, visible) -> Transition` covering the four repeat modes
//!   ([`Mode::Once`], [`Mode::Alternate`], [`Mode::Repeat`],
//!   [`Mode::State`]), unit-testable without any viewport.
//! - [`safety`]: the safe-visibility recalculation protocol, which detects
//!   elements taller than their fraction-adjusted root — a configured
//!   threshold they can structurally never reach — and replaces the
//!   primary subscription once with a zero-threshold, shrunk-root
//!   configuration.
//! - [`ViewEnter`]: the controller tying them together — a per-element
//!   binding registry, the primary/exit observer pair lifecycle, and the
//!   frame-phased probe that drives the safe protocol.
//!
//! The crate is deliberately collaborator-agnostic: animation engines plug
//! in through `inview_playback`, geometry watching through
//! `inview_viewport`, and frame batching through `inview_scheduler`. Every
//! degraded path (unresolvable effect, redundant unbind, late signal after
//! teardown, unreachable geometry) resolves to "nothing happens" — a
//! misconfigured binding must not take down unrelated ones.
//!
//! ## Minimal example
//!
//! ```rust
//! use inview_enter::{EnterConfig, EnterFrames, Mode, ViewEnter};
//! use inview_playback::{EffectResolver, RecordingHandle};
//! use inview_viewport::{StubViewport, VisibilityEntry};
//! use kurbo::Rect;
//!
//! struct Effects;
//! impl EffectResolver<u32> for Effects {
//!     type Spec = &'static str;
//!     type Handle = RecordingHandle;
//!     fn resolve(&mut self, _target: u32, spec: &Self::Spec) -> Option<RecordingHandle> {
//!         (*spec != "unknown").then(RecordingHandle::new)
//!     }
//! }
//!
//! let mut controller = ViewEnter::new();
//! let mut viewport = StubViewport::new();
//! let mut frames = EnterFrames::new();
//! let mut effects = Effects;
//!
//! controller.add(
//!     1,
//!     1,
//!     &"fade-in",
//!     EnterConfig::new(Mode::Once).threshold(0.3),
//!     &mut effects,
//!     &mut viewport,
//! );
//! assert_eq!(viewport.active_count(), 1);
//!
//! // The host delivers a visibility pass; `Once` plays and retires.
//! let sub = viewport.subscriptions_for(1)[0];
//! let entry = VisibilityEntry::new(
//!     true,
//!     Rect::new(0.0, 100.0, 100.0, 200.0),
//!     Rect::new(0.0, 0.0, 100.0, 400.0),
//! );
//! controller.on_visibility(sub, &entry, &mut viewport, &mut frames);
//! controller.flush_frames(&mut frames, &mut viewport);
//!
//! assert_eq!(viewport.active_count(), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod mode;

pub mod machine;
pub mod safety;

pub use controller::{EnterFrames, SafeProbe, SafeReplace, ViewEnter};
pub use mode::{EnterConfig, Mode};
