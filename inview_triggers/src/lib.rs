// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inview Triggers: input-driven playback bindings and routing.
//!
//! Where `inview_enter` drives playback from viewport geometry, this crate
//! covers the interaction triggers — click, hover, and pointer scrubbing —
//! plus viewport-travel scrubbing, and a [`TriggerBindings`] registry that
//! routes binds, teardowns, and input events by trigger kind. Each element
//! carries at most one binding per kind; rebinding a pair replaces the old
//! binding.
//!
//! All handlers share the collaborator contracts from `inview_playback`:
//! effects resolve through an `EffectResolver`, and an unresolvable effect
//! leaves the element unbound without disturbing its other bindings.
//!
//! ## Minimal example
//!
//! ```rust
//! use inview_playback::{EffectResolver, RecordingHandle};
//! use inview_triggers::{ClickBehavior, TriggerBindings, TriggerSpec};
//! use inview_viewport::StubViewport;
//!
//! struct Effects;
//! impl EffectResolver<u32> for Effects {
//!     type Spec = &'static str;
//!     type Handle = RecordingHandle;
//!     fn resolve(&mut self, _target: u32, _spec: &Self::Spec) -> Option<RecordingHandle> {
//!         Some(RecordingHandle::new())
//!     }
//! }
//!
//! let mut bindings = TriggerBindings::new();
//! let mut viewport = StubViewport::new();
//! let mut effects = Effects;
//!
//! bindings.add(
//!     1,
//!     1,
//!     &"pulse",
//!     TriggerSpec::Click(ClickBehavior::Toggle),
//!     &mut effects,
//!     &mut viewport,
//! );
//! bindings.on_click(1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod click;
mod dispatch;
mod hover;
mod pointer;
mod scrub;

pub use click::{ClickBehavior, ClickTrigger};
pub use dispatch::{Trigger, TriggerBindings, TriggerSpec};
pub use hover::HoverTrigger;
pub use pointer::{Axis, PointerTrigger, axis_fraction};
pub use scrub::ScrubTrigger;
