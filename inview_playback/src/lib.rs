// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inview Playback: playback handle and effect resolver contracts.
//!
//! This crate defines the two seams between interaction triggers and the
//! animation engine that executes effects:
//!
//! - [`PlaybackHandle`]: an opaque, controllable playback object
//!   (play/pause/reverse/seek/persist/cancel). Trigger state machines drive
//!   animations exclusively through this trait and never observe completion;
//!   every call is fire-and-forget.
//! - [`EffectResolver`]: turns an opaque effect description into a concrete
//!   handle for a given target, or reports that the effect is unknown by
//!   returning `None`. Resolution failure is a degraded mode, not an error:
//!   callers are expected to skip the whole binding silently.
//!
//! The crate also ships [`RecordingHandle`], a reference implementation of
//! [`PlaybackHandle`] that journals its call sequence. It backs the test
//! suites of the trigger crates and is useful for integration smoke tests in
//! host frameworks.
//!
//! ## Minimal example
//!
//! ```rust
//! use inview_playback::{HandleCall, PlayState, PlaybackHandle, RecordingHandle};
//!
//! let mut handle = RecordingHandle::new();
//! let log = handle.log();
//!
//! handle.persist();
//! handle.play();
//! handle.pause();
//! handle.seek(0.0);
//!
//! assert_eq!(handle.play_state(), PlayState::Paused);
//! assert_eq!(
//!     log.calls(),
//!     vec![
//!         HandleCall::Persist,
//!         HandleCall::Play,
//!         HandleCall::Pause,
//!         HandleCall::Seek(0.0),
//!     ]
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod handle;
mod recording;
mod resolver;

pub use handle::{PlayState, PlaybackHandle};
pub use recording::{CallLog, HandleCall, RecordingHandle};
pub use resolver::EffectResolver;
