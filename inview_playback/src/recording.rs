// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A reference [`PlaybackHandle`] that journals its call sequence.
//!
//! [`RecordingHandle`] performs no animation. It records every call in
//! order and tracks a coarse [`PlayState`], which makes trigger state
//! machines fully testable without an animation engine: bind a recording
//! handle, drive signals, then assert on the exact call sequence.
//!
//! The journal lives behind a shared [`CallLog`] so it stays inspectable
//! after the handle has been moved into a binding.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::{PlayState, PlaybackHandle};

/// One recorded [`PlaybackHandle`] call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HandleCall {
    /// `play()` was called.
    Play,
    /// `pause()` was called.
    Pause,
    /// `reverse()` was called.
    Reverse,
    /// `seek(progress)` was called.
    Seek(f64),
    /// `persist()` was called.
    Persist,
    /// `cancel()` was called.
    Cancel,
}

/// Shared, inspectable journal of a [`RecordingHandle`]'s calls.
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<HandleCall>>>,
}

impl CallLog {
    /// Returns a copy of the recorded call sequence.
    #[must_use]
    pub fn calls(&self) -> Vec<HandleCall> {
        self.calls.borrow().clone()
    }

    /// Returns the number of recorded calls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Returns `true` if no calls have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    /// Returns how many times the given call was recorded.
    ///
    /// `Seek` is counted by variant, ignoring the progress value.
    #[must_use]
    pub fn count(&self, call: HandleCall) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| core::mem::discriminant(*c) == core::mem::discriminant(&call))
            .count()
    }

    /// Clears the journal.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    fn push(&self, call: HandleCall) {
        self.calls.borrow_mut().push(call);
    }
}

/// A [`PlaybackHandle`] that records calls instead of animating.
///
/// Cloning a recording handle shares its journal: both clones append to the
/// same [`CallLog`]. This mirrors how a real handle is moved into a binding
/// while the test keeps a way to observe it.
#[derive(Clone, Debug, Default)]
pub struct RecordingHandle {
    log: CallLog,
    state: Rc<RefCell<PlayState>>,
}

impl RecordingHandle {
    /// Creates a new handle with an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared journal for this handle.
    #[must_use]
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

impl PlaybackHandle for RecordingHandle {
    fn play(&mut self) {
        self.log.push(HandleCall::Play);
        *self.state.borrow_mut() = PlayState::Running;
    }

    fn pause(&mut self) {
        self.log.push(HandleCall::Pause);
        *self.state.borrow_mut() = PlayState::Paused;
    }

    fn reverse(&mut self) {
        self.log.push(HandleCall::Reverse);
        *self.state.borrow_mut() = PlayState::Running;
    }

    fn seek(&mut self, progress: f64) {
        self.log.push(HandleCall::Seek(progress));
    }

    fn persist(&mut self) {
        self.log.push(HandleCall::Persist);
    }

    fn cancel(&mut self) {
        self.log.push(HandleCall::Cancel);
        *self.state.borrow_mut() = PlayState::Idle;
    }

    fn play_state(&self) -> PlayState {
        *self.state.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn new_handle_is_idle_with_empty_log() {
        let handle = RecordingHandle::new();
        assert_eq!(handle.play_state(), PlayState::Idle);
        assert!(handle.log().is_empty());
    }

    #[test]
    fn calls_are_recorded_in_order() {
        let mut handle = RecordingHandle::new();
        handle.persist();
        handle.seek(0.0);
        handle.play();
        handle.reverse();
        handle.pause();

        assert_eq!(
            handle.log().calls(),
            vec![
                HandleCall::Persist,
                HandleCall::Seek(0.0),
                HandleCall::Play,
                HandleCall::Reverse,
                HandleCall::Pause,
            ]
        );
    }

    #[test]
    fn play_pause_track_state() {
        let mut handle = RecordingHandle::new();
        handle.play();
        assert_eq!(handle.play_state(), PlayState::Running);
        handle.pause();
        assert_eq!(handle.play_state(), PlayState::Paused);
        handle.reverse();
        assert_eq!(handle.play_state(), PlayState::Running);
    }

    #[test]
    fn clones_share_the_journal() {
        let handle = RecordingHandle::new();
        let mut moved = handle.clone();
        moved.play();

        assert_eq!(handle.log().calls(), vec![HandleCall::Play]);
        assert_eq!(handle.play_state(), PlayState::Running);
    }

    #[test]
    fn count_matches_by_variant() {
        let mut handle = RecordingHandle::new();
        handle.seek(0.0);
        handle.seek(0.5);
        handle.play();

        let log = handle.log();
        assert_eq!(log.count(HandleCall::Play), 1);
        assert_eq!(log.count(HandleCall::Seek(0.0)), 2);
        assert_eq!(log.count(HandleCall::Pause), 0);
    }

    #[test]
    fn clear_empties_the_journal() {
        let mut handle = RecordingHandle::new();
        handle.play();
        handle.log().clear();
        assert!(handle.log().is_empty());
    }
}
