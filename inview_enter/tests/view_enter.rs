// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `inview_enter` crate.
//!
//! These drive the full controller — binding registry, observer pair,
//! state machine, and safe-visibility protocol — against the stub viewport
//! and the recording handle, asserting on exact call sequences.

use inview_enter::machine::Phase;
use inview_enter::safety::SafeTag;
use inview_enter::{EnterConfig, EnterFrames, Mode, ViewEnter};
use inview_playback::{CallLog, EffectResolver, HandleCall, RecordingHandle};
use inview_viewport::{StubViewport, SubscriptionId, VisibilityEntry};
use kurbo::Rect;

const ROOT_HEIGHT: f64 = 400.0;

/// Resolves every spec except `"unknown"`, exposing the last handle's log.
struct Effects {
    last_log: CallLog,
}

impl Effects {
    fn new() -> Self {
        Self {
            last_log: CallLog::default(),
        }
    }
}

impl EffectResolver<u32> for Effects {
    type Spec = &'static str;
    type Handle = RecordingHandle;

    fn resolve(&mut self, _target: u32, spec: &Self::Spec) -> Option<RecordingHandle> {
        if *spec == "unknown" {
            return None;
        }
        let handle = RecordingHandle::new();
        self.last_log = handle.log();
        Some(handle)
    }
}

struct Fixture {
    controller: ViewEnter<u32, RecordingHandle>,
    viewport: StubViewport<u32>,
    frames: EnterFrames<u32>,
    effects: Effects,
}

impl Fixture {
    fn new() -> Self {
        Self {
            controller: ViewEnter::new(),
            viewport: StubViewport::new(),
            frames: EnterFrames::new(),
            effects: Effects::new(),
        }
    }

    fn add(&mut self, element: u32, config: EnterConfig) -> CallLog {
        self.controller.add(
            element,
            element,
            &"effect",
            config,
            &mut self.effects,
            &mut self.viewport,
        );
        self.effects.last_log.clone()
    }

    /// Delivers a signal with default geometry (element shorter than root).
    fn signal(&mut self, sub: SubscriptionId, intersecting: bool) {
        self.signal_with_height(sub, intersecting, 100.0);
    }

    fn signal_with_height(&mut self, sub: SubscriptionId, intersecting: bool, source_height: f64) {
        let entry = VisibilityEntry::new(
            intersecting,
            Rect::new(0.0, 0.0, 100.0, source_height),
            Rect::new(0.0, 0.0, 100.0, ROOT_HEIGHT),
        );
        self.controller
            .on_visibility(sub, &entry, &mut self.viewport, &mut self.frames);
    }

    fn flush(&mut self) {
        self.controller
            .flush_frames(&mut self.frames, &mut self.viewport);
    }

    fn subs(&self, element: u32) -> Vec<SubscriptionId> {
        self.viewport.subscriptions_for(element)
    }
}

fn after_persist(log: &CallLog) -> Vec<HandleCall> {
    let calls = log.calls();
    assert_eq!(calls.first(), Some(&HandleCall::Persist));
    calls[1..].to_vec()
}

#[test]
fn no_handle_means_no_observe() {
    let mut fx = Fixture::new();
    for mode in [Mode::Once, Mode::Alternate, Mode::Repeat, Mode::State] {
        fx.controller.add(
            1,
            1,
            &"unknown",
            EnterConfig::new(mode),
            &mut fx.effects,
            &mut fx.viewport,
        );
    }

    assert!(fx.controller.is_empty());
    assert_eq!(fx.viewport.active_count(), 0);
    assert!(fx.viewport.observe_journal().is_empty());
}

#[test]
fn once_plays_once_and_unsubscribes() {
    let mut fx = Fixture::new();
    let log = fx.add(1, EnterConfig::new(Mode::Once).threshold(0.3));
    let primary = fx.subs(1)[0];

    fx.signal(primary, true);

    assert_eq!(after_persist(&log), [HandleCall::Play]);
    // Exactly one unsubscribe of the primary; the binding is terminal.
    assert_eq!(fx.viewport.unobserve_journal(), &[primary]);
    assert_eq!(fx.viewport.active_count(), 0);

    // Nothing delivered afterwards has any effect.
    fx.signal(primary, false);
    fx.signal(primary, true);
    assert_eq!(after_persist(&log), [HandleCall::Play]);
}

#[test]
fn alternate_reverses_in_and_out_on_one_subscription() {
    let mut fx = Fixture::new();
    let log = fx.add(1, EnterConfig::new(Mode::Alternate).threshold(0.3));

    let subs = fx.subs(1);
    assert_eq!(subs.len(), 1, "alternate uses a single subscription");
    let primary = subs[0];

    fx.signal(primary, true);
    fx.signal(primary, false);
    fx.signal(primary, true);

    assert_eq!(
        after_persist(&log),
        [HandleCall::Play, HandleCall::Reverse, HandleCall::Reverse]
    );
}

#[test]
fn repeat_restarts_from_zero_on_every_entry() {
    let mut fx = Fixture::new();
    let log = fx.add(1, EnterConfig::new(Mode::Repeat).threshold(0.3));

    let subs = fx.subs(1);
    assert_eq!(subs.len(), 2, "repeat uses a primary/exit pair");
    let (primary, exit) = (subs[0], subs[1]);

    fx.signal(primary, true);
    fx.signal(exit, false);
    fx.signal(primary, true);

    assert_eq!(
        after_persist(&log),
        [
            HandleCall::Seek(0.0),
            HandleCall::Play,
            HandleCall::Pause,
            HandleCall::Seek(0.0),
            HandleCall::Seek(0.0),
            HandleCall::Play,
        ]
    );
}

#[test]
fn state_resumes_without_any_seek() {
    let mut fx = Fixture::new();
    let log = fx.add(1, EnterConfig::new(Mode::State).threshold(0.3));
    let subs = fx.subs(1);
    let (primary, exit) = (subs[0], subs[1]);

    fx.signal(primary, true);
    fx.signal(exit, false);
    fx.signal(primary, true);

    let calls = after_persist(&log);
    assert_eq!(calls, [HandleCall::Play, HandleCall::Pause, HandleCall::Play]);
    assert!(!calls.iter().any(|c| matches!(c, HandleCall::Seek(_))));
}

#[test]
fn pair_signals_are_safe_under_either_order() {
    // Both subscriptions fire in the same pass; the exit's redundant
    // polarity must be a no-op whichever one the host delivers first.
    let mut fx = Fixture::new();
    let log = fx.add(1, EnterConfig::new(Mode::State).threshold(0.3));
    let subs = fx.subs(1);
    let (primary, exit) = (subs[0], subs[1]);

    // Exit-first: the element enters, and the exit subscription also
    // reports it now intersects (dropped), primary reports entry.
    fx.signal(exit, true);
    fx.signal(primary, true);
    assert_eq!(after_persist(&log), [HandleCall::Play]);
    assert_eq!(fx.controller.phase(1), Some(Phase::Entered));

    // Leave, re-enter with primary-first ordering.
    fx.signal(exit, false);
    fx.signal(primary, true);
    fx.signal(exit, true);
    assert_eq!(
        after_persist(&log),
        [HandleCall::Play, HandleCall::Pause, HandleCall::Play]
    );
}

#[test]
fn safe_mode_replaces_unreachable_threshold_exactly_once() {
    let mut fx = Fixture::new();
    let _ = fx.add(1, EnterConfig::new(Mode::Once).threshold(0.5).safe(true));
    let primary = fx.subs(1)[0];

    // 0.5 * 1000 = 500 > 400: structurally unreachable.
    fx.signal_with_height(primary, false, 1000.0);
    assert_eq!(fx.controller.safe_tag(1), Some(SafeTag::Undecided));
    fx.flush();

    assert_eq!(fx.controller.safe_tag(1), Some(SafeTag::Replaced));
    assert_eq!(fx.viewport.unobserve_journal(), &[primary]);

    let replacement = fx.subs(1)[0];
    assert_ne!(replacement, primary);
    let config = fx.viewport.config(replacement).unwrap();
    assert_eq!(config.threshold, 0.0);
    assert!(config.bottom_margin < 0.0);

    // The decision is terminal: further misses change nothing.
    fx.signal_with_height(replacement, false, 1000.0);
    fx.flush();
    assert_eq!(fx.viewport.unobserve_journal().len(), 1);
    assert_eq!(fx.subs(1), vec![replacement]);

    // The replacement still drives playback.
    fx.signal(replacement, true);
    assert_eq!(fx.viewport.active_count(), 0);
}

#[test]
fn safe_mode_keeps_reachable_thresholds() {
    let mut fx = Fixture::new();
    let _ = fx.add(1, EnterConfig::new(Mode::Once).threshold(0.5).safe(true));
    let primary = fx.subs(1)[0];

    // 0.5 * 600 = 300 <= 400: reachable, zero replacements.
    fx.signal_with_height(primary, false, 600.0);
    fx.flush();

    assert_eq!(fx.controller.safe_tag(1), Some(SafeTag::Kept));
    assert!(fx.viewport.unobserve_journal().is_empty());
    assert_eq!(fx.subs(1), vec![primary]);
}

#[test]
fn safe_probe_is_first_callback_only() {
    let mut fx = Fixture::new();
    let _ = fx.add(1, EnterConfig::new(Mode::Once).threshold(0.5).safe(true));
    let primary = fx.subs(1)[0];

    // Two misses before the frame flush: only one probe may be queued.
    fx.signal_with_height(primary, false, 1000.0);
    fx.signal_with_height(primary, false, 1000.0);
    fx.flush();

    // One unobserve, one replacement — not two.
    assert_eq!(fx.viewport.unobserve_journal().len(), 1);
    assert_eq!(fx.subs(1).len(), 1);
}

#[test]
fn safe_probe_for_a_removed_binding_is_dropped() {
    let mut fx = Fixture::new();
    let _ = fx.add(1, EnterConfig::new(Mode::Once).threshold(0.5).safe(true));
    let primary = fx.subs(1)[0];

    fx.signal_with_height(primary, false, 1000.0);
    fx.controller.remove(1, &mut fx.viewport);
    fx.flush();

    // Removal unobserved the primary; the stale probe created nothing.
    assert_eq!(fx.viewport.active_count(), 0);
    assert_eq!(fx.viewport.observe_journal().len(), 1);
}

#[test]
fn safe_probe_for_a_retired_binding_installs_nothing() {
    let mut fx = Fixture::new();
    let log = fx.add(1, EnterConfig::new(Mode::Once).threshold(0.5).safe(true));
    let primary = fx.subs(1)[0];

    // A miss queues the probe, then an entry fires and retires the
    // primary before the frame flush runs.
    fx.signal_with_height(primary, false, 1000.0);
    fx.signal(primary, true);
    assert_eq!(after_persist(&log), [HandleCall::Play]);
    assert_eq!(fx.viewport.active_count(), 0);
    fx.flush();

    // The retired binding gets no replacement subscription.
    assert_eq!(fx.viewport.active_count(), 0);
    assert_eq!(fx.viewport.observe_journal().len(), 1);
    assert_eq!(fx.controller.safe_tag(1), Some(SafeTag::Undecided));
}

#[test]
fn safe_mode_off_never_probes() {
    let mut fx = Fixture::new();
    let _ = fx.add(1, EnterConfig::new(Mode::Once).threshold(0.5));
    let primary = fx.subs(1)[0];

    fx.signal_with_height(primary, false, 1000.0);
    assert!(fx.frames.is_empty());
    fx.flush();
    assert_eq!(fx.controller.safe_tag(1), Some(SafeTag::Undecided));
    assert_eq!(fx.subs(1), vec![primary]);
}

#[test]
fn remove_twice_equals_remove_once() {
    let mut fx = Fixture::new();
    let _ = fx.add(1, EnterConfig::new(Mode::Repeat));

    fx.controller.remove(1, &mut fx.viewport);
    let journal = fx.viewport.unobserve_journal().to_vec();
    fx.controller.remove(1, &mut fx.viewport);

    assert_eq!(fx.viewport.unobserve_journal(), journal.as_slice());
    assert_eq!(fx.viewport.active_count(), 0);
}

#[test]
fn rebind_after_remove_reproduces_a_fresh_bind() {
    let mut fx = Fixture::new();
    let config = EnterConfig::new(Mode::Alternate).threshold(0.3);

    let first_log = fx.add(1, config);
    let first_sub = fx.subs(1)[0];
    fx.signal(first_sub, true);
    fx.controller.remove(1, &mut fx.viewport);

    let second_log = fx.add(1, config);
    let second_sub = fx.subs(1)[0];
    fx.signal(second_sub, true);

    // Same initial sequence as a fresh bind: no residual state leaked.
    assert_eq!(first_log.calls(), second_log.calls());
    assert_eq!(
        fx.viewport.config(second_sub),
        Some(fx.viewport.observe_journal()[0].2)
    );
    assert_eq!(fx.controller.phase(1), Some(Phase::Entered));
}

#[test]
fn bindings_are_independent() {
    let mut fx = Fixture::new();
    let log_a = fx.add(1, EnterConfig::new(Mode::State));
    let log_b = fx.add(2, EnterConfig::new(Mode::State));

    let a_primary = fx.subs(1)[0];
    fx.signal(a_primary, true);

    assert_eq!(after_persist(&log_a), [HandleCall::Play]);
    assert_eq!(after_persist(&log_b), []);

    // Removing one leaves the other's subscriptions alone.
    fx.controller.remove(1, &mut fx.viewport);
    assert_eq!(fx.subs(2).len(), 2);
}
