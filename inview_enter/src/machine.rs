// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pure enter/exit transition function.
//!
//! The push-based visibility signal is modeled as a pure function
//! `(mode, phase, visible) -> Transition`, independent of any observer
//! implementation, so every mode's lifecycle is unit-testable without a
//! viewport. The caller (a trigger controller, or any other boolean-signal
//! source such as hover) applies the emitted [`HandleOp`]s to its playback
//! handle in order and stores the new phase.
//!
//! Redundant signals — a second "entered" before any "exited", or the
//! reverse — are no-ops in every mode. This is what makes bindings correct
//! when two subscriptions on the same element fire in an unspecified
//! relative order within one visibility pass.
//!
//! ## Minimal example
//!
//! ```rust
//! use inview_enter::machine::{HandleOp, Phase, step};
//! use inview_enter::Mode;
//!
//! // First entry under `Repeat` restarts from zero.
//! let t = step(Mode::Repeat, Phase::Unseen, true);
//! assert_eq!(t.phase, Phase::Entered);
//! assert_eq!(t.ops.as_slice(), &[HandleOp::Seek(0.0), HandleOp::Play]);
//! assert!(!t.retire);
//!
//! // A redundant "entered" is a no-op.
//! let t = step(Mode::Repeat, Phase::Entered, true);
//! assert_eq!(t.phase, Phase::Entered);
//! assert!(t.ops.is_empty());
//! ```

use smallvec::{SmallVec, smallvec};

use crate::Mode;

/// Where a binding currently sits in its enter/exit lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// The element has never satisfied its threshold.
    #[default]
    Unseen,
    /// The element currently satisfies its threshold.
    Entered,
    /// The element satisfied its threshold at least once and has left.
    Exited,
}

/// One playback-handle operation emitted by a transition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HandleOp {
    /// Call `play()`.
    Play,
    /// Call `pause()`.
    Pause,
    /// Call `reverse()`.
    Reverse,
    /// Call `seek(progress)`.
    Seek(f64),
}

/// The result of feeding one visibility signal to the machine.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// The phase after the signal.
    pub phase: Phase,
    /// Handle operations to apply, in order.
    pub ops: SmallVec<[HandleOp; 2]>,
    /// Whether the primary subscription should be dropped (set only by
    /// [`Mode::Once`] on its first entry; terminal).
    pub retire: bool,
}

impl Transition {
    fn stay(phase: Phase) -> Self {
        Self {
            phase,
            ops: SmallVec::new(),
            retire: false,
        }
    }

    fn to(phase: Phase, ops: SmallVec<[HandleOp; 2]>) -> Self {
        Self {
            phase,
            ops,
            retire: false,
        }
    }
}

/// Advances the enter/exit lifecycle by one boolean visibility signal.
///
/// The transition table:
///
/// | Mode | first `true` | `false` after entry | `true` after exit |
/// |---|---|---|---|
/// | `Once` | `play` (retire) | — | — |
/// | `Alternate` | `play` | `reverse` | `reverse` |
/// | `Repeat` | `seek(0)`, `play` | `pause`, `seek(0)` | `seek(0)`, `play` |
/// | `State` | `play` | `pause` | `play` |
///
/// Signals that do not change polarity leave the phase untouched and emit
/// no operations.
#[must_use]
pub fn step(mode: Mode, phase: Phase, visible: bool) -> Transition {
    use HandleOp::{Pause, Play, Reverse, Seek};
    use Phase::{Entered, Exited, Unseen};

    match (mode, phase, visible) {
        (Mode::Once, Unseen, true) => Transition {
            phase: Entered,
            ops: smallvec![Play],
            retire: true,
        },
        // Once is terminal after its first entry; exits are ignored even
        // if a signal slips in before the subscription is dropped.
        (Mode::Once, _, _) => Transition::stay(phase),

        (Mode::Alternate, Unseen, true) => Transition::to(Entered, smallvec![Play]),
        (Mode::Alternate, Entered, false) => Transition::to(Exited, smallvec![Reverse]),
        // Re-entry flips direction again rather than restarting.
        (Mode::Alternate, Exited, true) => Transition::to(Entered, smallvec![Reverse]),

        (Mode::Repeat, Unseen | Exited, true) => {
            Transition::to(Entered, smallvec![Seek(0.0), Play])
        }
        (Mode::Repeat, Entered, false) => Transition::to(Exited, smallvec![Pause, Seek(0.0)]),

        (Mode::State, Unseen | Exited, true) => Transition::to(Entered, smallvec![Play]),
        (Mode::State, Entered, false) => Transition::to(Exited, smallvec![Pause]),

        // Redundant same-polarity signal, or an exit before any entry.
        (_, _, _) => Transition::stay(phase),
    }
}
