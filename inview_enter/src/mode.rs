// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Repeat modes and viewport-enter binding configuration.

/// How playback reacts to repeated enter/exit cycles.
///
/// All four modes consume the same boolean visibility signal; they differ
/// only in which handle operations each transition emits and in observer
/// topology ([`Once`](Self::Once) and [`Alternate`](Self::Alternate) use a
/// single subscription, [`Repeat`](Self::Repeat) and [`State`](Self::State)
/// add a separate exit subscription with independently tunable geometry).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Play on the first entry, then never react again.
    Once,
    /// Play on entry, reverse on exit, reverse again on re-entry.
    Alternate,
    /// Restart from progress zero on every entry; reset on exit.
    Repeat,
    /// Play on entry, pause on exit, resume on re-entry.
    ///
    /// This is the default: continuous playback without reset semantics.
    #[default]
    State,
}

impl Mode {
    /// Returns `true` for the modes that subscribe a separate exit
    /// observer.
    #[must_use]
    pub fn uses_exit_observer(self) -> bool {
        matches!(self, Self::Repeat | Self::State)
    }
}

/// Configuration for one viewport-enter binding.
///
/// `threshold` is the visible-area fraction of the element required to
/// count as entered; `exit_threshold` configures the separate exit
/// subscription used by [`Mode::Repeat`] and [`Mode::State`] (typically
/// `0.0`, so leaving is detected only when the element is fully gone). The
/// margins tune the primary subscription's root, in logical pixels. `safe`
/// enables the safe-visibility recalculation protocol for elements that can
/// structurally never reach `threshold`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct EnterConfig {
    /// Repeat mode for this binding.
    pub mode: Mode,
    /// Visible-area fraction required to count as entered.
    pub threshold: f64,
    /// Threshold for the exit subscription (`Repeat`/`State` only).
    pub exit_threshold: f64,
    /// Primary root extension above the viewport, in logical pixels.
    pub top_margin: f64,
    /// Primary root extension below the viewport, in logical pixels.
    pub bottom_margin: f64,
    /// Whether unreachable thresholds are corrected by re-subscription.
    pub safe: bool,
}

impl EnterConfig {
    /// Creates a configuration for the given mode with zero thresholds,
    /// zero margins, and safe mode off.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Returns this configuration with the given entry threshold.
    ///
    /// # Panics
    ///
    /// Panics if `threshold` is not within `0.0..=1.0`.
    #[must_use]
    pub fn threshold(mut self, threshold: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&threshold),
            "threshold must be a fraction in 0.0..=1.0"
        );
        self.threshold = threshold;
        self
    }

    /// Returns this configuration with the given exit threshold.
    ///
    /// # Panics
    ///
    /// Panics if `threshold` is not within `0.0..=1.0`.
    #[must_use]
    pub fn exit_threshold(mut self, threshold: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&threshold),
            "exit threshold must be a fraction in 0.0..=1.0"
        );
        self.exit_threshold = threshold;
        self
    }

    /// Returns this configuration with the given primary root margins.
    #[must_use]
    pub fn margins(mut self, top: f64, bottom: f64) -> Self {
        self.top_margin = top;
        self.bottom_margin = bottom;
        self
    }

    /// Returns this configuration with safe mode enabled or disabled.
    #[must_use]
    pub fn safe(mut self, safe: bool) -> Self {
        self.safe = safe;
        self
    }
}
