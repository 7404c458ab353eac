// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Safe-visibility recalculation: detecting unreachable thresholds.
//!
//! Authors configure entry thresholds assuming elements roughly the size of
//! the viewport. An element taller than the fraction-adjusted root can
//! structurally never report intersecting under its configured threshold —
//! the visible fraction can never reach it while any part of the root clips
//! the element — which would leave the animation permanently unplayable.
//!
//! The corrective protocol replaces the primary subscription, exactly once
//! per binding, with a zero-threshold configuration whose root is shrunk at
//! the bottom: the binding then fires once a meaningful band of the element
//! is inside the root. The decision is evaluated lazily on the first
//! non-intersecting signal and is terminal; element/root geometry is
//! assumed stable for the binding's lifetime.
//!
//! This is not an error path. It is an expected, detected condition with a
//! defined correction, and it is never surfaced to the caller.

use inview_viewport::ObserverConfig;

/// Fraction of the root height used as the replacement's negative bottom
/// margin.
pub const REPLACEMENT_MARGIN_FRACTION: f64 = 0.1;

/// The one-shot progression of the safe-visibility decision.
///
/// The tag is explicit state on the binding rather than something inferred
/// from observer identity, which makes the terminal, one-time nature of the
/// replacement an invariant instead of a side effect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SafeTag {
    /// No non-intersecting signal has been evaluated yet.
    #[default]
    Undecided,
    /// Evaluated: the configured threshold is reachable; the original
    /// subscription stays.
    Kept,
    /// Evaluated: the threshold was unreachable and the primary
    /// subscription has been replaced. Terminal.
    Replaced,
}

/// Returns `true` when the configured threshold is geometrically
/// unreachable.
///
/// The threshold requires `source_height * threshold` pixels of the element
/// to be visible at once; if that exceeds the root height, no scroll
/// position can satisfy it.
///
/// # Example
///
/// ```rust
/// use inview_enter::safety::needs_replacement;
///
/// // Half of a 1000px element can never fit a 400px root.
/// assert!(needs_replacement(1000.0, 0.5, 400.0));
/// // Half of a 600px element (300px) fits.
/// assert!(!needs_replacement(600.0, 0.5, 400.0));
/// ```
#[must_use]
pub fn needs_replacement(source_height: f64, threshold: f64, root_height: f64) -> bool {
    source_height * threshold > root_height
}

/// Builds the replacement subscription configuration.
///
/// Threshold zero (fire as soon as any pixel is visible, ignoring the
/// unreachable fraction) with a bottom margin of
/// −[`REPLACEMENT_MARGIN_FRACTION`] of the measured root height, so the
/// replacement does not fire while the element is barely clipping into
/// view.
#[must_use]
pub fn replacement_config(root_height: f64) -> ObserverConfig {
    ObserverConfig {
        threshold: 0.0,
        top_margin: 0.0,
        bottom_margin: -(root_height * REPLACEMENT_MARGIN_FRACTION),
    }
}
