// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-subscription observer configuration.

/// Configuration for one visibility subscription.
///
/// `threshold` is the minimum visible-area fraction (`0.0..=1.0`) of the
/// element required to count as intersecting. The margins extend the
/// observation root on its top and bottom edges, in logical pixels;
/// negative values shrink the root, so a subscription can be tuned to fire
/// before an element is fully gone (exit observers) or only once it is well
/// inside the viewport (safe-mode replacements).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct ObserverConfig {
    /// Minimum visible-area fraction required to intersect.
    pub threshold: f64,
    /// Root extension above the viewport, in logical pixels.
    pub top_margin: f64,
    /// Root extension below the viewport, in logical pixels.
    pub bottom_margin: f64,
}

impl ObserverConfig {
    /// Creates a configuration with the given threshold and zero margins.
    ///
    /// # Panics
    ///
    /// Panics if `threshold` is not within `0.0..=1.0`.
    #[must_use]
    pub fn with_threshold(threshold: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&threshold),
            "threshold must be a fraction in 0.0..=1.0"
        );
        Self {
            threshold,
            top_margin: 0.0,
            bottom_margin: 0.0,
        }
    }

    /// Returns this configuration with the given bottom margin.
    #[must_use]
    pub fn bottom_margin(mut self, margin: f64) -> Self {
        self.bottom_margin = margin;
        self
    }

    /// Returns this configuration with the given top margin.
    #[must_use]
    pub fn top_margin(mut self, margin: f64) -> Self {
        self.top_margin = margin;
        self
    }
}
