// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility signals and derived progress.

use kurbo::Rect;

/// One push signal from a visibility subscription.
///
/// `intersecting` reports whether the element currently satisfies the
/// subscription's configured threshold. The rects capture the element and
/// observation-root bounds at the time of the visibility check, in a shared
/// coordinate space with `y` growing downward (device convention). They are
/// measurements, not live geometry: consumers that act on them later must
/// treat them as a snapshot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VisibilityEntry {
    /// Whether the configured threshold is currently satisfied.
    pub intersecting: bool,
    /// The element's bounding rect at check time.
    pub bounds: Rect,
    /// The observation root's bounding rect at check time.
    pub root_bounds: Rect,
}

impl VisibilityEntry {
    /// Creates an entry from its parts.
    #[must_use]
    pub fn new(intersecting: bool, bounds: Rect, root_bounds: Rect) -> Self {
        Self {
            intersecting,
            bounds,
            root_bounds,
        }
    }
}

/// Returns how far the element has traveled through the root, in `0.0..=1.0`.
///
/// Progress is `0.0` when the element's leading (top) edge touches the
/// root's bottom edge — about to enter from below — and `1.0` when its
/// trailing (bottom) edge clears the root's top edge. The travel distance
/// is normalized by the sum of the root and element heights, so elements
/// taller than the root still sweep the full range. Degenerate geometry
/// (zero combined height) reports `0.0`.
///
/// This is the progress fraction scroll-linked (scrub) playback feeds into
/// a handle's `seek`.
///
/// # Example
///
/// ```rust
/// use inview_viewport::{VisibilityEntry, travel_progress};
/// use kurbo::Rect;
///
/// let root = Rect::new(0.0, 0.0, 100.0, 400.0);
///
/// // Element's top edge exactly at the root's bottom edge: progress 0.
/// let entry = VisibilityEntry::new(false, Rect::new(0.0, 400.0, 100.0, 500.0), root);
/// assert_eq!(travel_progress(&entry), 0.0);
///
/// // Element centered in the root: progress 0.5.
/// let entry = VisibilityEntry::new(true, Rect::new(0.0, 150.0, 100.0, 250.0), root);
/// assert_eq!(travel_progress(&entry), 0.5);
/// ```
#[must_use]
pub fn travel_progress(entry: &VisibilityEntry) -> f64 {
    let total = entry.root_bounds.height() + entry.bounds.height();
    if total <= 0.0 {
        return 0.0;
    }
    let traveled = entry.root_bounds.y1 - entry.bounds.y0;
    (traveled / total).clamp(0.0, 1.0)
}
