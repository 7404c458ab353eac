// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger routing.
//!
//! [`TriggerBindings`] owns one handler per trigger kind and routes binds,
//! teardowns, and input events to the right one. An element may carry at
//! most one binding per trigger kind; a successful rebind of the same
//! `(element, kind)` pair replaces the old binding, so stale subscriptions
//! and handles never accumulate.

use core::fmt;
use core::hash::Hash;

use kurbo::{Point, Rect};

use inview_enter::{EnterConfig, EnterFrames, Mode, ViewEnter};
use inview_playback::{EffectResolver, PlaybackHandle};
use inview_viewport::{SubscriptionId, ViewportHost, VisibilityEntry};

use crate::click::{ClickBehavior, ClickTrigger};
use crate::hover::HoverTrigger;
use crate::pointer::{Axis, PointerTrigger};
use crate::scrub::ScrubTrigger;

/// The kinds of trigger an element can be bound under.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Click-to-play.
    Click,
    /// Hover enter/leave.
    Hover,
    /// Pointer position scrubbing.
    PointerMove,
    /// Viewport enter/exit.
    ViewEnter,
    /// Viewport travel scrubbing.
    ViewProgress,
}

/// A trigger kind together with its per-kind configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TriggerSpec {
    /// Click-to-play with the given behavior.
    Click(ClickBehavior),
    /// Hover enter/leave driven through the given repeat mode.
    Hover(Mode),
    /// Pointer scrubbing along the given axis.
    PointerMove(Axis),
    /// Viewport enter/exit with the given observer configuration.
    ViewEnter(EnterConfig),
    /// Viewport travel scrubbing.
    ViewProgress,
}

impl TriggerSpec {
    /// The trigger kind this spec configures.
    #[must_use]
    pub fn kind(&self) -> Trigger {
        match self {
            Self::Click(_) => Trigger::Click,
            Self::Hover(_) => Trigger::Hover,
            Self::PointerMove(_) => Trigger::PointerMove,
            Self::ViewEnter(_) => Trigger::ViewEnter,
            Self::ViewProgress => Trigger::ViewProgress,
        }
    }
}

/// The full trigger registry: one handler per trigger kind.
pub struct TriggerBindings<K, H> {
    click: ClickTrigger<K, H>,
    hover: HoverTrigger<K, H>,
    pointer: PointerTrigger<K, H>,
    scrub: ScrubTrigger<K, H>,
    view_enter: ViewEnter<K, H>,
}

impl<K, H> Default for TriggerBindings<K, H> {
    fn default() -> Self {
        Self {
            click: ClickTrigger::default(),
            hover: HoverTrigger::default(),
            pointer: PointerTrigger::default(),
            scrub: ScrubTrigger::default(),
            view_enter: ViewEnter::default(),
        }
    }
}

impl<K, H> fmt::Debug for TriggerBindings<K, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerBindings")
            .field("click", &self.click)
            .field("hover", &self.hover)
            .field("pointer", &self.pointer)
            .field("scrub", &self.scrub)
            .field("view_enter", &self.view_enter)
            .finish()
    }
}

impl<K: Copy + Eq + Hash, H: PlaybackHandle> TriggerBindings<K, H> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `element` is bound under `trigger`.
    #[must_use]
    pub fn contains(&self, element: K, trigger: Trigger) -> bool {
        match trigger {
            Trigger::Click => self.click.contains(element),
            Trigger::Hover => self.hover.contains(element),
            Trigger::PointerMove => self.pointer.contains(element),
            Trigger::ViewEnter => self.view_enter.contains(element),
            Trigger::ViewProgress => self.scrub.contains(element),
        }
    }

    /// The viewport-enter controller, for phase and safe-tag inspection.
    #[must_use]
    pub fn view_enter(&self) -> &ViewEnter<K, H> {
        &self.view_enter
    }

    /// Binds `element` under `trigger_spec`'s kind, animating `target`
    /// with the effect `spec`.
    ///
    /// Resolution comes first in every handler: when the effect fails to
    /// resolve the call is a complete no-op and an existing binding for
    /// the same `(element, kind)` pair stays live. On success the old
    /// binding is replaced.
    pub fn add<R, V>(
        &mut self,
        element: K,
        target: K,
        spec: &R::Spec,
        trigger_spec: TriggerSpec,
        resolver: &mut R,
        host: &mut V,
    ) where
        R: EffectResolver<K, Handle = H>,
        V: ViewportHost<K>,
    {
        match trigger_spec {
            TriggerSpec::Click(behavior) => {
                self.click.add(element, target, spec, behavior, resolver);
            }
            TriggerSpec::Hover(mode) => {
                self.hover.add(element, target, spec, mode, resolver);
            }
            TriggerSpec::PointerMove(axis) => {
                self.pointer.add(element, target, spec, axis, resolver);
            }
            TriggerSpec::ViewEnter(config) => {
                self.view_enter
                    .add(element, target, spec, config, resolver, host);
            }
            TriggerSpec::ViewProgress => {
                self.scrub.add(element, target, spec, resolver);
            }
        }
    }

    /// Tears down the element's binding under `trigger`, if any.
    pub fn remove<V: ViewportHost<K>>(&mut self, element: K, trigger: Trigger, host: &mut V) {
        match trigger {
            Trigger::Click => self.click.remove(element),
            Trigger::Hover => self.hover.remove(element),
            Trigger::PointerMove => self.pointer.remove(element),
            Trigger::ViewEnter => self.view_enter.remove(element, host),
            Trigger::ViewProgress => self.scrub.remove(element),
        }
    }

    /// Tears down every binding the element holds, across all kinds.
    pub fn remove_all<V: ViewportHost<K>>(&mut self, element: K, host: &mut V) {
        self.click.remove(element);
        self.hover.remove(element);
        self.pointer.remove(element);
        self.view_enter.remove(element, host);
        self.scrub.remove(element);
    }

    /// Feeds one click on `element`.
    pub fn on_click(&mut self, element: K) {
        self.click.on_click(element);
    }

    /// Feeds one hover transition on `element`.
    pub fn on_hover(&mut self, element: K, inside: bool) {
        self.hover.on_hover(element, inside);
    }

    /// Feeds one pointer position over `element`.
    pub fn on_pointer_move(&mut self, element: K, pos: Point, bounds: Rect) {
        self.pointer.on_pointer_move(element, pos, bounds);
    }

    /// Feeds one externally computed progress fraction for `element`.
    pub fn on_progress(&mut self, element: K, fraction: f64) {
        self.scrub.on_progress(element, fraction);
    }

    /// Feeds one viewport callback: routes to the enter controller by
    /// subscription and scrubs any progress binding on the same element.
    pub fn on_visibility<V: ViewportHost<K>>(
        &mut self,
        id: SubscriptionId,
        element: K,
        entry: &VisibilityEntry,
        host: &mut V,
        frames: &mut EnterFrames<K>,
    ) {
        self.view_enter.on_visibility(id, entry, host, frames);
        self.scrub.on_visibility(element, entry);
    }

    /// Drains the frame queue's safe-visibility work. Call once per frame.
    pub fn flush_frames<V: ViewportHost<K>>(
        &mut self,
        frames: &mut EnterFrames<K>,
        host: &mut V,
    ) {
        self.view_enter.flush_frames(frames, host);
    }
}
