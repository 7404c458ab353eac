// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport-enter controller: binding registry, observer pair
//! lifecycle, and the safe-visibility protocol.

use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;

use inview_playback::{EffectResolver, PlaybackHandle};
use inview_scheduler::FrameQueue;
use inview_viewport::{ObserverConfig, SubscriptionId, ViewportHost, VisibilityEntry};

use crate::machine::{self, HandleOp, Phase};
use crate::safety::{self, SafeTag};
use crate::{EnterConfig, Mode};

/// Read job: heights measured at the first non-intersecting signal of a
/// safe-enabled binding.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SafeProbe<K> {
    /// The bound element.
    pub key: K,
    /// The element's height at measurement time.
    pub source_height: f64,
    /// The observation root's height at measurement time.
    pub root_height: f64,
}

/// Write job: replace a binding's primary subscription with the safe-mode
/// configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SafeReplace<K> {
    /// The bound element.
    pub key: K,
    /// The root height the replacement margin is derived from.
    pub root_height: f64,
}

/// The frame queue type consumed by [`ViewEnter`].
pub type EnterFrames<K> = FrameQueue<SafeProbe<K>, SafeReplace<K>>;

/// Which of a binding's subscriptions delivered a signal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Role {
    Primary,
    Exit,
}

/// One live viewport-enter binding.
struct Binding<H> {
    handle: H,
    config: EnterConfig,
    phase: Phase,
    safe: SafeTag,
    probe_pending: bool,
    primary: Option<SubscriptionId>,
    exit: Option<SubscriptionId>,
}

/// Viewport-enter trigger controller.
///
/// Keeps at most one binding per element. Each binding exclusively owns a
/// playback handle and up to two visibility subscriptions (the primary, and
/// a separate exit subscription for [`Mode::Repeat`] and [`Mode::State`]).
/// Raw signals flow in through [`on_visibility`](Self::on_visibility);
/// the pure transition table in [`machine`] decides which handle operations
/// to emit.
///
/// The controller never blocks and makes no handle call without first
/// re-checking that the binding is still live, so signals that were already
/// queued when [`remove`](Self::remove) ran are dropped rather than acted
/// on.
pub struct ViewEnter<K, H> {
    bindings: HashMap<K, Binding<H>>,
    subs: HashMap<SubscriptionId, (K, Role)>,
}

impl<K, H> Default for ViewEnter<K, H> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
            subs: HashMap::new(),
        }
    }
}

impl<K, H> fmt::Debug for ViewEnter<K, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewEnter")
            .field("bindings", &self.bindings.len())
            .field("subscriptions", &self.subs.len())
            .finish()
    }
}

impl<K: Copy + Eq + Hash, H: PlaybackHandle> ViewEnter<K, H> {
    /// Creates an empty controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no bindings are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns `true` if the element has a live binding.
    #[must_use]
    pub fn contains(&self, element: K) -> bool {
        self.bindings.contains_key(&element)
    }

    /// Returns the element's current lifecycle phase, if bound.
    #[must_use]
    pub fn phase(&self, element: K) -> Option<Phase> {
        self.bindings.get(&element).map(|b| b.phase)
    }

    /// Returns the element's safe-visibility tag, if bound.
    #[must_use]
    pub fn safe_tag(&self, element: K) -> Option<SafeTag> {
        self.bindings.get(&element).map(|b| b.safe)
    }

    /// Binds `element` to the effect `spec`, animating `target`.
    ///
    /// Resolution happens first: if the resolver returns `None` the call is
    /// a complete no-op — no subscription is created and any existing
    /// binding is left untouched. Otherwise a previous binding for the same
    /// element is fully torn down before the new one is installed, the
    /// handle's reset-on-finish default is detached with one `persist()`
    /// call, and the observer pair dictated by `config.mode` is created.
    pub fn add<R, V>(
        &mut self,
        element: K,
        target: K,
        spec: &R::Spec,
        config: EnterConfig,
        resolver: &mut R,
        host: &mut V,
    ) where
        R: EffectResolver<K, Handle = H>,
        V: ViewportHost<K>,
    {
        let Some(mut handle) = resolver.resolve(target, spec) else {
            return;
        };

        // Re-binding the same element must not stack subscriptions.
        self.remove(element, host);

        // Persist regardless of mode, before any signal: pausing or
        // reversing mid-flight is only meaningful once the handle stops
        // resetting on finish.
        handle.persist();

        let primary = host.observe(
            element,
            ObserverConfig {
                threshold: config.threshold,
                top_margin: config.top_margin,
                bottom_margin: config.bottom_margin,
            },
        );
        self.subs.insert(primary, (element, Role::Primary));

        let exit = if config.mode.uses_exit_observer() {
            let id = host.observe(element, ObserverConfig::with_threshold(config.exit_threshold));
            self.subs.insert(id, (element, Role::Exit));
            Some(id)
        } else {
            None
        };

        self.bindings.insert(
            element,
            Binding {
                handle,
                config,
                phase: Phase::Unseen,
                safe: SafeTag::Undecided,
                probe_pending: false,
                primary: Some(primary),
                exit,
            },
        );
    }

    /// Tears down the element's binding, if any.
    ///
    /// Idempotent: unknown elements are a silent no-op. Both subscriptions
    /// are dropped and no further signal for them will be acted on. The
    /// handle is released without a `cancel()` call — its engine-side
    /// lifecycle belongs to the resolver that produced it.
    pub fn remove<V: ViewportHost<K>>(&mut self, element: K, host: &mut V) {
        let Some(binding) = self.bindings.remove(&element) else {
            return;
        };
        for id in [binding.primary, binding.exit].into_iter().flatten() {
            host.unobserve(id);
            self.subs.remove(&id);
        }
    }

    /// Feeds one raw visibility signal into the state machine.
    ///
    /// Signals for unknown subscriptions (late callbacks after a
    /// [`remove`](Self::remove), or a retired `Once` primary) are dropped.
    /// For safe-enabled bindings, the first non-intersecting primary signal
    /// enqueues a geometry probe on `frames`; the decision and any
    /// re-subscription run in [`flush_frames`](Self::flush_frames).
    pub fn on_visibility<V: ViewportHost<K>>(
        &mut self,
        id: SubscriptionId,
        entry: &VisibilityEntry,
        host: &mut V,
        frames: &mut EnterFrames<K>,
    ) {
        let Some(&(key, role)) = self.subs.get(&id) else {
            return;
        };
        let Some(binding) = self.bindings.get_mut(&key) else {
            return;
        };

        // Safe-visibility is evaluated lazily on the first signal that
        // reports the threshold unmet, and never again.
        if role == Role::Primary
            && !entry.intersecting
            && binding.config.safe
            && binding.safe == SafeTag::Undecided
            && !binding.probe_pending
        {
            binding.probe_pending = true;
            frames.read(SafeProbe {
                key,
                source_height: entry.bounds.height(),
                root_height: entry.root_bounds.height(),
            });
        }

        let Some(visible) = signal_polarity(binding.config.mode, role, entry.intersecting) else {
            return;
        };

        let transition = machine::step(binding.config.mode, binding.phase, visible);
        binding.phase = transition.phase;
        apply_ops(&mut binding.handle, &transition.ops);

        if transition.retire {
            if let Some(primary) = binding.primary.take() {
                host.unobserve(primary);
                self.subs.remove(&primary);
            }
        }
    }

    /// Drains pending safe-visibility work: reads, then writes.
    ///
    /// Hosts call this once per frame after delivering a visibility pass.
    /// Bindings removed (or whose primary retired) between enqueue and
    /// flush are re-validated and skipped. A triggered replacement unobserves the primary and installs
    /// the zero-threshold, negative-bottom-margin configuration exactly
    /// once; the substitution is terminal for the binding's lifetime.
    pub fn flush_frames<V: ViewportHost<K>>(
        &mut self,
        frames: &mut EnterFrames<K>,
        host: &mut V,
    ) {
        // Read phase: consume measurements; decisions that need to mutate
        // subscriptions become write jobs for the second phase.
        for probe in frames.take_reads() {
            let Some(binding) = self.bindings.get_mut(&probe.key) else {
                continue;
            };
            binding.probe_pending = false;
            if binding.safe != SafeTag::Undecided {
                continue;
            }
            if safety::needs_replacement(
                probe.source_height,
                binding.config.threshold,
                probe.root_height,
            ) {
                frames.write(SafeReplace {
                    key: probe.key,
                    root_height: probe.root_height,
                });
            } else {
                binding.safe = SafeTag::Kept;
            }
        }

        // Write phase: re-subscribe the flagged bindings.
        for job in frames.take_writes() {
            let Some(binding) = self.bindings.get_mut(&job.key) else {
                continue;
            };
            if binding.safe != SafeTag::Undecided {
                continue;
            }
            // A retired primary stays retired: replacement only ever swaps
            // a live subscription.
            let Some(old) = binding.primary.take() else {
                continue;
            };
            host.unobserve(old);
            self.subs.remove(&old);
            let id = host.observe(job.key, safety::replacement_config(job.root_height));
            self.subs.insert(id, (job.key, Role::Primary));
            binding.primary = Some(id);
            binding.safe = SafeTag::Replaced;
        }
    }
}

/// Reduces a raw subscription signal to the machine's boolean, or drops it.
///
/// `Once`/`Alternate` use a single subscription that carries both
/// polarities. `Repeat`/`State` split them: the primary only reports
/// entries (its `false` signals feed nothing but the safe probe) and the
/// exit subscription only reports leaves, so the two geometries stay
/// independently tunable.
fn signal_polarity(mode: Mode, role: Role, intersecting: bool) -> Option<bool> {
    match role {
        Role::Primary if mode.uses_exit_observer() => intersecting.then_some(true),
        Role::Primary => Some(intersecting),
        Role::Exit => (!intersecting).then_some(false),
    }
}

fn apply_ops<H: PlaybackHandle>(handle: &mut H, ops: &[HandleOp]) {
    for op in ops {
        match op {
            HandleOp::Play => handle.play(),
            HandleOp::Pause => handle.pause(),
            HandleOp::Reverse => handle.reverse(),
            HandleOp::Seek(progress) => handle.seek(*progress),
        }
    }
}
