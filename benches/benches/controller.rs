// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use inview_enter::{EnterConfig, EnterFrames, Mode, ViewEnter};
use inview_playback::{EffectResolver, RecordingHandle};
use inview_viewport::{StubViewport, VisibilityEntry};
use kurbo::Rect;

struct Effects;

impl EffectResolver<u32> for Effects {
    type Spec = &'static str;
    type Handle = RecordingHandle;

    fn resolve(&mut self, _target: u32, _spec: &Self::Spec) -> Option<RecordingHandle> {
        Some(RecordingHandle::new())
    }
}

fn entry(intersecting: bool) -> VisibilityEntry {
    VisibilityEntry::new(
        intersecting,
        Rect::new(0.0, 100.0, 100.0, 300.0),
        Rect::new(0.0, 0.0, 800.0, 600.0),
    )
}

fn populated(
    n: u32,
    mode: Mode,
) -> (ViewEnter<u32, RecordingHandle>, StubViewport<u32>) {
    let mut controller = ViewEnter::new();
    let mut viewport = StubViewport::new();
    let mut effects = Effects;
    for key in 0..n {
        controller.add(
            key,
            key,
            &"effect",
            EnterConfig::new(mode).threshold(0.3),
            &mut effects,
            &mut viewport,
        );
    }
    (controller, viewport)
}

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("inview_controller");
    group.sample_size(50);

    for &n in &[64_u32, 1_024_u32] {
        group.bench_function(format!("add_remove_churn(n={n})"), |b| {
            b.iter_batched(
                || (ViewEnter::new(), StubViewport::new()),
                |(mut controller, mut viewport)| {
                    let mut effects = Effects;
                    for key in 0..n {
                        controller.add(
                            key,
                            key,
                            &"effect",
                            EnterConfig::new(Mode::State),
                            &mut effects,
                            &mut viewport,
                        );
                    }
                    for key in 0..n {
                        controller.remove(key, &mut viewport);
                    }
                    black_box((controller, viewport));
                },
                BatchSize::LargeInput,
            );
        });

        for mode in [Mode::Alternate, Mode::State] {
            group.bench_function(format!("signal_all_enter_exit(n={n},{mode:?})"), |b| {
                b.iter_batched(
                    || {
                        let (controller, viewport) = populated(n, mode);
                        let subs: Vec<_> = (0..n)
                            .map(|key| viewport.subscriptions_for(key)[0])
                            .collect();
                        (controller, viewport, subs)
                    },
                    |(mut controller, mut viewport, subs)| {
                        let mut frames = EnterFrames::new();
                        for &sub in &subs {
                            controller.on_visibility(
                                sub,
                                &entry(true),
                                &mut viewport,
                                &mut frames,
                            );
                        }
                        for &sub in &subs {
                            controller.on_visibility(
                                sub,
                                &entry(false),
                                &mut viewport,
                                &mut frames,
                            );
                        }
                        controller.flush_frames(&mut frames, &mut viewport);
                        black_box(controller);
                    },
                    BatchSize::LargeInput,
                );
            });
        }

        // The safe protocol: every binding is taller than its threshold
        // allows, so the first non-intersecting pass probes and replaces.
        group.bench_function(format!("safe_replacement_wave(n={n})"), |b| {
            b.iter_batched(
                || {
                    let mut controller = ViewEnter::new();
                    let mut viewport = StubViewport::new();
                    let mut effects = Effects;
                    for key in 0..n {
                        controller.add(
                            key,
                            key,
                            &"effect",
                            EnterConfig::new(Mode::Once).threshold(0.9).safe(true),
                            &mut effects,
                            &mut viewport,
                        );
                    }
                    let subs: Vec<_> = (0..n)
                        .map(|key| viewport.subscriptions_for(key)[0])
                        .collect();
                    (controller, viewport, subs)
                },
                |(mut controller, mut viewport, subs)| {
                    let mut frames = EnterFrames::new();
                    let tall = VisibilityEntry::new(
                        false,
                        Rect::new(0.0, 600.0, 100.0, 1800.0),
                        Rect::new(0.0, 0.0, 800.0, 600.0),
                    );
                    for &sub in &subs {
                        controller.on_visibility(sub, &tall, &mut viewport, &mut frames);
                    }
                    controller.flush_frames(&mut frames, &mut viewport);
                    black_box((controller, viewport));
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_controller);
criterion_main!(benches);
