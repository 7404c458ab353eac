// Copyright 2025 the Inview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use inview_enter::Mode;
use inview_enter::machine::{Phase, step};

const MODES: [Mode; 4] = [Mode::Once, Mode::Alternate, Mode::Repeat, Mode::State];
const PHASES: [Phase; 3] = [Phase::Unseen, Phase::Entered, Phase::Exited];

fn bench_machine(c: &mut Criterion) {
    let mut group = c.benchmark_group("inview_machine");

    // The full (mode, phase, signal) table in one pass.
    group.bench_function("step_full_table", |b| {
        b.iter(|| {
            for mode in MODES {
                for phase in PHASES {
                    for visible in [true, false] {
                        black_box(step(
                            black_box(mode),
                            black_box(phase),
                            black_box(visible),
                        ));
                    }
                }
            }
        });
    });

    // A long alternating enter/exit stream of a single binding, the shape a
    // scroll-heavy page produces.
    for mode in MODES {
        group.bench_function(format!("step_alternating_1k({mode:?})"), |b| {
            b.iter(|| {
                let mut phase = Phase::Unseen;
                for i in 0_u32..1_000 {
                    let transition = step(mode, phase, i % 2 == 0);
                    phase = transition.phase;
                    black_box(&transition.ops);
                }
                black_box(phase);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_machine);
criterion_main!(benches);
