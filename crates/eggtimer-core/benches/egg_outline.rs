//! Benchmarks for egg outline sampling.
//!
//! - **`egg_outline`**: samples the default egg shape at several resolutions,
//!   including the one-point-per-degree outline the app draws.
//! - **`timer_ticks`**: applies a full 30 second boil worth of ticks.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench egg_outline
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use eggtimer_core::{EggShape, InvalidDurationPolicy, TimerMode, TimerState};

const STEPS: [u32; 3] = [90, 360, 1440];

fn bench_egg_outline(c: &mut Criterion) {
    let shape = EggShape::default();
    for steps in STEPS {
        c.bench_with_input(BenchmarkId::new("egg_outline", steps), &steps, |b, &steps| {
            b.iter(|| shape.outline(hint::black_box(steps)));
        });
    }
}

fn bench_timer_ticks(c: &mut Criterion) {
    c.bench_function("timer_ticks", |b| {
        b.iter(|| {
            let mut timer =
                TimerState::new(TimerMode::DurationScaled, InvalidDurationPolicy::Refuse);
            timer.handle_start(hint::black_box("30")).unwrap();
            while timer.on_tick() {}
            timer
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().plotting_backend(PlottingBackend::Plotters);
    targets =
        bench_egg_outline,
        bench_timer_ticks
);
criterion_main!(benches);
