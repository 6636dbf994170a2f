//! Benchmarks for the effect scheduler.
//!
//! A frame at the cap (220 live effects of every kind) is the worst case the
//! renderer has to hit inside a 60fps budget.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use padlight::{
    fx::{effect::Vec2, scheduler::EffectScheduler},
    grid::{pad_center, MODE_PAD},
    theme::theme_at,
};

/// Live effect counts to measure one frame at.
const EFFECT_COUNTS: &[usize] = &[12, 60, 220];

fn loaded_scheduler(count: usize) -> EffectScheduler {
    let mut fx = EffectScheduler::with_seed(false, 1);
    for step in 0..count {
        let pad = step % MODE_PAD;
        let theme_index = step / MODE_PAD;
        fx.spawn_pad_effect(
            pad,
            pad_center(pad, 960.0, 600.0),
            theme_at(theme_index),
            theme_index,
            0.0,
        );
    }
    fx
}

pub fn bench_effects(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/effects");

    for &count in EFFECT_COUNTS {
        // Mid-animation frame; nothing expires so the load stays constant
        let mut fx = loaded_scheduler(count);
        group.bench_with_input(BenchmarkId::new("advance", count), &count, |b, _| {
            b.iter(|| black_box(fx.advance(black_box(250.0))))
        });
    }

    // Spawning at the cap: every insert evicts the oldest effect
    let mut fx = loaded_scheduler(220);
    group.bench_function("burst_at_cap", |b| {
        b.iter(|| fx.spawn_mode_switch_burst(black_box(Vec2::new(480.0, 300.0)), theme_at(0), 0.0))
    });

    group.finish();
}
