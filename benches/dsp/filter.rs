//! State-variable filter cost for each theme's pad filter.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use padlight::{
    dsp::filter::SVFilter,
    graph::node::RenderCtx,
    theme::{theme_at, theme_count},
    voices::filter_q,
};

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");
    let ctx = RenderCtx::from_freq(48_000.0, 233.0, 1.0);

    for &size in BLOCK_SIZES {
        // Sawtooth-like ramp, rich enough to keep every response busy
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();

        for theme in (0..theme_count()).map(theme_at) {
            let audio = &theme.audio;
            let mut filter = SVFilter::with_cutoff(audio.filter, audio.filter_base);
            filter.set_q(filter_q(audio.filter, audio.q));
            let mut buffer = input.clone();
            group.bench_with_input(BenchmarkId::new(theme.name, size), &size, |b, _| {
                b.iter(|| {
                    buffer.copy_from_slice(&input);
                    filter.render(black_box(&mut buffer), black_box(&ctx));
                })
            });
        }
    }

    group.finish();
}
