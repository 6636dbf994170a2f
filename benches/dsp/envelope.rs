//! Envelope cost in each stage of a pad hit.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use padlight::dsp::envelope::Envelope;
use padlight::graph::node::RenderCtx;

use crate::BLOCK_SIZES;

/// An envelope advanced `skip` samples into its ramp.
fn advanced(attack_end: f32, release_end: f32, skip: usize, ctx: &RenderCtx) -> Envelope {
    let mut env = Envelope::ramp(0.2, attack_end, release_end);
    env.note_on(ctx);
    (0..skip).for_each(|_| env.next_sample(ctx));
    env
}

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");
    let ctx = RenderCtx::from_freq(48_000.0, 233.0, 1.0);

    // Long ramps so the stage does not change while criterion iterates
    let stages = [
        ("attack", advanced(10.0, 20.0, 0, &ctx)),
        ("release", advanced(0.001, 20.0, 200, &ctx)),
        ("done", advanced(0.001, 0.002, 200, &ctx)),
    ];

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];
        for (name, template) in &stages {
            let mut env = template.clone();
            group.bench_with_input(BenchmarkId::new(*name, size), &size, |b, _| {
                b.iter(|| env.render(black_box(&mut buffer), black_box(&ctx)))
            });
        }
    }

    group.finish();
}
