//! Fan-in cost: the oscillator pair inside a pad voice and the chime's
//! four gated notes.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use padlight::graph::{
    extensions::NodeExt,
    node::{GraphNode, RenderCtx},
    oscillator::OscNode,
};

use crate::BLOCK_SIZES;

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/mix");
    let ctx = RenderCtx::from_freq(48_000.0, 233.0, 1.0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let mut pair = OscNode::sawtooth()
            .with_frequency(233.0)
            .sum(OscNode::sine().with_frequency(349.5));
        group.bench_with_input(BenchmarkId::new("pad_pair", size), &size, |b, _| {
            b.iter(|| pair.render_block(black_box(&mut buffer), black_box(&ctx)))
        });

        let mut quartet = OscNode::triangle()
            .with_frequency(659.3)
            .sum(OscNode::triangle().with_frequency(784.0))
            .sum(OscNode::triangle().with_frequency(987.8))
            .sum(OscNode::triangle().with_frequency(1318.5));
        group.bench_with_input(BenchmarkId::new("chime_quartet", size), &size, |b, _| {
            b.iter(|| quartet.render_block(black_box(&mut buffer), black_box(&ctx)))
        });
    }

    group.finish();
}
