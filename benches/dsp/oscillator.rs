//! Oscillator cost per waveform, at the pitch range pad voices play in.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use padlight::dsp::oscillator::{OscillatorBlock, OscillatorWaveform};
use padlight::graph::node::RenderCtx;

use crate::BLOCK_SIZES;

const WAVEFORMS: [(&str, OscillatorWaveform); 5] = [
    ("sine", OscillatorWaveform::Sine),
    ("sawtooth", OscillatorWaveform::Sawtooth),
    ("square", OscillatorWaveform::Square),
    ("triangle", OscillatorWaveform::Triangle),
    ("noise", OscillatorWaveform::Noise),
];

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    // Pad 14 of the default theme
    let ctx = RenderCtx::from_midi(48_000.0, 70.0, 1.0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for (name, waveform) in WAVEFORMS {
            let mut osc = OscillatorBlock::new(waveform);
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| osc.render(black_box(&mut buffer), black_box(&ctx)))
            });
        }

        // The pad noise layer also pays for its linear fade
        let mut breath = OscillatorBlock::decaying_noise(0.45, 7);
        group.bench_with_input(BenchmarkId::new("decaying_noise", size), &size, |b, _| {
            b.iter(|| breath.render(black_box(&mut buffer), black_box(&ctx)))
        });
    }

    group.finish();
}
