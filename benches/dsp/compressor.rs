//! Benchmarks for the master bus compressor.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use padlight::dsp::compressor::{Compressor, CompressorParams};

use crate::BLOCK_SIZES;

pub fn bench_compressor(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/compressor");

    for &size in BLOCK_SIZES {
        // Below threshold: static curve only
        let quiet: Vec<f32> = (0..size).map(|i| (i as f32 * 0.05).sin() * 0.01).collect();
        // Well above threshold: full gain reduction path
        let loud: Vec<f32> = (0..size).map(|i| (i as f32 * 0.05).sin() * 0.9).collect();

        let mut comp = Compressor::new(CompressorParams::default(), 48_000.0);
        let mut buffer = quiet.clone();
        group.bench_with_input(BenchmarkId::new("quiet", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&quiet);
                comp.process(black_box(&mut buffer));
            })
        });

        let mut comp = Compressor::new(CompressorParams::default(), 48_000.0);
        let mut buffer = loud.clone();
        group.bench_with_input(BenchmarkId::new("loud", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&loud);
                comp.process(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
