//! Benchmarks for complete voice chains.
//!
//! These test the signal paths the instrument actually plays: a single pad
//! voice, the mode-switch chime, and a busy master bus.

use std::{collections::VecDeque, hint::black_box};

use criterion::{BenchmarkId, Criterion};
use padlight::{
    graph::node::{GraphNode, RenderCtx},
    synth::{BusSettings, SynthMessage, VoicePool},
    theme::theme_at,
    voices,
};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");
    let ctx = RenderCtx::from_freq(SAMPLE_RATE, 440.0, 1.0);
    let audio = &theme_at(0).audio;

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // === PAD VOICE ===
        // osc (vibrato) + harmonic osc → filter → ramp envelope
        // Index 1 has no noise layer: the baseline cost of a pad hit
        let mut pad = voices::pad_voice(1, audio, 7);
        pad.note_on(&ctx);
        group.bench_with_input(BenchmarkId::new("pad", size), &size, |b, _| {
            b.iter(|| {
                pad.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });

        // === PAD VOICE WITH NOISE ===
        // Every third pad adds a band-passed noise burst
        let mut noisy = voices::pad_voice(0, audio, 7);
        noisy.note_on(&ctx);
        group.bench_with_input(BenchmarkId::new("pad_noise", size), &size, |b, _| {
            b.iter(|| {
                noisy.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });

        // === MODE SWITCH CHIME ===
        // Four gated notes summed
        let mut chime = voices::mode_switch_chime(2);
        chime.note_on(&ctx);
        group.bench_with_input(BenchmarkId::new("chime", size), &size, |b, _| {
            b.iter(|| {
                chime.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });
    }

    group.finish();

    // === FULL BUS ===
    // 16 simultaneous pad voices through master gain and compressor,
    // like a fast sweep across the grid
    let mut group = c.benchmark_group("scenarios/bus");
    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];
        let mut pool = VoicePool::new(SAMPLE_RATE, BusSettings::default(), VecDeque::new());
        for index in 0..16 {
            let voice = voices::pad_voice(index, audio, index as u64);
            pool.receiver_mut().push_back(SynthMessage::Play(voice));
        }

        group.bench_with_input(BenchmarkId::new("16_pads", size), &size, |b, _| {
            b.iter(|| {
                pool.render_block(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
