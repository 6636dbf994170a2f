use std::f32::consts::TAU;

use rand::{rngs::SmallRng, Rng, SeedableRng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::node::RenderCtx;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OscillatorWaveform {
    Sine,
    Sawtooth,
    Square,
    Triangle,
    Noise,
}

impl OscillatorWaveform {
    /// Value of one cycle at `phase` in [0, 1). Noise has no cycle and reads 0.
    #[inline]
    pub fn sample_at(self, phase: f32) -> f32 {
        match self {
            Self::Sine => (TAU * phase).sin(),
            Self::Sawtooth => 2.0 * phase - 1.0,
            Self::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Self::Triangle => {
                if phase < 0.25 {
                    4.0 * phase
                } else if phase < 0.75 {
                    2.0 - 4.0 * phase
                } else {
                    4.0 * phase - 4.0
                }
            }
            Self::Noise => 0.0,
        }
    }
}

const NOISE_SEED: u64 = 0x5eed_0f_ba5e;

/// Phase-accumulating oscillator. Frequency comes from the render context.
pub struct OscillatorBlock {
    waveform: OscillatorWaveform,
    phase: f32,
    rng: SmallRng,
    /// Noise only: linear fade to silence over this many seconds.
    decay_seconds: Option<f32>,
    elapsed_samples: u64,
}

impl OscillatorBlock {
    pub fn new(waveform: OscillatorWaveform) -> Self {
        Self {
            waveform,
            phase: 0.0,
            rng: SmallRng::seed_from_u64(NOISE_SEED),
            decay_seconds: None,
            elapsed_samples: 0,
        }
    }

    pub fn sine() -> Self {
        Self::new(OscillatorWaveform::Sine)
    }

    pub fn sawtooth() -> Self {
        Self::new(OscillatorWaveform::Sawtooth)
    }

    pub fn square() -> Self {
        Self::new(OscillatorWaveform::Square)
    }

    pub fn triangle() -> Self {
        Self::new(OscillatorWaveform::Triangle)
    }

    pub fn noise() -> Self {
        Self::new(OscillatorWaveform::Noise)
    }

    /// White noise whose amplitude falls linearly to zero over `seconds`.
    pub fn decaying_noise(seconds: f32, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            decay_seconds: Some(seconds.max(crate::MIN_TIME)),
            ..Self::noise()
        }
    }

    pub fn render(&mut self, destination: &mut [f32], ctx: &RenderCtx) {
        if matches!(self.waveform, OscillatorWaveform::Noise) {
            self.render_noise(destination, ctx);
            return;
        }

        let increment = ctx.frequency / ctx.sample_rate;
        for sample in destination.iter_mut() {
            *sample = self.waveform.sample_at(self.phase);
            self.phase += increment;
            self.phase -= self.phase.floor();
        }
    }

    fn render_noise(&mut self, destination: &mut [f32], ctx: &RenderCtx) {
        let total = self
            .decay_seconds
            .map(|seconds| (seconds * ctx.sample_rate).max(1.0));
        for sample in destination.iter_mut() {
            let white: f32 = self.rng.random_range(-1.0..1.0);
            let gain = match total {
                Some(total) => (1.0 - self.elapsed_samples as f32 / total).max(0.0),
                None => 1.0,
            };
            *sample = white * gain;
            self.elapsed_samples = self.elapsed_samples.saturating_add(1);
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
        self.elapsed_samples = 0;
    }
}

impl Default for OscillatorBlock {
    fn default() -> Self {
        Self::sine()
    }
}
