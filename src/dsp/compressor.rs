//! Master-bus dynamics compressor.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Feed-Forward Compressor
=======================

Rapid pad hits stack voices on top of each other. The compressor keeps the
sum from slamming the output by turning the gain down once the signal
crosses a threshold.

  threshold  Level (dBFS) where compression begins.
  knee       Width (dB) of the soft transition around the threshold.
  ratio      Input dB above threshold per output dB above threshold.
  attack     Seconds for the gain reduction to catch up with a rise.
  release    Seconds for the gain reduction to let go after a fall.

Static curve (level in dB, x = input, T = threshold, W = knee, R = ratio):

  x < T - W/2            y = x
  |x - T| <= W/2         y = x + (1/R - 1) * (x - T + W/2)² / (2W)
  x > T + W/2            y = T + (x - T) / R

The per-sample gain reduction (y - x, in dB) is smoothed with one-pole
attack/release coefficients before being applied.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressorParams {
    pub threshold_db: f32,
    pub knee_db: f32,
    pub ratio: f32,
    pub attack: f32,
    pub release: f32,
}

impl Default for CompressorParams {
    fn default() -> Self {
        Self {
            threshold_db: -24.0,
            knee_db: 24.0,
            ratio: 12.0,
            attack: 0.003,
            release: 0.25,
        }
    }
}

pub struct Compressor {
    params: CompressorParams,
    attack_coeff: f32,
    release_coeff: f32,
    reduction_db: f32, // current smoothed gain change, always <= 0
}

impl Compressor {
    pub fn new(params: CompressorParams, sample_rate: f32) -> Self {
        let sample_rate = sample_rate.max(1.0);
        Self {
            params,
            attack_coeff: time_to_coeff(params.attack, sample_rate),
            release_coeff: time_to_coeff(params.release, sample_rate),
            reduction_db: 0.0,
        }
    }

    /// Gain change in dB the static curve asks for at `level_db`.
    pub fn static_reduction_db(&self, level_db: f32) -> f32 {
        let CompressorParams {
            threshold_db,
            knee_db,
            ratio,
            ..
        } = self.params;
        let slope = 1.0 / ratio.max(1.0) - 1.0;
        let over = level_db - threshold_db;

        if knee_db > 0.0 && over.abs() <= knee_db * 0.5 {
            let x = over + knee_db * 0.5;
            slope * x * x / (2.0 * knee_db)
        } else if over > 0.0 {
            slope * over
        } else {
            0.0
        }
    }

    pub fn process(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            let x = if sample.is_finite() { *sample } else { 0.0 };
            let level_db = 20.0 * x.abs().max(1e-9).log10();
            let target = self.static_reduction_db(level_db);

            let coeff = if target < self.reduction_db {
                self.attack_coeff
            } else {
                self.release_coeff
            };
            self.reduction_db = coeff * self.reduction_db + (1.0 - coeff) * target;

            *sample = x * 10.0_f32.powf(self.reduction_db / 20.0);
        }
    }

    /// Current gain reduction in dB (0 when idle, negative when compressing).
    pub fn reduction_db(&self) -> f32 {
        self.reduction_db
    }

    pub fn reset(&mut self) {
        self.reduction_db = 0.0;
    }
}

fn time_to_coeff(time_s: f32, sample_rate: f32) -> f32 {
    if time_s <= 0.0 {
        0.0
    } else {
        (-1.0 / (time_s * sample_rate)).exp()
    }
}
