//! Parameter modulation primitives.

/*
Parameter Modulation
====================

A modulator (usually an LFO) continuously varies a parameter of another node:

    modulated_value = base_value + (modulator × depth)

Pad voices use this for vibrato: a sine LFO swinging -1..+1 adds
±depth Hz to the primary oscillator's frequency.

Block-Rate Modulation
---------------------

Updating the parameter every sample is exact but pays the full cost of
recomputing the target each time. Instead the modulator is rendered for the
whole block, averaged, and applied once before the block renders. The voice
pool renders in short control blocks (64 samples, ~1.3ms at 48kHz), far
finer than the 2-8 Hz LFOs used for vibrato, so the staircase is inaudible.
*/

/// Apply modulation to a base value: base + modulator × depth.
#[inline]
pub fn apply_modulation(base_value: f32, modulator: f32, depth: f32) -> f32 {
    base_value + modulator * depth
}

/// Average of a block of modulator samples (0.0 for an empty block).
#[inline]
pub fn block_average(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f32>() / samples.len() as f32
}
