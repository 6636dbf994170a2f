//! Noise burst - the breathy click layered under some pads.
//!
//! White noise that fades out over its own 0.45s buffer, band-passed so it
//! reads as a pitched puff rather than hiss. Higher pads push the band up.

use crate::graph::{
    envelope::EnvNode, extensions::NodeExt, filter::FilterNode, oscillator::OscNode, GraphNode,
};

/// Length of the decaying white-noise source in seconds.
pub const NOISE_SECONDS: f32 = 0.45;

/// Create the noise layer for pad `index` peaking at `level`.
///
/// Swells to `level` in 10ms, back to the floor at 120ms, cut at 140ms.
pub fn noise_burst(index: usize, level: f32, seed: u64) -> impl GraphNode {
    let center = 780.0 + index as f32 * 85.0;
    let q = 4.2 + (index % 4) as f32;

    OscNode::decaying_noise(NOISE_SECONDS, seed)
        .through(FilterNode::bandpass(center).with_q(q))
        .amplify(EnvNode::ramp(level, 0.01, 0.12))
        .gate(0.0, 0.14)
}
