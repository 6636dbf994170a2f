//! Pad voice - the sound of one tapped pad.
//!
//! Every pad in the grid gets its own pitch and timbre from the active theme.
//! Small per-index offsets (attack, release, vibrato rate, filter cutoff...)
//! keep neighbouring pads from sounding like copies of each other.
//!
//! # How It Works
//!
//! 1. Pitch comes from the theme's scale: the index walks the scale degrees
//!    and climbs an octave each time the scale wraps
//! 2. Two oscillators: the primary at the pad pitch, the secondary at a
//!    harmonic ratio of it, waveforms taken from the theme's list
//! 3. A sine LFO wobbles the primary's frequency (vibrato)
//! 4. Both oscillators share one resonant filter of the theme's type
//! 5. Exponential attack/release envelope, no sustain
//! 6. Every third pad layers a short filtered noise burst on top
//! 7. Everything is cut 50ms after the release lands on the floor
//!
//! # Timing
//!
//! ```text
//!   0      attack            release   release + 50ms
//!   │───────│──────────────────│─────────│
//!   floor → peak ───────────→ floor      stop
//! ```

use crate::{
    dsp::filter::FilterType,
    graph::{
        envelope::EnvNode,
        extensions::NodeExt,
        filter::FilterNode,
        lfo::LfoNode,
        node::midi_to_freq,
        oscillator::{OscNode, OscParam},
        GraphNode,
    },
    theme::ThemeAudioProfile,
    voices::noise::noise_burst,
};

/// Tail kept after the release ramp before every component stops.
pub const STOP_TAIL: f32 = 0.05;

/// Pitch of pad `index` in the given theme, in Hz.
///
/// `midi = root + scale[i mod len] + floor(i / len) * 12`
pub fn pad_frequency(audio: &ThemeAudioProfile, index: usize) -> f32 {
    let len = audio.scale.len();
    let degree = audio.scale[index % len];
    let octave = (index / len) as i32;
    let midi = audio.root + degree + octave * 12;
    midi_to_freq(midi as f32)
}

/// Per-index envelope and modulation values of one pad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadShape {
    pub frequency: f32,
    pub harmonic: f32,
    pub attack: f32,
    pub release: f32,
    pub peak: f32,
    pub lfo_rate: f32,
    pub vibrato: f32,
    pub cutoff: f32,
    pub q: f32,
}

impl PadShape {
    pub fn new(audio: &ThemeAudioProfile, index: usize) -> Self {
        let i = index as f32;
        Self {
            frequency: pad_frequency(audio, index),
            harmonic: audio.harmonic[index % audio.harmonic.len()],
            attack: 0.003 + (index % 4) as f32 * 0.0025,
            release: audio.release + (index % 6) as f32 * 0.027,
            peak: 0.09 + (index % 5) as f32 * 0.02,
            lfo_rate: audio.lfo_rate + (index % 7) as f32 * 0.41,
            vibrato: audio.vibrato + (index % 3) as f32 * 0.8,
            cutoff: audio.filter_base + i * 95.0,
            q: audio.q + (index % 5) as f32 * 0.7,
        }
    }

    /// Seconds after the trigger at which every component stops.
    pub fn stop_at(&self) -> f32 {
        self.release + STOP_TAIL
    }
}

/// Low/high-pass resonance is given in dB; the other responses take a plain Q.
pub fn filter_q(filter: FilterType, q: f32) -> f32 {
    match filter {
        FilterType::LowPass | FilterType::HighPass => 10.0_f32.powf(q / 20.0),
        FilterType::BandPass | FilterType::Notch | FilterType::Peaking => q,
    }
}

/// True when pad `index` layers the noise burst.
pub fn has_noise_layer(index: usize) -> bool {
    index % 3 == 0
}

/// Create the one-shot voice for pad `index` in the given theme.
///
/// `noise_seed` seeds the white-noise layer so renders can be reproduced.
pub fn pad_voice(
    index: usize,
    audio: &ThemeAudioProfile,
    noise_seed: u64,
) -> Box<dyn GraphNode> {
    let shape = PadShape::new(audio, index);
    let waveforms = audio.waveforms;

    // Primary oscillator with vibrato
    let primary = OscNode::new(waveforms[index % waveforms.len()])
        .with_frequency(shape.frequency)
        .modulate(LfoNode::sine(shape.lfo_rate), OscParam::Frequency, shape.vibrato);

    // Secondary oscillator at a harmonic ratio
    let secondary = OscNode::new(waveforms[(index % waveforms.len() + 1) % waveforms.len()])
        .with_frequency(shape.frequency * shape.harmonic);

    let filter = FilterNode::new(audio.filter, shape.cutoff)
        .with_q(filter_q(audio.filter, shape.q));

    let tone = primary
        .sum(secondary)
        .through(filter)
        .amplify(EnvNode::ramp(shape.peak, shape.attack, shape.release))
        .gate(0.0, shape.stop_at());

    if has_noise_layer(index) {
        Box::new(tone.sum(noise_burst(index, audio.noise, noise_seed)))
    } else {
        Box::new(tone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::RenderCtx, theme::theme_at, MAX_BLOCK_SIZE};

    #[test]
    fn frequency_follows_scale_and_octave() {
        let audio = &theme_at(0).audio;
        // Nocturne Glass: root 46, scale [0, 3, 5, 7, 10]
        assert!((pad_frequency(audio, 0) - midi_to_freq(46.0)).abs() < 1e-3);
        assert!((pad_frequency(audio, 2) - midi_to_freq(51.0)).abs() < 1e-3);
        // Index 5 wraps the scale: degree 0, one octave up
        assert!((pad_frequency(audio, 5) - midi_to_freq(58.0)).abs() < 1e-3);
    }

    #[test]
    fn frequencies_positive_and_deterministic() {
        for theme in 0..5 {
            let audio = &theme_at(theme).audio;
            for index in 0..29 {
                let f = pad_frequency(audio, index);
                assert!(f > 0.0);
                assert_eq!(f, pad_frequency(audio, index));
            }
        }
    }

    #[test]
    fn shape_offsets_by_index() {
        let audio = &theme_at(1).audio;
        let shape = PadShape::new(audio, 7);
        assert!((shape.attack - (0.003 + 3.0 * 0.0025)).abs() < 1e-6);
        assert!((shape.release - (0.18 + 1.0 * 0.027)).abs() < 1e-6);
        assert!((shape.peak - (0.09 + 2.0 * 0.02)).abs() < 1e-6);
        assert!((shape.lfo_rate - 6.8).abs() < 1e-6);
        assert!((shape.vibrato - (3.8 + 0.8)).abs() < 1e-6);
        assert!((shape.cutoff - (940.0 + 7.0 * 95.0)).abs() < 1e-3);
        assert!((shape.q - (3.8 + 2.0 * 0.7)).abs() < 1e-6);
        assert!((shape.harmonic - 1.5).abs() < 1e-6);
        assert!((shape.stop_at() - (shape.release + 0.05)).abs() < 1e-6);
    }

    #[test]
    fn resonance_db_only_for_low_and_high_pass() {
        assert!((filter_q(FilterType::LowPass, 0.0) - 1.0).abs() < 1e-6);
        assert!((filter_q(FilterType::HighPass, 20.0) - 10.0).abs() < 1e-4);
        assert_eq!(filter_q(FilterType::BandPass, 5.8), 5.8);
        assert_eq!(filter_q(FilterType::Notch, 9.0), 9.0);
    }

    #[test]
    fn renders_in_one_call_longer_than_scratch() {
        let ctx = RenderCtx::from_freq(48_000.0, 440.0, 1.0);
        // Pad 6 layers the noise burst, so every combinator is in the graph
        for (theme, pad) in [(1, 7), (0, 6)] {
            let mut voice = pad_voice(pad, &theme_at(theme).audio, 21);
            voice.note_on(&ctx);

            let mut buffer = vec![0.0; MAX_BLOCK_SIZE * 3 + 100];
            voice.render_block(&mut buffer, &ctx);

            assert!(buffer.iter().all(|s| s.is_finite()));
            let tail = &buffer[MAX_BLOCK_SIZE * 2..];
            assert!(tail.iter().any(|&s| s.abs() > 1e-5), "theme {theme} pad {pad}");
        }
    }

    #[test]
    fn noise_layer_on_every_third_pad() {
        assert!(has_noise_layer(0));
        assert!(!has_noise_layer(1));
        assert!(has_noise_layer(27));
    }
}
