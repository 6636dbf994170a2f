use crate::dsp::oscillator::{OscillatorBlock, OscillatorWaveform};
use crate::graph::node::{GraphNode, Modulatable, RenderCtx};

/*
Audio Oscillator
================

An oscillator is the fundamental sound source in a synthesizer. It generates
a repeating waveform at a specific frequency (pitch), producing the raw
audio material that gets shaped by filters and envelopes.

Waveform Types and Their Character:
-----------------------------------

Sine:     Pure tone, fundamental only. Smooth, hollow, flute-like.
Sawtooth: All harmonics falling off as 1/n. Bright, buzzy, brassy.
Square:   Odd harmonics falling off as 1/n. Hollow, woody, clarinet-like.
Triangle: Odd harmonics falling off as 1/n². Soft, between sine and square.
Noise:    Random samples, no pitch. Hiss and breath for percussive layers.

Pad voices pick their two waveforms from the active theme's waveform list,
so the same pad sounds glassy in one theme and buzzy in the next.

Example usage:
  let osc = OscNode::sine();
  let osc = OscNode::new(OscillatorWaveform::Triangle).with_frequency(220.0);

  // Typical pad chain: two oscillators → filter → envelope
  let voice = OscNode::sawtooth().with_frequency(220.0)
      .sum(OscNode::sine().with_frequency(330.0))
      .through(FilterNode::lowpass(940.0))
      .amplify(EnvNode::ramp(0.1, 0.005, 0.2));
*/

pub struct OscNode {
    osc: OscillatorBlock,
    /// Fixed frequency (Hz). If Some, ignores ctx.frequency and uses this instead.
    base_frequency: Option<f32>,
    /// Current frequency after modulation (only used when base_frequency is Some)
    current_frequency: f32,
}

/// Parameters that can be modulated on an oscillator
#[derive(Clone, Copy, Debug)]
pub enum OscParam {
    /// Oscillator frequency in Hz
    Frequency,
}

impl OscNode {
    fn from_block(osc: OscillatorBlock) -> Self {
        Self {
            osc,
            base_frequency: None,
            current_frequency: 440.0,
        }
    }

    pub fn new(waveform: OscillatorWaveform) -> Self {
        Self::from_block(OscillatorBlock::new(waveform))
    }

    pub fn sine() -> Self {
        Self::from_block(OscillatorBlock::sine())
    }

    pub fn sawtooth() -> Self {
        Self::from_block(OscillatorBlock::sawtooth())
    }

    pub fn square() -> Self {
        Self::from_block(OscillatorBlock::square())
    }

    pub fn triangle() -> Self {
        Self::from_block(OscillatorBlock::triangle())
    }

    /// White noise fading linearly to silence over `seconds`.
    pub fn decaying_noise(seconds: f32, seed: u64) -> Self {
        Self::from_block(OscillatorBlock::decaying_noise(seconds, seed))
    }

    /// Set a fixed frequency, ignoring the pitch from RenderCtx.
    ///
    /// The frequency can then be modulated with `.modulate()`.
    pub fn with_frequency(mut self, freq: f32) -> Self {
        self.base_frequency = Some(freq);
        self.current_frequency = freq;
        self
    }
}

impl GraphNode for OscNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let frequency = if self.base_frequency.is_some() {
            self.current_frequency
        } else {
            ctx.frequency
        };

        let modified_ctx = RenderCtx { frequency, ..*ctx };
        self.osc.render(out, &modified_ctx);
    }

    fn note_on(&mut self, _ctx: &RenderCtx) {
        // Reset current_frequency to base on note-on (important for modulation)
        if let Some(base) = self.base_frequency {
            self.current_frequency = base;
        }
    }
}

impl Modulatable for OscNode {
    type Param = OscParam;

    fn get_param(&self, param: Self::Param) -> f32 {
        match param {
            OscParam::Frequency => self.base_frequency.unwrap_or(440.0),
        }
    }

    fn apply_modulation(&mut self, param: Self::Param, base: f32, modulation: f32) {
        match param {
            OscParam::Frequency => {
                // Clamp to audible range (20 Hz - 20 kHz)
                self.current_frequency = (base + modulation).clamp(20.0, 20_000.0);
            }
        }
    }
}
