use crate::{
    dsp::oscillator::{OscillatorBlock, OscillatorWaveform},
    graph::node::{GraphNode, RenderCtx},
};

/*
LFO (Low Frequency Oscillator)
==============================

An LFO is an oscillator that runs at sub-audio frequencies (roughly
0.01-20 Hz) to move parameters over time. It uses the same waveform math as
an audio oscillator but ignores the note pitch and runs at its own rate.

Vibrato is the classic use: a sine LFO in the 2-7 Hz "sweet spot" nudging an
oscillator's frequency up and down by a few Hz.

  let vibrato = LfoNode::sine(5.2);
  let voice = OscNode::square()
      .with_frequency(220.0)
      .modulate(vibrato, OscParam::Frequency, 4.6);
  // Frequency swings 215.4 Hz - 224.6 Hz five times a second

Output is bipolar (-1.0 to +1.0), so the parameter moves both above and
below its base value.
*/

pub struct LfoNode {
    osc: OscillatorBlock,
    frequency: f32, // Fixed frequency in Hz (ignores note context)
}

impl LfoNode {
    fn new(waveform: OscillatorWaveform, frequency: f32) -> Self {
        Self {
            osc: OscillatorBlock::new(waveform),
            frequency,
        }
    }

    pub fn sine(frequency: f32) -> Self {
        Self::new(OscillatorWaveform::Sine, frequency)
    }
}

impl GraphNode for LfoNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        // Oscillate at the LFO's own rate, independent of the voice pitch
        let lfo_ctx = RenderCtx::from_freq(ctx.sample_rate, self.frequency, 1.0);
        self.osc.render(out, &lfo_ctx);
    }

    fn note_on(&mut self, _ctx: &RenderCtx) {
        // Synced LFO: every trigger starts the sweep from the same phase
        self.osc.reset();
    }
}
