/*
One-Shot Graph Nodes
====================

Every sound in the instrument is fire-and-forget: a pad hit or a mode chime
builds a small graph, the voice pool starts it once, and the graph decides for
itself when it has gone quiet.

Lifecycle:
----------
  build graph ──→ note_on ──→ render_block × N ──→ is_active() == false ──→ dropped

- `note_on` arms envelopes and resets oscillator phase at the trigger time.
- `note_off` only happens on `Silence`; nothing in a one-shot graph waits for it.
- `is_active` is composed through the graph, so a voice ends when its
  amplitude path (envelope or gate) has finished.

Render context:
---------------
`RenderCtx` carries the sample rate plus the pitch a voice was triggered with.
Nodes with a fixed frequency (`.with_frequency`) ignore the pitch.
*/

/// MIDI note number (fractional allowed) to Hz, A4 = 69 = 440 Hz.
#[inline]
pub fn midi_to_freq(midi: f32) -> f32 {
    440.0 * 2.0_f32.powf((midi - 69.0) / 12.0)
}

pub struct RenderCtx {
    pub sample_rate: f32,
    pub frequency: f32,
    pub velocity: f32,
}

impl RenderCtx {
    pub fn from_midi(sample_rate: f32, midi: f32, velocity: f32) -> Self {
        Self::from_freq(sample_rate, midi_to_freq(midi), velocity)
    }

    pub fn from_freq(sample_rate: f32, frequency: f32, velocity: f32) -> Self {
        Self {
            sample_rate,
            frequency,
            velocity,
        }
    }

    /// Seconds covered by `frames` samples at this rate.
    #[inline]
    pub fn seconds(&self, frames: usize) -> f32 {
        frames as f32 / self.sample_rate
    }
}

/// A node with named parameters that `Modulate` can move at block rate.
pub trait Modulatable: Send {
    type Param: Copy + Send;

    fn get_param(&self, param: Self::Param) -> f32;

    fn apply_modulation(&mut self, param: Self::Param, base: f32, modulation: f32);
}

pub trait GraphNode: Send {
    /// Fill `out` with the next block. Processors read `out` as their input.
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);

    fn note_on(&mut self, _ctx: &RenderCtx) {}

    fn note_off(&mut self, _ctx: &RenderCtx) {}

    /// False once the node can only produce silence.
    ///
    /// Sources without an envelope run forever; wrap them in `.amplify(env)`
    /// or `.gate(..)` to give them an end.
    fn is_active(&self) -> bool {
        true
    }
}

impl GraphNode for Box<dyn GraphNode> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        (**self).render_block(out, ctx)
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        (**self).note_on(ctx)
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        (**self).note_off(ctx)
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_reference_points() {
        assert!((midi_to_freq(69.0) - 440.0).abs() < 1e-3);
        assert!((midi_to_freq(57.0) - 220.0).abs() < 1e-3);
        // Lowest pad in the default theme
        assert!((midi_to_freq(46.0) - 116.54).abs() < 1e-2);
    }

    #[test]
    fn seconds_follow_sample_rate() {
        let ctx = RenderCtx::from_freq(16_000.0, 200.0, 1.0);
        assert_eq!(ctx.seconds(16_000), 1.0);
        assert_eq!(ctx.seconds(64), 0.004);
    }

    #[test]
    fn bare_sources_never_end() {
        struct Dc;
        impl GraphNode for Dc {
            fn render_block(&mut self, out: &mut [f32], _ctx: &RenderCtx) {
                out.fill(1.0);
            }
        }

        let mut boxed: Box<dyn GraphNode> = Box::new(Dc);
        let mut out = [0.0; 4];
        boxed.render_block(&mut out, &RenderCtx::from_midi(48_000.0, 60.0, 1.0));
        assert_eq!(out, [1.0; 4]);
        assert!(boxed.is_active());
    }
}
