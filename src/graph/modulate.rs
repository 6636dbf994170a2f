use crate::{
    dsp::modulate::block_average,
    graph::node::{GraphNode, Modulatable, RenderCtx},
    MAX_BLOCK_SIZE,
};

/*
Modulate Node
=============

Drives one named parameter of a node from another signal, once per block.
Pad voices use it for vibrato on their primary oscillator:

  let lead = OscNode::new(shape.primary).with_frequency(freq)
      .modulate(LfoNode::sine(shape.vibrato_rate), OscParam::Frequency, shape.vibrato_depth);

Per block:
  1. render the modulator into scratch
  2. average it (see `dsp/modulate.rs`)
  3. target.param = base + average × depth
  4. render the target

The base value is read back through `Modulatable::get_param`, so the
parameter never drifts: each block starts from the value the node was built
with. Clamping to a usable range is the target's job (cutoff stays under
Nyquist, Q inside the filter's limits, frequency above zero).
*/

pub struct Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    target: S,
    modulator: L,
    param: S::Param,
    depth: f32,
    scratch: Vec<f32>,
}

impl<S, L> Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    pub fn new(target: S, modulator: L, param: S::Param, depth: f32) -> Self {
        Self {
            target,
            modulator,
            param,
            depth,
            scratch: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

impl<S, L> GraphNode for Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        // Blocks longer than scratch are modulated in MAX_BLOCK_SIZE slices
        for chunk in out.chunks_mut(MAX_BLOCK_SIZE) {
            let scratch = &mut self.scratch[..chunk.len()];
            self.modulator.render_block(scratch, ctx);

            let base = self.target.get_param(self.param);
            self.target
                .apply_modulation(self.param, base, block_average(scratch) * self.depth);
            self.target.render_block(chunk, ctx);
        }
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.target.note_on(ctx);
        self.modulator.note_on(ctx);
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        self.target.note_off(ctx);
        self.modulator.note_off(ctx);
    }

    fn is_active(&self) -> bool {
        self.target.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{
        envelope::EnvNode,
        extensions::NodeExt,
        filter::{FilterNode, FilterParam},
        lfo::LfoNode,
        oscillator::{OscNode, OscParam},
    };

    fn ctx() -> RenderCtx {
        RenderCtx::from_freq(16_000.0, 233.0, 1.0)
    }

    #[test]
    fn vibrato_bends_the_primary_oscillator() {
        let mut plain = OscNode::triangle().with_frequency(233.0);
        let mut vibrato = OscNode::triangle()
            .with_frequency(233.0)
            .modulate(LfoNode::sine(5.2), OscParam::Frequency, 40.0);

        let mut a = vec![0.0; 1024];
        let mut b = vec![0.0; 1024];
        for (x, y) in a.chunks_mut(64).zip(b.chunks_mut(64)) {
            plain.render_block(x, &ctx());
            vibrato.render_block(y, &ctx());
        }

        assert!(a.iter().zip(&b).any(|(x, y)| (x - y).abs() > 1e-3));
    }

    #[test]
    fn extreme_depths_stay_finite() {
        let mut cutoff = OscNode::sawtooth()
            .through(FilterNode::lowpass(940.0).modulate(
                LfoNode::sine(1.0),
                FilterParam::Cutoff,
                100_000.0,
            ));
        let mut q = OscNode::sawtooth()
            .through(FilterNode::bandpass(865.0).modulate(LfoNode::sine(3.0), FilterParam::Q, 60.0));

        let mut buffer = vec![0.0; 2048];
        cutoff.render_block(&mut buffer, &ctx());
        assert!(buffer.iter().all(|s| s.is_finite()));
        q.render_block(&mut buffer, &ctx());
        assert!(buffer.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn oversized_blocks_are_chunked() {
        let mut node = OscNode::sine()
            .with_frequency(233.0)
            .modulate(LfoNode::sine(4.0), OscParam::Frequency, 5.0);
        let mut buffer = vec![0.0; MAX_BLOCK_SIZE * 2 + 7];
        node.render_block(&mut buffer, &ctx());
        assert!(buffer[MAX_BLOCK_SIZE..].iter().any(|&s| s.abs() > 0.1));
    }

    #[test]
    fn lifetime_follows_the_target() {
        let filter = FilterNode::lowpass(940.0)
            .modulate(LfoNode::sine(5.0), FilterParam::Cutoff, 300.0);
        assert!(!filter.is_active(), "processors never hold a voice open");

        let mut voice = OscNode::sine()
            .modulate(LfoNode::sine(5.0), OscParam::Frequency, 3.0)
            .amplify(EnvNode::ramp(0.2, 0.005, 0.05));
        assert!(!voice.is_active());
        voice.note_on(&ctx());
        assert!(voice.is_active());
    }
}
