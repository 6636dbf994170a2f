use crate::{
    graph::node::{GraphNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

/*
Parallel Fan-In (Mix)
=====================

Two sources rendered side by side and added at unit gain, the same as
patching two sources into one input on a mixing desk. It is the additive
counterpart to Amplify (which multiplies).

  [Source A] ──┬──→ (+) ──→ output
  [Source B] ──┘

Pad voices sum their two oscillators this way, so the pair is twice as loud
as either alone before the filter and envelope scale it down. The chime sums
its four gated notes the same way.

  let pair = OscNode::sawtooth().with_frequency(233.0)
      .sum(OscNode::sine().with_frequency(349.5));

Both sources receive note_on/note_off. Apply the envelope AFTER summing if it
should shape both:

  osc1.sum(osc2).amplify(env)  // ✓ Envelope gates both
  osc1.amplify(env).sum(osc2)  // ✗ Only osc1 is gated, osc2 drones

The sum keeps sounding while either side does.
*/

pub struct Mix<A, B> {
    pub source_a: A,
    pub source_b: B,
    scratch: Vec<f32>,
}

impl<A, B> Mix<A, B> {
    pub fn sum(source_a: A, source_b: B) -> Self {
        Self {
            source_a,
            source_b,
            scratch: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

impl<S: GraphNode, M: GraphNode> GraphNode for Mix<S, M> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        for chunk in out.chunks_mut(MAX_BLOCK_SIZE) {
            self.source_a.render_block(chunk, ctx);

            let other = &mut self.scratch[..chunk.len()];
            other.fill(0.0);
            self.source_b.render_block(other, ctx);

            for (o, b) in chunk.iter_mut().zip(other.iter()) {
                *o += *b;
            }
        }
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.source_a.note_on(ctx);
        self.source_b.note_on(ctx);
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        self.source_a.note_off(ctx);
        self.source_b.note_off(ctx);
    }

    fn is_active(&self) -> bool {
        self.source_a.is_active() || self.source_b.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{envelope::EnvNode, extensions::NodeExt, oscillator::OscNode};

    fn ctx() -> RenderCtx {
        RenderCtx::from_freq(48000.0, 440.0, 1.0)
    }

    #[test]
    fn test_sum_doubles_identical_sources() {
        let mut single = OscNode::sine();
        let mut summed = OscNode::sine().sum(OscNode::sine());

        let mut a = vec![0.0; 256];
        let mut b = vec![0.0; 256];
        single.render_block(&mut a, &ctx());
        summed.render_block(&mut b, &ctx());

        for (i, (&s, &d)) in a.iter().zip(&b).enumerate() {
            assert!(
                (d - 2.0 * s).abs() < 1e-5,
                "sample {i}: expected {}, got {d}",
                2.0 * s
            );
        }
    }

    #[test]
    fn test_sum_stays_active_while_either_side_sounds() {
        let short = OscNode::sine().amplify(EnvNode::ramp(0.1, 0.001, 0.002));
        let long = OscNode::sawtooth().amplify(EnvNode::ramp(0.1, 0.01, 0.2));
        let mut mixed = short.sum(long);
        assert!(!mixed.is_active(), "nothing sounds before note_on");

        mixed.note_on(&ctx());
        let mut buffer = vec![0.0; 480];
        mixed.render_block(&mut buffer, &ctx());
        assert!(!mixed.source_a.is_active());
        assert!(mixed.is_active(), "the longer source keeps the sum alive");
    }

    #[test]
    fn test_sum_over_several_scratch_lengths() {
        let mut single = OscNode::triangle().with_frequency(659.3);
        let mut summed = OscNode::triangle()
            .with_frequency(659.3)
            .sum(OscNode::triangle().with_frequency(659.3));

        let len = MAX_BLOCK_SIZE * 3 + 5;
        let mut a = vec![0.0; len];
        let mut b = vec![0.0; len];
        single.render_block(&mut a, &ctx());
        summed.render_block(&mut b, &ctx());

        for (i, (&s, &d)) in a.iter().zip(&b).enumerate() {
            assert!((d - 2.0 * s).abs() < 1e-5, "sample {i}");
        }
    }

    #[test]
    fn test_sum_multiple_block_sizes() {
        for &size in &[64, 128, 256, 512, 1024] {
            let mut mixed = OscNode::sine().sum(OscNode::sawtooth());

            let mut buffer = vec![0.0; size];
            mixed.render_block(&mut buffer, &ctx());

            assert!(
                buffer.iter().all(|&s| s.is_finite() && s.abs() <= 2.0),
                "bad output for block size {}",
                size
            );
        }
    }
}
