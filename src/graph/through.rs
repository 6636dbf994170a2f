use crate::graph::node::{GraphNode, RenderCtx};

/*
Serial Chain (Through)
======================

Renders the source into `out`, then lets the processor rewrite `out` in
place. Every pad voice has exactly one of these: the summed oscillator pair
feeds the theme's filter before the envelope shapes it.

  [OscNode + OscNode] ──→ [FilterNode] ──→ (× EnvNode) ──→ voice

  let body = OscNode::sawtooth().with_frequency(233.0)
      .sum(OscNode::sine().with_frequency(349.5))
      .through(FilterNode::lowpass(940.0).with_q(2.2));

The noise layer uses the same shape with a band-pass:

  let breath = OscNode::decaying_noise(0.45, seed)
      .through(FilterNode::bandpass(865.0).with_q(4.2));

Processors keep no voice alive on their own, so the chain's lifetime comes
from the source.
*/

pub struct Through<S, P> {
    source: S,
    processor: P,
}

impl<S, P> Through<S, P> {
    pub fn new(source: S, processor: P) -> Self {
        Self { source, processor }
    }
}

impl<S: GraphNode, P: GraphNode> GraphNode for Through<S, P> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source.render_block(out, ctx);
        self.processor.render_block(out, ctx);
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.source.note_on(ctx);
        self.processor.note_on(ctx);
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        self.source.note_off(ctx);
        self.processor.note_off(ctx);
    }

    fn is_active(&self) -> bool {
        self.source.is_active()
    }
}
