use crate::{
    graph::node::{GraphNode, RenderCtx},
    MAX_BLOCK_SIZE,
};

/*
Amplitude Control (Amplify)
===========================

Multiplies a signal by a modulator sample-by-sample. With an envelope as the
modulator this is a VCA: the envelope level becomes the signal's gain.

  [Signal] ──┬──→ (×) ──→ output
  [Env]    ──┘

A product is silent as soon as either side is, so the node stays active
only while both inputs are.
*/

pub struct Amplify<N, M> {
    pub signal: N,
    pub modulator: M,
    temp_buffer: Vec<f32>,
}

impl<N, M> Amplify<N, M> {
    pub fn new(signal: N, modulator: M) -> Self {
        Self {
            signal,
            modulator,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }
}

impl<N: GraphNode, M: GraphNode> GraphNode for Amplify<N, M> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        // Scratch holds MAX_BLOCK_SIZE samples; longer blocks go slice by slice
        for chunk in out.chunks_mut(MAX_BLOCK_SIZE) {
            self.signal.render_block(chunk, ctx);

            let gain = &mut self.temp_buffer[..chunk.len()];
            gain.fill(0.0);
            self.modulator.render_block(gain, ctx);

            for (o, m) in chunk.iter_mut().zip(gain.iter()) {
                *o *= *m;
            }
        }
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.signal.note_on(ctx);
        self.modulator.note_on(ctx);
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        self.signal.note_off(ctx);
        self.modulator.note_off(ctx);
    }

    fn is_active(&self) -> bool {
        self.signal.is_active() && self.modulator.is_active()
    }
}
