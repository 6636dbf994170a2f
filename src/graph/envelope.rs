use crate::{
    dsp::envelope::{Envelope, EnvelopeState},
    graph::node::{GraphNode, RenderCtx},
};

/// Graph wrapper around the one-shot [`Envelope`].
///
/// Renders the envelope level into the buffer so it can gate a signal via
/// `.amplify()`.
pub struct EnvNode {
    env: Envelope,
}

impl EnvNode {
    pub fn ramp(peak: f32, attack_end: f32, release_end: f32) -> Self {
        Self {
            env: Envelope::ramp(peak, attack_end, release_end),
        }
    }

    pub fn state(&self) -> EnvelopeState {
        self.env.state()
    }
}

impl GraphNode for EnvNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.env.render(out, ctx);
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.env.note_on(ctx);
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        self.env.note_off(ctx);
    }

    fn is_active(&self) -> bool {
        self.env.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_until_triggered() {
        let env = EnvNode::ramp(0.1, 0.01, 0.2);
        assert!(!env.is_active());
        assert_eq!(env.state(), EnvelopeState::Idle);
    }

    #[test]
    fn finishes_after_release_end() {
        let ctx = RenderCtx::from_freq(1_000.0, 440.0, 1.0);
        let mut env = EnvNode::ramp(0.1, 0.01, 0.2);
        env.note_on(&ctx);
        assert!(env.is_active());

        let mut buffer = vec![0.0; 250];
        env.render_block(&mut buffer, &ctx);

        assert!(!env.is_active());
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x));
        assert!((peak - 0.1).abs() < 1e-3, "peak was {peak}");
    }
}
