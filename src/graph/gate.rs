use crate::graph::node::{GraphNode, RenderCtx};

/*
Scheduled Start/Stop (Gate)
===========================

A one-shot voice is scheduled up front: it starts some time after the
trigger and is cut off at a fixed stop time, whether or not its envelope
has fully decayed. Gate wraps a node with that schedule.

  time ──────────────────────────────────────────────→
        │← start →│████████ inner renders ████████│ silence
        0       start                            stop

- Before `start` the output is silent and the inner node is untouched.
- At `start` the inner node receives note_on, so its envelope times count
  from the start, not from the trigger.
- From `stop` on the output is silent and the gate reports inactive.

Both boundaries are sample-accurate: a block straddling a boundary is split
and only the part inside the window is rendered.

Example usage:
  // Chime note 3 of 4: starts 90 ms after the trigger, gone at 90 + 230 ms
  let note = OscNode::triangle().with_frequency(1046.5)
      .amplify(EnvNode::ramp(0.11, 0.015, 0.22))
      .gate(0.09, 0.32);
*/

pub struct Gate<N> {
    inner: N,
    start: f32, // seconds after note_on
    stop: f32,  // seconds after note_on
    sample_rate: f32,
    elapsed: u64,
    triggered: bool,
    started: bool,
}

impl<N> Gate<N> {
    pub fn new(inner: N, start: f32, stop: f32) -> Self {
        let start = start.max(0.0);
        Self {
            inner,
            start,
            stop: stop.max(start),
            sample_rate: 0.0,
            elapsed: 0,
            triggered: false,
            started: false,
        }
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn stop(&self) -> f32 {
        self.stop
    }

    fn boundary(&self, seconds: f32, sample_rate: f32) -> u64 {
        (seconds * sample_rate).round() as u64
    }
}

impl<N: GraphNode> GraphNode for Gate<N> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        out.fill(0.0);
        if !self.triggered {
            return;
        }
        self.sample_rate = ctx.sample_rate;

        let block_start = self.elapsed;
        let block_end = block_start + out.len() as u64;
        self.elapsed = block_end;

        let start = self.boundary(self.start, ctx.sample_rate);
        let stop = self.boundary(self.stop, ctx.sample_rate);
        let from = start.max(block_start);
        let to = stop.min(block_end);
        if from >= to {
            return;
        }

        if !self.started {
            self.inner.note_on(ctx);
            self.started = true;
        }

        let window = &mut out[(from - block_start) as usize..(to - block_start) as usize];
        self.inner.render_block(window, ctx);
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.sample_rate = ctx.sample_rate;
        self.elapsed = 0;
        self.triggered = true;
        self.started = false;
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        if self.started {
            self.inner.note_off(ctx);
        }
    }

    fn is_active(&self) -> bool {
        if !self.triggered {
            return false;
        }
        if self.elapsed >= self.boundary(self.stop, self.sample_rate) {
            return false;
        }
        !self.started || self.inner.is_active()
    }
}
