use crate::graph::node::{GraphNode, RenderCtx};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Free,    // Available for allocation
    Playing, // Graph is sounding; freed once it reports inactive
}

/// A slot in the voice pool holding one fire-and-forget graph.
///
/// One-shot graphs carry their own pitch and schedule, so the voice never
/// sends note_off: it simply renders until the graph goes quiet.
pub struct Voice<T: GraphNode = Box<dyn GraphNode>> {
    state: VoiceState,
    age: u64,
    sample_rate: f32,
    graph: Option<T>,
}

impl<T: GraphNode> Voice<T> {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            state: VoiceState::Free,
            age: 0,
            sample_rate,
            graph: None,
        }
    }

    fn ctx(&self) -> RenderCtx {
        // Pad graphs use fixed frequencies; the context pitch is unused.
        RenderCtx::from_freq(self.sample_rate, 440.0, 1.0)
    }

    pub fn start(&mut self, mut graph: T, age: u64) {
        graph.note_on(&self.ctx());
        self.graph = Some(graph);
        self.state = VoiceState::Playing;
        self.age = age;
    }

    /// Render into `out`, overwriting it. Silent when free.
    pub fn render(&mut self, out: &mut [f32]) {
        let ctx = self.ctx();
        let Some(graph) = self.graph.as_mut() else {
            out.fill(0.0);
            return;
        };

        graph.render_block(out, &ctx);

        if !graph.is_active() {
            self.free();
        }
    }

    pub fn is_free(&self) -> bool {
        self.state == VoiceState::Free
    }

    pub fn is_active(&self) -> bool {
        self.state == VoiceState::Playing
    }

    pub fn free(&mut self) {
        self.state = VoiceState::Free;
        self.graph = None;
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }
}
