use crate::graph::{
    amplify::Amplify,
    gate::Gate,
    mix::Mix,
    modulate::Modulate,
    node::{GraphNode, Modulatable},
    through::Through,
};

/// Chainable constructors so voice designs read left to right as signal flow.
pub trait NodeExt: GraphNode + Sized {
    /// Multiply by `modulator`, usually an `EnvNode`.
    fn amplify<M>(self, modulator: M) -> Amplify<Self, M> {
        Amplify::new(self, modulator)
    }

    fn through<P: GraphNode>(self, processor: P) -> Through<Self, P> {
        Through::new(self, processor)
    }

    fn modulate<M: GraphNode>(self, modulator: M, param: Self::Param, depth: f32) -> Modulate<Self, M>
    where
        Self: Modulatable,
    {
        Modulate::new(self, modulator, param, depth)
    }

    /// Unit-gain sum of both sources.
    fn sum<M: GraphNode>(self, source: M) -> Mix<Self, M> {
        Mix::sum(self, source)
    }

    /// Render only between `start` and `stop` seconds after note_on.
    fn gate(self, start: f32, stop: f32) -> Gate<Self> {
        Gate::new(self, start, stop)
    }
}

impl<T: GraphNode> NodeExt for T {}
