use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::graph::node::GraphNode;

/// Control messages from the UI thread to the voice pool.
pub enum SynthMessage {
    /// Start a fully built one-shot voice right away.
    Play(Box<dyn GraphNode>),
    /// Cut every sounding voice.
    Silence,
}

impl std::fmt::Debug for SynthMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SynthMessage::Play(_) => f.write_str("Play(..)"),
            SynthMessage::Silence => f.write_str("Silence"),
        }
    }
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<SynthMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        Consumer::pop(self).ok()
    }
}

/// Offline rendering and tests feed the pool from a plain queue.
impl MessageReceiver for VecDeque<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        self.pop_front()
    }
}
