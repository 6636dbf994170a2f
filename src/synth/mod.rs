// Purpose: Voice management and the master bus
// This layer sits above graph nodes and mixes one-shot voices

pub mod message;
pub mod poly;
pub mod voice;

pub use message::{MessageReceiver, SynthMessage};
pub use poly::{BusSettings, VoicePool};
