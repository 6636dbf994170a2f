//! Audio engine: a lazily started synthesizer and the backends it can feed.

pub mod backend;
#[cfg(feature = "rtrb")]
pub mod device;
pub mod error;
pub mod offline;
pub mod synth;

pub use backend::AudioBackend;
#[cfg(feature = "rtrb")]
pub use device::CpalBackend;
pub use error::EngineError;
pub use offline::OfflineBackend;
pub use synth::Synthesizer;
