use crate::{engine::error::EngineError, synth::message::SynthMessage};

/// Where finished voice graphs go to be heard.
///
/// Implemented by the live device backend and by the offline renderer used
/// in tests and benches.
pub trait AudioBackend {
    fn sample_rate(&self) -> f32;

    /// Queue a message for the voice pool.
    fn submit(&mut self, msg: SynthMessage) -> Result<(), EngineError>;

    /// Ask a suspended output to continue. Default: nothing to resume.
    fn resume(&mut self) -> Result<(), EngineError> {
        Ok(())
    }
}
