use std::collections::VecDeque;

use crate::{
    engine::{backend::AudioBackend, error::EngineError},
    synth::{
        message::SynthMessage,
        poly::{BusSettings, VoicePool},
    },
    MAX_BLOCK_SIZE,
};

/// Renders the voice pool on demand instead of on a device callback.
pub struct OfflineBackend {
    pool: VoicePool<VecDeque<SynthMessage>>,
    sample_rate: f32,
    submitted: usize,
    resumes: usize,
}

impl OfflineBackend {
    pub fn new(sample_rate: f32, settings: BusSettings) -> Self {
        Self {
            pool: VoicePool::new(sample_rate, settings, VecDeque::new()),
            sample_rate,
            submitted: 0,
            resumes: 0,
        }
    }

    /// Render the next `frames` samples of the master output.
    pub fn render(&mut self, frames: usize) -> Vec<f32> {
        let mut out = vec![0.0; frames];
        self.render_into(&mut out);
        out
    }

    pub fn render_into(&mut self, out: &mut [f32]) {
        for block in out.chunks_mut(MAX_BLOCK_SIZE) {
            self.pool.render_block(block);
        }
    }

    pub fn active_voices(&self) -> usize {
        self.pool.active_voices()
    }

    /// Messages accepted so far.
    pub fn submitted(&self) -> usize {
        self.submitted
    }

    /// Resume requests received so far.
    pub fn resumes(&self) -> usize {
        self.resumes
    }

    pub fn pool(&self) -> &VoicePool<VecDeque<SynthMessage>> {
        &self.pool
    }
}

impl AudioBackend for OfflineBackend {
    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn submit(&mut self, msg: SynthMessage) -> Result<(), EngineError> {
        self.pool.receiver_mut().push_back(msg);
        self.submitted += 1;
        Ok(())
    }

    fn resume(&mut self) -> Result<(), EngineError> {
        self.resumes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{theme::theme_at, voices::pad_voice};

    #[test]
    fn renders_submitted_voice() {
        let mut backend = OfflineBackend::new(16_000.0, BusSettings::default());
        let silent = backend.render(256);
        assert!(silent.iter().all(|&s| s == 0.0));

        backend
            .submit(SynthMessage::Play(pad_voice(1, &theme_at(0).audio, 1)))
            .expect("offline submit never fails");
        let out = backend.render(4_096);

        assert_eq!(backend.submitted(), 1);
        assert!(out.iter().any(|&s| s.abs() > 1e-3));
        assert!(out.iter().all(|s| s.is_finite()));
    }
}
