use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    engine::{backend::AudioBackend, error::EngineError},
    synth::message::SynthMessage,
    theme::Theme,
    voices::{mode_switch_chime, pad_voice},
};

/*
Lazily Started Audio Engine
===========================

Opening an audio device is slow and may fail. The synthesizer therefore
starts in `Uninitialised` and only calls its backend factory on the first
trigger:

  ┌───────────────┐ first trigger ┌───────┐
  │ Uninitialised │ ────────────→ │ Ready │
  └───────────────┘       │       └───────┘
                          │ factory fails
                          ▼
                   ┌─────────────┐
                   │ Unsupported │  (permanent: visuals only)
                   └─────────────┘

Nothing here ever reaches the caller as an error. A failed start is logged
once; failed resumes and a full voice queue are logged at debug level and
the sound is simply dropped.
*/

enum EngineState<B> {
    Uninitialised,
    Ready(B),
    Unsupported,
}

pub struct Synthesizer<B, F>
where
    B: AudioBackend,
    F: FnMut() -> Result<B, EngineError>,
{
    state: EngineState<B>,
    factory: F,
    noise_rng: SmallRng,
}

impl<B, F> Synthesizer<B, F>
where
    B: AudioBackend,
    F: FnMut() -> Result<B, EngineError>,
{
    pub fn new(factory: F) -> Self {
        Self::with_rng(factory, SmallRng::from_os_rng())
    }

    /// Same as `new` with reproducible noise layers.
    pub fn with_seed(factory: F, seed: u64) -> Self {
        Self::with_rng(factory, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(factory: F, noise_rng: SmallRng) -> Self {
        Self {
            state: EngineState::Uninitialised,
            factory,
            noise_rng,
        }
    }

    /// Start the backend if this is the first use. `None` once unsupported.
    fn ensure(&mut self) -> Option<&mut B> {
        if matches!(self.state, EngineState::Uninitialised) {
            self.state = match (self.factory)() {
                Ok(backend) => {
                    log::info!("Audio engine ready at {} Hz", backend.sample_rate());
                    EngineState::Ready(backend)
                }
                Err(EngineError::Disabled) => {
                    log::info!("Audio output disabled, running visuals only");
                    EngineState::Unsupported
                }
                Err(err) => {
                    log::warn!("Audio engine unavailable, running visuals only: {}", err);
                    EngineState::Unsupported
                }
            };
        }

        match &mut self.state {
            EngineState::Ready(backend) => Some(backend),
            _ => None,
        }
    }

    /// Start the engine if needed and ask a suspended output to continue.
    pub fn resume(&mut self) {
        if let Some(backend) = self.ensure() {
            if let Err(err) = backend.resume() {
                log::debug!("Audio resume failed: {}", err);
            }
        }
    }

    pub fn play_pad_voice(&mut self, index: usize, theme: &Theme) {
        let seed = self.noise_rng.random::<u64>();
        self.submit(|| SynthMessage::Play(pad_voice(index, &theme.audio, seed)));
    }

    pub fn play_mode_switch_voice(&mut self, theme_index: usize) {
        self.submit(|| SynthMessage::Play(mode_switch_chime(theme_index)));
    }

    /// Cut every sounding voice.
    pub fn silence(&mut self) {
        if let EngineState::Ready(backend) = &mut self.state {
            if let Err(err) = backend.submit(SynthMessage::Silence) {
                log::debug!("Dropped silence request: {}", err);
            }
        }
    }

    fn submit(&mut self, build: impl FnOnce() -> SynthMessage) {
        let Some(backend) = self.ensure() else {
            return;
        };
        if let Err(err) = backend.submit(build()) {
            log::debug!("Dropped voice: {}", err);
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, EngineState::Ready(_))
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self.state, EngineState::Unsupported)
    }

    pub fn backend_mut(&mut self) -> Option<&mut B> {
        match &mut self.state {
            EngineState::Ready(backend) => Some(backend),
            _ => None,
        }
    }
}
