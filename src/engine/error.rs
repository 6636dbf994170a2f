//! Audio engine error types.

use thiserror::Error;

/// Errors that can occur while starting or feeding the audio engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Audio output was switched off by configuration.
    #[error("audio output disabled")]
    Disabled,

    /// The host has no default output device.
    #[error("no audio output device available")]
    NoDevice,

    /// Failed to query the device's default output format.
    #[error("failed to query output config: {0}")]
    DefaultConfig(#[from] cpal::DefaultStreamConfigError),

    /// Failed to build the output stream.
    #[error("failed to build output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    /// Failed to start or resume the output stream.
    #[error("failed to start output stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),

    /// The control queue to the audio thread is full.
    #[error("voice queue is full")]
    QueueFull,
}
