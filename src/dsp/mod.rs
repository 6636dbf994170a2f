//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! embed directly inside voice structs. They stay focused on the
//! signal-processing math so graph combinators can layer on orchestration and
//! modulation.

/// Feed-forward compressor for the master bus.
pub mod compressor;
/// One-shot exponential attack/release envelope.
pub mod envelope;
/// State-variable filter implementation with multiple responses.
pub mod filter;
/// Block-rate parameter modulation helpers.
pub mod modulate;
/// Oscillator waveforms and noise sources.
pub mod oscillator;

pub use envelope::EnvelopeState;
