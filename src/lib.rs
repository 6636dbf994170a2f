pub mod dsp;
pub mod engine; // Lazily started audio engine and its backends
pub mod fx; // Effect scheduler and shape renderers
pub mod graph; // Composable audio graph nodes
pub mod grid;
pub mod session;
pub mod synth; // One-shot voices and the voice pool
pub mod theme;
pub mod voices;

#[cfg(feature = "serde")]
pub mod config;

pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;

/// Floor used by exponential ramps: they can never start or land on zero.
pub const RAMP_FLOOR: f32 = 0.0001;
