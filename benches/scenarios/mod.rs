//! Real-world scenario benchmarks.
//!
//! These benchmarks model what the instrument actually does: pad voices
//! through the master bus, and a frame full of effects.

mod effects;
mod voices;

pub use effects::bench_effects;
pub use voices::bench_voices;
