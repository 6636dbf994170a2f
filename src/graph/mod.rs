//! Composable building blocks for constructing audio-processing graphs.
//!
//! Graph nodes wrap the low-level DSP primitives with ergonomics needed for
//! instrument design: note events, modulation, and block-based rendering. The
//! `extensions` module adds fluent helpers so voices can be authored with a
//! clear, chainable API.

/// Multiply two signals together (amplitude control).
pub mod amplify;
/// One-shot envelope node.
pub mod envelope;
/// Fluent combinators (`.amplify()`, `.sum()`, etc.).
pub mod extensions;
/// Topology-preserving filter node with multiple responses.
pub mod filter;
/// Scheduled start/stop window around a node.
pub mod gate;
/// Low frequency oscillators for parameter modulation.
pub mod lfo;
/// Summing and crossfading of parallel graphs.
pub mod mix;
/// Connect modulation sources to node parameters.
pub mod modulate;
/// Core traits shared by all graph nodes.
pub mod node;
/// Audio-band oscillators and noise sources.
pub mod oscillator;
/// Serial chaining of two nodes (source → effect).
pub mod through;

pub use extensions::NodeExt;
pub use node::{GraphNode, Modulatable, RenderCtx};
