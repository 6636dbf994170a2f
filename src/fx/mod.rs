//! Time-driven visual effects: spawned by triggers, advanced per frame,
//! rendered as backend-neutral draw commands.

/// Hex colors with alpha and the parse cache.
pub mod color;
/// Drawing primitives handed to the front end.
pub mod draw;
/// Easing curves.
pub mod easing;
/// Effect records and shape kinds.
pub mod effect;
/// Spawning, advancing and retiring effects.
pub mod scheduler;
/// One renderer per shape kind.
pub mod shapes;

pub use color::{ColorCache, Rgb, Rgba};
pub use draw::{DrawCommand, Stroke};
pub use effect::{Effect, EffectKind, Vec2};
pub use scheduler::EffectScheduler;
