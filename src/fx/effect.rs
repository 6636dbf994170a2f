use std::ops::{Add, Mul};

/// The eight animated shape families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Ring,
    Polygon,
    Rays,
    Squares,
    Spiral,
    Orbit,
    Burst,
    Arcs,
}

/// Kinds in the order pad effects cycle through them.
pub const VISUAL_KINDS: [EffectKind; 8] = [
    EffectKind::Ring,
    EffectKind::Polygon,
    EffectKind::Rays,
    EffectKind::Squares,
    EffectKind::Spiral,
    EffectKind::Orbit,
    EffectKind::Burst,
    EffectKind::Arcs,
];

impl EffectKind {
    pub fn name(self) -> &'static str {
        match self {
            EffectKind::Ring => "ring",
            EffectKind::Polygon => "polygon",
            EffectKind::Rays => "rays",
            EffectKind::Squares => "squares",
            EffectKind::Spiral => "spiral",
            EffectKind::Orbit => "orbit",
            EffectKind::Burst => "burst",
            EffectKind::Arcs => "arcs",
        }
    }

    /// Look a kind up by name; unknown names draw as a ring.
    pub fn from_name(name: &str) -> Self {
        VISUAL_KINDS
            .into_iter()
            .find(|kind| kind.name() == name)
            .unwrap_or(EffectKind::Ring)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `radius` along `angle` (radians, screen orientation).
    pub fn polar(angle: f32, radius: f32) -> Self {
        Self::new(angle.cos() * radius, angle.sin() * radius)
    }

    pub fn rotate(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// One animated shape, fixed at spawn time.
///
/// Progress is never stored: it is recomputed from the frame timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    pub kind: EffectKind,
    pub anchor: Vec2,
    /// Pad index the effect came from; drives per-shape counts.
    pub index: usize,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub size: f32,
    pub rotation: f32,
    pub drift: Vec2,
    pub color_a: &'static str,
    pub color_b: &'static str,
}

/// Where an effect stands at a given frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Scheduled start is still in the future.
    Pending,
    /// Running; linear progress in [0, 1).
    Running(f32),
    Finished,
}

impl Effect {
    pub fn phase(&self, timestamp_ms: f64) -> Phase {
        let elapsed = timestamp_ms - self.start_ms;
        if elapsed < 0.0 {
            return Phase::Pending;
        }
        let progress = elapsed / self.duration_ms;
        if progress >= 1.0 {
            Phase::Finished
        } else {
            Phase::Running(progress as f32)
        }
    }

    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }
}
