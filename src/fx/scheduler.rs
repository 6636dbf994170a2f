use std::f32::consts::{PI, TAU};

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    fx::{
        color::ColorCache,
        draw::DrawCommand,
        effect::{Effect, EffectKind, Phase, Vec2, VISUAL_KINDS},
        shapes::render_effect,
    },
    theme::Theme,
};

/*
Effect Scheduler
================

Owns every live effect. Triggers append; the frame driver calls `advance`
with its own clock and gets the frame's draw commands back.

  spawn_pad_effect ──┐
                     ├──→ [effects, oldest first] ──advance(ts)──→ draw commands
  spawn_burst ───────┘         │
                               └── removed once ts >= start + duration

Per frame, each effect lands in one of three buckets:

  ts <  start                 pending: kept, not drawn
  start <= ts < start + dur   running: drawn at progress (ts - start) / dur
  ts >= start + dur           finished: removed, never drawn again

Timestamps are milliseconds on whatever monotonic clock the driver uses.
The collection is capped; every insert past the cap drops the oldest
effect first.
*/

pub const DEFAULT_CAPACITY: usize = 220;
/// Duration of every effect when reduced motion is requested.
pub const REDUCED_MOTION_MS: f64 = 260.0;
pub const BURST_COUNT: usize = 12;

pub struct EffectScheduler {
    effects: Vec<Effect>,
    capacity: usize,
    reduced_motion: bool,
    colors: ColorCache,
    rng: SmallRng,
    evicted: usize,
}

impl EffectScheduler {
    pub fn new(reduced_motion: bool) -> Self {
        Self::with_rng(reduced_motion, SmallRng::from_os_rng())
    }

    /// Same as `new` with reproducible rotation and drift draws.
    pub fn with_seed(reduced_motion: bool, seed: u64) -> Self {
        Self::with_rng(reduced_motion, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(reduced_motion: bool, rng: SmallRng) -> Self {
        Self {
            effects: Vec::with_capacity(DEFAULT_CAPACITY + 1),
            capacity: DEFAULT_CAPACITY,
            reduced_motion,
            colors: ColorCache::new(),
            rng,
            evicted: 0,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Queue the effect for pad `index`, colored by `theme` as it is now.
    ///
    /// Every index-derived value is reduced before it is scaled, so any
    /// `index` and `theme_index` are accepted.
    pub fn spawn_pad_effect(
        &mut self,
        index: usize,
        at: Vec2,
        theme: &Theme,
        theme_index: usize,
        now_ms: f64,
    ) {
        let duration_ms = if self.reduced_motion {
            REDUCED_MOTION_MS
        } else {
            500.0 + ((index % 360) * 31 % 360) as f64
        };
        let rotation = self.rng.random::<f32>() * TAU;
        let drift_x = (self.rng.random::<f32>() - 0.5) * (40.0 + (index % 4) as f32 * 16.0);
        let drift_y = (self.rng.random::<f32>() - 0.5) * (40.0 + (index % 3) as f32 * 18.0);

        self.push(Effect {
            kind: VISUAL_KINDS[(index % 8 + (theme_index % 4) * 2) % VISUAL_KINDS.len()],
            anchor: at,
            index,
            start_ms: now_ms,
            duration_ms,
            size: 34.0 + (index % 8) as f32 * 10.0,
            rotation,
            drift: Vec2::new(drift_x, drift_y),
            color_a: theme.palette_at(index),
            color_b: theme.palette_at(index % theme.palette.len() + 3),
        });
    }

    /// Queue the twelve staggered rings and rays of a mode switch.
    pub fn spawn_mode_switch_burst(&mut self, at: Vec2, theme: &Theme, now_ms: f64) {
        for k in 0..BURST_COUNT {
            let duration_ms = if self.reduced_motion {
                REDUCED_MOTION_MS
            } else {
                420.0 + k as f64 * 18.0
            };

            self.push(Effect {
                kind: if k % 2 == 0 {
                    EffectKind::Ring
                } else {
                    EffectKind::Rays
                },
                anchor: at,
                index: 28 - k % 6,
                start_ms: now_ms + k as f64 * 10.0,
                duration_ms,
                size: 30.0 + k as f32 * 8.0,
                rotation: PI / 6.0 * k as f32,
                drift: Vec2::ZERO,
                color_a: theme.palette_at(k),
                color_b: theme.palette_at(k + 2),
            });
        }
    }

    fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
        if self.effects.len() > self.capacity {
            let excess = self.effects.len() - self.capacity;
            self.effects.drain(..excess);
            self.evicted += excess;
            log::debug!("Effect cap reached, dropped {} oldest", excess);
        }
    }

    /// Retire finished effects and draw the running ones at `timestamp_ms`.
    ///
    /// Newest effects are drawn first, so older ones paint over them.
    pub fn advance(&mut self, timestamp_ms: f64) -> Vec<DrawCommand> {
        self.effects
            .retain(|effect| effect.phase(timestamp_ms) != Phase::Finished);

        let mut commands = Vec::new();
        for effect in self.effects.iter().rev() {
            if let Phase::Running(progress) = effect.phase(timestamp_ms) {
                render_effect(effect, progress, &mut self.colors, &mut commands);
            }
        }
        commands
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Effects dropped by the cap so far.
    pub fn evicted(&self) -> usize {
        self.evicted
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }
}
