use crate::{graph::node::RenderCtx, MIN_TIME, RAMP_FLOOR};

/*
One-Shot Exponential Envelope
=============================

Percussive pads never hold a note: every trigger is a fire-and-forget gesture
that swells to a peak and dies away. This envelope models exactly that shape,
with no sustain stage and no gate to wait for.

Vocabulary
----------

  floor       The near-silent level the envelope starts from and returns to.
              Exponential curves can never reach 0.0 (log(0) is undefined),
              so a small positive floor (0.0001, about -80 dB) stands in.

  peak        The loudest level, reached at the end of the attack.

  attack_end  Seconds after note_on at which the peak is reached.

  release_end Seconds after note_on at which the level is back at the floor.
              The release ramp therefore lasts (release_end - attack_end).


The Shape: Exponential Ramps
----------------------------

  Level
   peak ┤   ╭╮
        │   │ ╲
        │  ╱   ╲_
        │  │     ╲__
  floor └──╯        ╲______──→ Time
         attack   release

Between two points (t0, v0) and (t1, v1) the level follows

    v(t) = v0 * (v1 / v0) ^ ((t - t0) / (t1 - t0))

which is a straight line in decibels. Each sample therefore multiplies the
level by a constant ratio:

    ratio = (v1 / v0) ^ (1 / samples)

Both endpoints must be strictly positive, hence the floor.


The State Machine
-----------------

   ┌──────┐ note_on ┌────────┐ t=attack_end ┌─────────┐ t=release_end ┌──────┐
   │ Idle │ ──────→ │ Attack │ ───────────→ │ Release │ ────────────→ │ Done │
   └──────┘         └────────┘              └─────────┘               └──────┘

note_off during Attack jumps straight to Release from the current level.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeState {
    Idle,    // Not yet triggered, level = floor
    Attack,  // Ramping floor → peak
    Release, // Ramping peak → floor
    Done,    // Back at the floor, nothing more to do
}

#[derive(Debug, Clone)]
pub struct Envelope {
    floor: f32,
    peak: f32,
    attack_end: f32,  // seconds after note_on
    release_end: f32, // seconds after note_on

    stage: EnvelopeState,
    level: f32,
    ratio: f32,              // per-sample multiplier for the current stage
    stage_remaining: u32,    // samples left in the current stage
}

impl Envelope {
    /// Ramp from the floor to `peak` by `attack_end`, back to the floor by
    /// `release_end` (both in seconds after the trigger).
    pub fn ramp(peak: f32, attack_end: f32, release_end: f32) -> Self {
        let attack_end = attack_end.max(MIN_TIME);
        Self {
            floor: RAMP_FLOOR,
            peak: peak.max(RAMP_FLOOR),
            attack_end,
            release_end: release_end.max(attack_end + MIN_TIME),
            stage: EnvelopeState::Idle,
            level: RAMP_FLOOR,
            ratio: 1.0,
            stage_remaining: 0,
        }
    }

    pub fn note_on(&mut self, ctx: &RenderCtx) {
        self.level = self.floor;
        let samples = seconds_to_samples(self.attack_end, ctx.sample_rate);
        self.enter(EnvelopeState::Attack, self.peak, samples);
    }

    pub fn note_off(&mut self, ctx: &RenderCtx) {
        if !matches!(self.stage, EnvelopeState::Attack) {
            return;
        }
        let samples =
            seconds_to_samples(self.release_end - self.attack_end, ctx.sample_rate);
        self.enter(EnvelopeState::Release, self.floor, samples);
    }

    fn enter(&mut self, stage: EnvelopeState, target: f32, samples: u32) {
        self.stage = stage;
        self.stage_remaining = samples;
        self.ratio = (target / self.level).powf(1.0 / samples as f32);
    }

    /// Advance the envelope by one sample.
    pub fn next_sample(&mut self, ctx: &RenderCtx) {
        match self.stage {
            EnvelopeState::Idle | EnvelopeState::Done => {
                self.level = self.floor;
            }
            EnvelopeState::Attack => {
                self.level *= self.ratio;
                self.stage_remaining = self.stage_remaining.saturating_sub(1);
                if self.stage_remaining == 0 {
                    self.level = self.peak;
                    let samples =
                        seconds_to_samples(self.release_end - self.attack_end, ctx.sample_rate);
                    self.enter(EnvelopeState::Release, self.floor, samples);
                }
            }
            EnvelopeState::Release => {
                self.level *= self.ratio;
                self.stage_remaining = self.stage_remaining.saturating_sub(1);
                if self.stage_remaining == 0 {
                    self.level = self.floor;
                    self.stage = EnvelopeState::Done;
                }
            }
        }
    }

    pub fn render(&mut self, buffer: &mut [f32], ctx: &RenderCtx) {
        for sample in buffer.iter_mut() {
            self.next_sample(ctx);
            *sample = self.level;
        }
    }

    /// True while the envelope is still moving.
    pub fn is_active(&self) -> bool {
        matches!(self.stage, EnvelopeState::Attack | EnvelopeState::Release)
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn state(&self) -> EnvelopeState {
        self.stage
    }
}

#[inline]
fn seconds_to_samples(seconds: f32, sample_rate: f32) -> u32 {
    (seconds * sample_rate).round().max(1.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 1_000.0;

    fn ctx() -> RenderCtx {
        RenderCtx::from_freq(SAMPLE_RATE, 440.0, 1.0)
    }

    fn render_samples(env: &mut Envelope, samples: usize) {
        let ctx = ctx();
        for _ in 0..samples {
            env.next_sample(&ctx);
        }
    }

    #[test]
    fn attack_reaches_peak_on_time() {
        let mut env = Envelope::ramp(0.5, 0.01, 0.2);
        env.note_on(&ctx());
        render_samples(&mut env, 10);

        assert!((env.level() - 0.5).abs() < 1e-4, "got {}", env.level());
        assert_eq!(env.state(), EnvelopeState::Release);
    }

    #[test]
    fn release_lands_on_floor_and_finishes() {
        let mut env = Envelope::ramp(0.2, 0.01, 0.1);
        env.note_on(&ctx());
        render_samples(&mut env, 100);

        assert!((env.level() - RAMP_FLOOR).abs() < 1e-6);
        assert_eq!(env.state(), EnvelopeState::Done);
        assert!(!env.is_active());
    }

    #[test]
    fn ramps_are_exponential() {
        // Halfway through an exponential ramp the level sits at the
        // geometric mean of its endpoints, not the arithmetic one.
        let mut env = Envelope::ramp(1.0, 0.1, 0.5);
        env.note_on(&ctx());
        render_samples(&mut env, 50);

        let geometric = (RAMP_FLOOR * 1.0f32).sqrt();
        assert!(
            (env.level() - geometric).abs() < geometric * 0.05,
            "expected ≈{geometric}, got {}",
            env.level()
        );
    }

    #[test]
    fn level_never_reaches_zero() {
        let mut env = Envelope::ramp(0.3, 0.003, 0.05);
        let ctx = ctx();
        env.note_on(&ctx);
        let mut buffer = vec![0.0; 200];
        env.render(&mut buffer, &ctx);
        assert!(buffer.iter().all(|&s| s > 0.0));
    }

    #[test]
    fn note_off_during_attack_starts_release() {
        let mut env = Envelope::ramp(0.5, 0.05, 0.1);
        let ctx = ctx();
        env.note_on(&ctx);
        render_samples(&mut env, 10);
        env.note_off(&ctx);
        assert_eq!(env.state(), EnvelopeState::Release);
    }
}
