use crate::{
    engine::{AudioBackend, EngineError, Synthesizer},
    fx::{draw::DrawCommand, effect::Vec2, scheduler::EffectScheduler},
    grid::{is_mode_pad, PAD_COUNT},
    theme::{theme_at, theme_count, Theme},
};

/*
Session
=======

Glue between the player's input, the sound engine and the effect scheduler.
The front end owns one `Session` and feeds it two kinds of events:

  on_trigger(pad, position, now) ──→ audio voice + effects + outcome
  on_frame(now)                  ──→ draw commands for this frame

Regular pad:  pad voice, one pad effect, echo in the pad's palette color.
Mode pad:     12-effect burst in the outgoing theme, echo in the outgoing
              accent, chime pitched for the incoming theme, then the theme
              index advances by one.

The session never blocks and never fails: audio problems only silence it.
*/

/// How long a pad reads as lit after a trigger.
pub const PAD_FLASH_MS: f64 = 140.0;

/// Emitted when the mode pad moves to the next theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChanged {
    pub name: &'static str,
    pub index: usize,
}

/// What a single trigger produced, for the front end to show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerOutcome {
    pub pad: usize,
    /// Color of the short echo drawn at the trigger position.
    pub echo_color: &'static str,
    pub theme_changed: Option<ThemeChanged>,
}

pub struct Session<B, F>
where
    B: AudioBackend,
    F: FnMut() -> Result<B, EngineError>,
{
    theme_index: usize,
    scheduler: EffectScheduler,
    synth: Synthesizer<B, F>,
    flash_until: [f64; PAD_COUNT],
}

impl<B, F> Session<B, F>
where
    B: AudioBackend,
    F: FnMut() -> Result<B, EngineError>,
{
    pub fn new(synth: Synthesizer<B, F>, scheduler: EffectScheduler) -> Self {
        Self {
            theme_index: 0,
            scheduler,
            synth,
            flash_until: [f64::NEG_INFINITY; PAD_COUNT],
        }
    }

    pub fn theme(&self) -> &'static Theme {
        theme_at(self.theme_index)
    }

    pub fn theme_index(&self) -> usize {
        self.theme_index
    }

    /// Step to the next theme, wrapping after the last.
    pub fn advance_theme(&mut self) -> ThemeChanged {
        self.theme_index = (self.theme_index + 1) % theme_count();
        let theme = self.theme();
        log::info!("Theme changed to {} ({})", theme.name, self.theme_index + 1);
        ThemeChanged {
            name: theme.name,
            index: self.theme_index,
        }
    }

    /// Play pad `pad` at `position`. Unknown pads are ignored.
    pub fn on_trigger(
        &mut self,
        pad: usize,
        position: Vec2,
        now_ms: f64,
    ) -> Option<TriggerOutcome> {
        if pad >= PAD_COUNT {
            log::debug!("Ignoring trigger for unknown pad {}", pad);
            return None;
        }

        self.flash_until[pad] = now_ms + PAD_FLASH_MS;
        self.synth.resume();

        let theme = self.theme();
        if is_mode_pad(pad) {
            // The chime announces the theme being switched to
            let incoming = (self.theme_index + 1) % theme_count();
            self.synth.play_mode_switch_voice(incoming);
            self.scheduler.spawn_mode_switch_burst(position, theme, now_ms);
            let echo_color = theme.accent;
            let changed = self.advance_theme();

            return Some(TriggerOutcome {
                pad,
                echo_color,
                theme_changed: Some(changed),
            });
        }

        self.synth.play_pad_voice(pad, theme);
        self.scheduler
            .spawn_pad_effect(pad, position, theme, self.theme_index, now_ms);

        Some(TriggerOutcome {
            pad,
            echo_color: theme.palette_at(pad),
            theme_changed: None,
        })
    }

    /// Draw commands for the frame at `timestamp_ms`.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> Vec<DrawCommand> {
        self.scheduler.advance(timestamp_ms)
    }

    /// Whether pad `pad` is still inside its activation flash.
    pub fn is_pad_active(&self, pad: usize, now_ms: f64) -> bool {
        self.flash_until.get(pad).is_some_and(|&until| now_ms < until)
    }

    pub fn scheduler(&self) -> &EffectScheduler {
        &self.scheduler
    }

    pub fn synth(&self) -> &Synthesizer<B, F> {
        &self.synth
    }

    pub fn synth_mut(&mut self) -> &mut Synthesizer<B, F> {
        &mut self.synth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::{AudioBackend, OfflineBackend},
        grid::MODE_PAD,
        synth::{BusSettings, SynthMessage},
        voices::mode_switch_chime,
    };

    fn offline() -> Result<OfflineBackend, EngineError> {
        Ok(OfflineBackend::new(8_000.0, BusSettings::default()))
    }

    fn session() -> Session<OfflineBackend, fn() -> Result<OfflineBackend, EngineError>> {
        Session::new(
            Synthesizer::with_seed(offline as fn() -> _, 3),
            EffectScheduler::with_seed(false, 3),
        )
    }

    #[test]
    fn pad_trigger_outcome() {
        let mut s = session();
        let out = s.on_trigger(4, Vec2::ZERO, 0.0).expect("pad 4 exists");

        assert_eq!(out.echo_color, theme_at(0).palette_at(4));
        assert_eq!(out.theme_changed, None);
        assert_eq!(s.scheduler().len(), 1);
        let backend = s.synth_mut().backend_mut().expect("audio started");
        assert_eq!(backend.submitted(), 1);
        assert_eq!(backend.resumes(), 1);
    }

    #[test]
    fn mode_pad_uses_outgoing_theme() {
        let mut s = session();
        let out = s.on_trigger(MODE_PAD, Vec2::ZERO, 0.0).expect("mode pad exists");

        assert_eq!(out.echo_color, theme_at(0).accent);
        assert_eq!(
            out.theme_changed,
            Some(ThemeChanged {
                name: theme_at(1).name,
                index: 1
            })
        );
        assert_eq!(s.theme_index(), 1);
        assert_eq!(s.scheduler().len(), 12);
        assert_eq!(s.scheduler().effects()[0].color_a, theme_at(0).palette_at(0));
    }

    #[test]
    fn mode_chime_is_pitched_for_the_incoming_theme() {
        let mut s = session();
        s.on_trigger(MODE_PAD, Vec2::ZERO, 0.0).expect("mode pad exists");
        let played = s
            .synth_mut()
            .backend_mut()
            .expect("audio started")
            .render(2_400);

        let render_chime = |theme_index| {
            let mut backend = OfflineBackend::new(8_000.0, BusSettings::default());
            backend
                .submit(SynthMessage::Play(mode_switch_chime(theme_index)))
                .expect("offline submit never fails");
            backend.render(2_400)
        };

        assert_eq!(played, render_chime(1), "0 -> 1 plays at x1.04");
        assert_ne!(played, render_chime(0));
    }

    #[test]
    fn flash_window() {
        let mut s = session();
        s.on_trigger(2, Vec2::ZERO, 100.0);
        assert!(s.is_pad_active(2, 100.0));
        assert!(s.is_pad_active(2, 239.0));
        assert!(!s.is_pad_active(2, 240.0));
        assert!(!s.is_pad_active(3, 100.0));

        s.on_trigger(2, Vec2::ZERO, 200.0);
        assert!(s.is_pad_active(2, 300.0), "retrigger restarts the window");
    }

    #[test]
    fn unknown_pad_is_ignored() {
        let mut s = session();
        assert!(s.on_trigger(PAD_COUNT, Vec2::ZERO, 0.0).is_none());
        assert!(s.scheduler().is_empty());
        assert!(!s.is_pad_active(PAD_COUNT, 0.0));
    }
}
