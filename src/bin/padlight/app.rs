//! Padlight - terminal front end: input, clock and frame loop

use std::{
    io::stdout,
    time::{Duration, Instant},
};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
};
use ratatui::{layout::Rect, DefaultTerminal};

use padlight::{
    config::Config,
    engine::{CpalBackend, EngineError, Synthesizer},
    fx::{color::ColorCache, effect::Vec2, scheduler::EffectScheduler},
    grid::{pad_at, pad_center, pad_for_key, PointerSweep, PAD_COUNT},
    session::{Session, TriggerOutcome},
};

use super::ui::{self, AudioStatus, Echo, FrameView};

/// Lifetime of a click echo.
pub const ECHO_MS: f64 = 420.0;
/// How long the new theme name stays highlighted.
pub const TOAST_MS: f64 = 1400.0;

type AudioFactory = Box<dyn FnMut() -> Result<CpalBackend, EngineError>>;

/// Application builder
pub struct Padlight {
    config: Config,
    seed: Option<u64>,
}

impl Padlight {
    pub fn new(config: Config, seed: Option<u64>) -> Self {
        Self { config, seed }
    }

    /// Take over the terminal until the player quits.
    pub fn run(self) -> EyreResult<()> {
        let mut terminal = ratatui::init();
        execute!(stdout(), EnableMouseCapture).wrap_err("failed to enable mouse capture")?;

        let result = App::new(self.config, self.seed).run(&mut terminal);

        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        result
    }
}

struct Toast {
    text: &'static str,
    until_ms: f64,
}

struct App {
    session: Session<CpalBackend, AudioFactory>,
    config: Config,
    clock: Instant,
    sweep: PointerSweep,
    echoes: Vec<Echo>,
    toast: Option<Toast>,
    colors: ColorCache,
    /// Screen area the pad grid was last drawn into.
    stage: Rect,
    should_quit: bool,
}

impl App {
    fn new(config: Config, seed: Option<u64>) -> Self {
        let enabled = config.audio.enabled;
        let bus = config.audio.bus();
        let factory: AudioFactory = Box::new(move || {
            if enabled {
                CpalBackend::open(bus)
            } else {
                Err(EngineError::Disabled)
            }
        });

        let reduced_motion = config.visual.reduced_motion;
        let (synth, scheduler) = match seed {
            Some(seed) => (
                Synthesizer::with_seed(factory, seed),
                EffectScheduler::with_seed(reduced_motion, seed),
            ),
            None => (
                Synthesizer::new(factory),
                EffectScheduler::new(reduced_motion),
            ),
        };
        let scheduler = scheduler.with_capacity(config.visual.effect_capacity);

        Self {
            session: Session::new(synth, scheduler),
            config,
            clock: Instant::now(),
            sweep: PointerSweep::default(),
            echoes: Vec::new(),
            toast: None,
            colors: ColorCache::new(),
            stage: Rect::default(),
            should_quit: false,
        }
    }

    fn now_ms(&self) -> f64 {
        self.clock.elapsed().as_secs_f64() * 1000.0
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        let interval = Duration::from_millis(self.config.visual.frame_interval_ms.max(1));

        while !self.should_quit {
            let now = self.now_ms();
            let commands = self.session.on_frame(now);
            self.echoes.retain(|echo| now - echo.start_ms < ECHO_MS);
            if self.toast.as_ref().is_some_and(|t| now >= t.until_ms) {
                self.toast = None;
            }

            let mut active = [false; PAD_COUNT];
            for (pad, lit) in active.iter_mut().enumerate() {
                *lit = self.session.is_pad_active(pad, now);
            }
            let synth = self.session.synth();
            let audio = if synth.is_ready() {
                AudioStatus::Ready
            } else if synth.is_unsupported() {
                AudioStatus::Off
            } else {
                AudioStatus::Idle
            };

            let view = FrameView {
                theme: self.session.theme(),
                theme_index: self.session.theme_index(),
                commands: &commands,
                active,
                echoes: &self.echoes,
                toast: self.toast.as_ref().map(|t| t.text),
                audio,
                effects: self.session.scheduler().len(),
                viewport: self.viewport(),
                now_ms: now,
            };

            let mut stage = self.stage;
            let colors = &mut self.colors;
            terminal.draw(|frame| stage = ui::render(frame, &view, colors))?;
            self.stage = stage;

            // Drain everything queued, waiting at most one frame for the first event
            if event::poll(interval)? {
                loop {
                    self.handle_event(event::read()?);
                    if !event::poll(Duration::ZERO)? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    fn viewport(&self) -> (f32, f32) {
        (
            self.config.visual.viewport_width,
            self.config.visual.viewport_height,
        )
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Held keys must not machine-gun a pad
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                if let Some(pad) = pad_for_key(c) {
                    let (width, height) = self.viewport();
                    self.trigger(pad, pad_center(pad, width, height));
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let at = self.to_viewport(mouse.column, mouse.row);
        let (width, height) = self.viewport();
        let pad = at.and_then(|at| pad_at(at, width, height));

        let hit = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.sweep.press(pad),
            MouseEventKind::Drag(MouseButton::Left) => self.sweep.move_to(pad),
            MouseEventKind::Up(MouseButton::Left) => {
                self.sweep.release();
                None
            }
            _ => None,
        };

        if let (Some(pad), Some(at)) = (hit, at) {
            self.trigger(pad, at);
        }
    }

    /// Map a terminal cell to viewport coordinates, `None` outside the stage.
    fn to_viewport(&self, column: u16, row: u16) -> Option<Vec2> {
        let stage = self.stage;
        if stage.width == 0 || stage.height == 0 {
            return None;
        }
        if column < stage.x || row < stage.y {
            return None;
        }
        let dx = column - stage.x;
        let dy = row - stage.y;
        if dx >= stage.width || dy >= stage.height {
            return None;
        }

        let (width, height) = self.viewport();
        Some(Vec2::new(
            (dx as f32 + 0.5) / stage.width as f32 * width,
            (dy as f32 + 0.5) / stage.height as f32 * height,
        ))
    }

    fn trigger(&mut self, pad: usize, at: Vec2) {
        let now = self.now_ms();
        let Some(TriggerOutcome {
            echo_color,
            theme_changed,
            ..
        }) = self.session.on_trigger(pad, at, now)
        else {
            return;
        };

        self.echoes.push(Echo {
            at,
            color: echo_color,
            start_ms: now,
        });
        if let Some(changed) = theme_changed {
            self.toast = Some(Toast {
                text: changed.name,
                until_ms: now + TOAST_MS,
            });
        }
    }
}
