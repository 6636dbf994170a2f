//! TUI module for padlight
//!
//! One frame is: status bar, the stage (effects canvas with the pad grid
//! laid over it), and a help line.

mod canvas;
mod pads;
mod status;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use padlight::{
    fx::{
        color::{ColorCache, Rgb},
        draw::DrawCommand,
        effect::Vec2,
    },
    grid::PAD_COUNT,
    theme::Theme,
};

use canvas::render_effects;
use pads::render_pads;
use status::render_status;

/// Audio engine state as shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioStatus {
    /// Not started yet; the first trigger opens the device.
    Idle,
    Ready,
    /// Unavailable or disabled for this session.
    Off,
}

/// Expanding ring left where a pad was hit.
#[derive(Clone, Copy, Debug)]
pub struct Echo {
    pub at: Vec2,
    pub color: &'static str,
    pub start_ms: f64,
}

/// Everything one frame needs, gathered by the app loop.
pub struct FrameView<'a> {
    pub theme: &'static Theme,
    pub theme_index: usize,
    pub commands: &'a [DrawCommand],
    pub active: [bool; PAD_COUNT],
    pub echoes: &'a [Echo],
    pub toast: Option<&'static str>,
    pub audio: AudioStatus,
    pub effects: usize,
    pub viewport: (f32, f32),
    pub now_ms: f64,
}

pub(crate) fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Single backdrop color standing in for the theme's gradient.
pub(crate) fn backdrop(theme: &Theme, colors: &mut ColorCache) -> Rgb {
    let top = colors.rgb(theme.background[0]);
    let bottom = colors.rgb(theme.background[1]);
    bottom.lerp(top, 0.35)
}

/// Draw the frame; returns the stage area used for pointer hit testing.
///
/// Theme hex strings are resolved through `colors`, which lives as long as
/// the app.
pub fn render(frame: &mut Frame, view: &FrameView, colors: &mut ColorCache) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status bar
            Constraint::Min(10),   // Stage
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_status(frame, chunks[0], view, colors);

    let stage = chunks[1];
    render_effects(frame, stage, view, colors);
    render_pads(frame, stage, view, colors);

    let help = Paragraph::new(
        " [1-0 Q-P A-L] Pads  [M] Mode  [Mouse] Click, hold and sweep  [Esc] Quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);

    stage
}

#[cfg(test)]
mod tests {
    use padlight::theme::theme_at;

    use super::*;

    #[test]
    fn theme_colors_are_parsed_once() {
        let mut colors = ColorCache::new();
        let theme = theme_at(3);
        let first = backdrop(theme, &mut colors);
        assert_eq!(colors.len(), 2);

        for _ in 0..60 {
            assert_eq!(backdrop(theme, &mut colors), first);
        }
        assert_eq!(colors.len(), 2, "repeat frames reuse the parsed stops");
    }
}
