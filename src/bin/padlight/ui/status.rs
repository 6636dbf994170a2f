//! Status bar widget - theme, audio state, live effects and the theme toast

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use padlight::{fx::color::ColorCache, grid::mode_label};

use super::{to_color, AudioStatus, FrameView};

pub fn render_status(frame: &mut Frame, area: Rect, view: &FrameView, colors: &mut ColorCache) {
    let accent = to_color(colors.rgb(view.theme.accent));
    let block = Block::default()
        .title(" padlight ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let (audio_text, audio_color) = match view.audio {
        AudioStatus::Idle => ("audio: waiting", Color::DarkGray),
        AudioStatus::Ready => ("audio: on", Color::Green),
        AudioStatus::Off => ("audio: off", Color::Yellow),
    };

    let mut spans = vec![
        Span::styled(
            format!(" {}  ", mode_label(view.theme, view.theme_index)),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{}  ", audio_text), Style::default().fg(audio_color)),
        Span::styled(
            format!("effects: {}  ", view.effects),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    // Swatch of the latest echo color
    if let Some(echo) = view.echoes.last() {
        spans.push(Span::styled(
            "●  ",
            Style::default().fg(to_color(colors.rgb(echo.color))),
        ));
    }

    if let Some(name) = view.toast {
        spans.push(Span::styled(
            format!(" {} ", name),
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
