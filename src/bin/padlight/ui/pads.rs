//! Pad grid widget - bordered cells laid over the effects canvas
//!
//! Only borders and labels are drawn, so effects show through the pads.
//! Resting borders use the theme's grid line color; a lit pad gets a thick
//! border in its tint and a tinted fill.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType},
    Frame,
};

use padlight::{
    fx::color::ColorCache,
    grid::{label, pad_tint, COLUMNS, ROWS},
};

use super::{backdrop, to_color, FrameView};

pub fn render_pads(frame: &mut Frame, area: Rect, view: &FrameView, colors: &mut ColorCache) {
    let background = backdrop(view.theme, colors);
    // Resting pads sit on the theme's grid line, lit pads take their tint
    let grid_line = to_color(view.theme.grid_line.over(background));
    let rows = Layout::vertical([Constraint::Ratio(1, ROWS as u32); ROWS]).split(area);

    for (row, row_area) in rows.iter().enumerate() {
        let cells =
            Layout::horizontal([Constraint::Ratio(1, COLUMNS as u32); COLUMNS]).split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let pad = row * COLUMNS + col;
            let tint = colors.rgb(pad_tint(view.theme, pad));
            let lit = view.active[pad];

            let mut block = Block::bordered()
                .title(label(pad, view.theme_index))
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(grid_line))
                .title_style(Style::default().fg(to_color(tint)));

            if lit {
                block = block
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(to_color(tint)))
                    .title_style(
                        Style::default()
                            .fg(to_color(background))
                            .bg(to_color(tint))
                            .add_modifier(Modifier::BOLD),
                    )
                    .style(Style::default().bg(to_color(tint.with_alpha(0.3).over(background))));
            }

            frame.render_widget(block, *cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use padlight::{grid::PAD_COUNT, theme::theme_at};

    use super::*;
    use crate::ui::AudioStatus;

    fn corner_color(theme_index: usize, active: [bool; PAD_COUNT]) -> ratatui::style::Color {
        let view = FrameView {
            theme: theme_at(theme_index),
            theme_index,
            commands: &[],
            active,
            echoes: &[],
            toast: None,
            audio: AudioStatus::Idle,
            effects: 0,
            viewport: (960.0, 600.0),
            now_ms: 0.0,
        };
        let mut colors = ColorCache::new();
        let mut terminal = Terminal::new(TestBackend::new(60, 25)).expect("test backend");
        terminal
            .draw(|frame| render_pads(frame, frame.area(), &view, &mut colors))
            .expect("draw");
        terminal.backend().buffer()[(0, 0)].fg
    }

    #[test]
    fn resting_pads_use_the_theme_grid_line() {
        for index in 0..5 {
            let theme = theme_at(index);
            let mut colors = ColorCache::new();
            let expected = to_color(theme.grid_line.over(backdrop(theme, &mut colors)));
            assert_eq!(corner_color(index, [false; PAD_COUNT]), expected, "{}", theme.name);
        }
    }

    #[test]
    fn lit_pad_border_takes_its_tint() {
        let mut active = [false; PAD_COUNT];
        active[0] = true;
        let tint = ColorCache::new().rgb(pad_tint(theme_at(0), 0));
        assert_eq!(corner_color(0, active), to_color(tint));
    }
}
