//! Effects canvas - replays the frame's draw commands
//!
//! Viewport coordinates grow downwards, the canvas grows upwards, so every
//! y is flipped. Translucent colors are composited over the backdrop since
//! terminal cells have no alpha.

use std::f64::consts::TAU;

use ratatui::{
    layout::Rect,
    symbols::Marker,
    widgets::canvas::{Canvas, Circle, Context, Line, Points},
    Frame,
};

use padlight::fx::{
    color::{ColorCache, Rgb, Rgba},
    draw::DrawCommand,
    easing::ease_out_cubic,
    effect::Vec2,
};

use super::{backdrop, to_color, Echo, FrameView};
use crate::app::ECHO_MS;

/// Segments per full turn when flattening arcs.
const ARC_SEGMENTS: f64 = 48.0;
/// Below this the cell would be indistinguishable from the backdrop.
const MIN_VISIBLE_ALPHA: f32 = 0.02;

struct Painter<'a, 'b> {
    ctx: &'a mut Context<'b>,
    height: f64,
    background: Rgb,
}

impl Painter<'_, '_> {
    fn point(&self, p: Vec2) -> (f64, f64) {
        (p.x as f64, self.height - p.y as f64)
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        let (x1, y1) = self.point(from);
        let (x2, y2) = self.point(to);
        let color = to_color(color.over(self.background));
        self.ctx.draw(&Line::new(x1, y1, x2, y2, color));
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let (x, y) = self.point(center);
        self.ctx.draw(&Circle {
            x,
            y,
            radius: radius.max(0.0) as f64,
            color: to_color(color.over(self.background)),
        });
    }

    fn dot(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if radius > 3.0 {
            self.circle(center, radius * 0.5, color);
        }
        let coords = [self.point(center)];
        self.ctx.draw(&Points {
            coords: &coords,
            color: to_color(color.over(self.background)),
        });
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, color: Rgba) {
        let sweep = (end - start) as f64;
        let steps = ((sweep.abs() / TAU) * ARC_SEGMENTS).ceil().max(1.0) as usize;
        let at = |k: usize| {
            let angle = start as f64 + sweep * k as f64 / steps as f64;
            center + Vec2::polar(angle as f32, radius)
        };
        for k in 0..steps {
            self.line(at(k), at(k + 1), color);
        }
    }

    fn command(&mut self, command: &DrawCommand) {
        if command.alpha() < MIN_VISIBLE_ALPHA {
            return;
        }
        match command {
            DrawCommand::Circle { center, radius, stroke } => {
                self.circle(*center, *radius, stroke.color);
            }
            DrawCommand::Dot { center, radius, fill } => self.dot(*center, *radius, *fill),
            DrawCommand::Line { from, to, stroke } => self.line(*from, *to, stroke.color),
            DrawCommand::Polyline {
                points,
                closed,
                fill,
                stroke,
            } => {
                // Cells cannot be filled partially; outline in the stroke, else the fill
                let Some(color) = stroke.map(|s| s.color).or(*fill) else {
                    return;
                };
                for pair in points.windows(2) {
                    self.line(pair[0], pair[1], color);
                }
                if *closed && points.len() > 2 {
                    self.line(points[points.len() - 1], points[0], color);
                }
            }
            DrawCommand::Arc {
                center,
                radius,
                start,
                end,
                stroke,
            } => self.arc(*center, *radius, *start, *end, stroke.color),
        }
    }
}

pub fn render_effects(frame: &mut Frame, area: Rect, view: &FrameView, colors: &mut ColorCache) {
    let (width, height) = view.viewport;
    let background = backdrop(view.theme, colors);
    let echoes: Vec<(&Echo, Rgb)> = view
        .echoes
        .iter()
        .map(|echo| (echo, colors.rgb(echo.color)))
        .collect();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(to_color(background))
        .x_bounds([0.0, width as f64])
        .y_bounds([0.0, height as f64])
        .paint(|ctx| {
            let mut painter = Painter {
                ctx,
                height: height as f64,
                background,
            };
            for command in view.commands {
                painter.command(command);
            }
            for &(echo, rgb) in &echoes {
                let p = ((view.now_ms - echo.start_ms) / ECHO_MS).clamp(0.0, 1.0) as f32;
                let color = rgb.with_alpha(1.0 - p);
                painter.circle(echo.at, 6.0 + ease_out_cubic(p) * 30.0, color);
            }
        });

    frame.render_widget(canvas, area);
}
