//! Shape renderers: effect state + progress → draw commands.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, PI, TAU};

use crate::fx::{
    color::ColorCache,
    draw::{DrawCommand, Stroke},
    easing::{ease_out_back, ease_out_cubic},
    effect::{Effect, EffectKind, Vec2},
};

/*
Shape Renderers
===============

Every renderer is a pure function of the effect and its linear progress
p ∈ [0, 1). Two derived values drive everything:

  e     eased progress (ease_out_cubic, or ease_out_back for the polygon)
  fade  1 - p, scales line widths and alpha so shapes thin out and vanish

Local geometry is built around the origin, rotated by the figure rotation,
then translated to the (possibly drifting) center, so the commands come out
in viewport coordinates ready to paint.

Shapes that alternate colors use color A on even elements, color B on odd.
*/

/// Render one effect at `progress`, appending its commands to `out`.
pub fn render_effect(
    effect: &Effect,
    progress: f32,
    colors: &mut ColorCache,
    out: &mut Vec<DrawCommand>,
) {
    let draw: fn(&Effect, f32, &mut ColorCache, &mut Vec<DrawCommand>) = match effect.kind {
        EffectKind::Ring => draw_ring,
        EffectKind::Polygon => draw_polygon,
        EffectKind::Rays => draw_rays,
        EffectKind::Squares => draw_squares,
        EffectKind::Spiral => draw_spiral,
        EffectKind::Orbit => draw_orbit,
        EffectKind::Burst => draw_burst,
        EffectKind::Arcs => draw_arcs,
    };
    draw(effect, progress, colors, out);
}

fn alternate(effect: &Effect, k: usize) -> &'static str {
    if k % 2 == 0 {
        effect.color_a
    } else {
        effect.color_b
    }
}

/// Local point → viewport point.
fn place(local: Vec2, rotation: f32, center: Vec2) -> Vec2 {
    local.rotate(rotation) + center
}

pub fn draw_ring(effect: &Effect, p: f32, colors: &mut ColorCache, out: &mut Vec<DrawCommand>) {
    let e = ease_out_cubic(p);
    let fade = 1.0 - p;

    out.push(DrawCommand::Circle {
        center: effect.anchor,
        radius: effect.size + e * 180.0,
        stroke: Stroke::new(colors.with_alpha(effect.color_a, fade * 0.95), 2.0 + fade * 5.0),
    });
    out.push(DrawCommand::Circle {
        center: effect.anchor,
        radius: effect.size * 0.6 + e * 110.0,
        stroke: Stroke::new(colors.with_alpha(effect.color_b, fade * 0.8), 1.0 + fade * 3.0),
    });
}

pub fn draw_polygon(effect: &Effect, p: f32, colors: &mut ColorCache, out: &mut Vec<DrawCommand>) {
    let e = ease_out_back(p);
    let fade = 1.0 - p;
    let sides = 3 + effect.index % 5;
    let radius = effect.size * (0.55 + e * 1.25);
    let center = effect.anchor + effect.drift * (p * 0.2);
    let rotation = effect.rotation + p * 4.5;

    let points = (0..sides)
        .map(|k| {
            let angle = TAU * k as f32 / sides as f32;
            place(Vec2::polar(angle, radius), rotation, center)
        })
        .collect();

    out.push(DrawCommand::Polyline {
        points,
        closed: true,
        fill: Some(colors.with_alpha(effect.color_a, 0.18 * fade)),
        stroke: Some(Stroke::new(
            colors.with_alpha(effect.color_b, 0.9 * fade),
            1.5 + fade * 2.0,
        )),
    });
}

pub fn draw_rays(effect: &Effect, p: f32, colors: &mut ColorCache, out: &mut Vec<DrawCommand>) {
    let e = ease_out_cubic(p);
    let fade = 1.0 - p;
    let count = 7 + effect.index % 8;
    let start_radius = effect.size * 0.25;
    let end_radius = effect.size + e * 160.0;
    let rotation = effect.rotation + p * 1.5;
    let width = 1.0 + fade * 2.8;

    for k in 0..count {
        let angle = TAU * k as f32 / count as f32;
        out.push(DrawCommand::Line {
            from: place(Vec2::polar(angle, start_radius), rotation, effect.anchor),
            to: place(Vec2::polar(angle, end_radius), rotation, effect.anchor),
            stroke: Stroke::new(colors.with_alpha(alternate(effect, k), fade * 0.9), width),
        });
    }
}

pub fn draw_squares(effect: &Effect, p: f32, colors: &mut ColorCache, out: &mut Vec<DrawCommand>) {
    let e = ease_out_cubic(p);
    let fade = 1.0 - p;
    let center = effect.anchor + effect.drift * (p * 0.25);
    let base = effect.size * (0.5 + e * 1.6);
    let width = 1.2 + fade * 1.8;

    for k in 0..3 {
        let half = (base + k as f32 * 24.0) / 2.0;
        let rotation = effect.rotation + p * (2.8 + k as f32);
        let points = [(-half, -half), (half, -half), (half, half), (-half, half)]
            .into_iter()
            .map(|(x, y)| place(Vec2::new(x, y), rotation, center))
            .collect();
        let alpha = fade * (0.9 - k as f32 * 0.2);

        out.push(DrawCommand::Polyline {
            points,
            closed: true,
            fill: None,
            stroke: Some(Stroke::new(colors.with_alpha(alternate(effect, k), alpha), width)),
        });
    }
}

pub fn draw_spiral(effect: &Effect, p: f32, colors: &mut ColorCache, out: &mut Vec<DrawCommand>) {
    let e = ease_out_cubic(p);
    let fade = 1.0 - p;
    let max_angle = PI * (5.0 + e * 8.0);
    let max_radius = effect.size + e * 170.0;
    let rotation = effect.rotation + p * 1.1;

    let mut points = Vec::new();
    let mut angle = 0.0f32;
    while angle <= max_angle {
        let radius = angle / max_angle * max_radius;
        points.push(place(Vec2::polar(angle, radius), rotation, effect.anchor));
        angle += 0.2;
    }

    out.push(DrawCommand::Polyline {
        points,
        closed: false,
        fill: None,
        stroke: Some(Stroke::new(
            colors.with_alpha(effect.color_a, fade * 0.95),
            1.0 + fade * 2.6,
        )),
    });
}

pub fn draw_orbit(effect: &Effect, p: f32, colors: &mut ColorCache, out: &mut Vec<DrawCommand>) {
    let e = ease_out_cubic(p);
    let fade = 1.0 - p;
    let count = 6 + effect.index % 7;
    let orbit_radius = effect.size * 0.4 + e * 118.0;
    let dot_radius = (6.0 * fade).max(1.8);

    for k in 0..count {
        let angle = TAU * k as f32 / count as f32 + effect.rotation + p * 4.0;
        out.push(DrawCommand::Dot {
            center: effect.anchor + Vec2::polar(angle, orbit_radius),
            radius: dot_radius,
            fill: colors.with_alpha(alternate(effect, k), fade * 0.9),
        });
    }
}

pub fn draw_burst(effect: &Effect, p: f32, colors: &mut ColorCache, out: &mut Vec<DrawCommand>) {
    let e = ease_out_cubic(p);
    let fade = 1.0 - p;
    let count = 10 + effect.index % 6;
    let spread = effect.size + e * 140.0;
    let dot_radius = (5.0 * fade).max(1.5);

    for k in 0..count {
        let angle = TAU * k as f32 / count as f32 + effect.rotation;
        out.push(DrawCommand::Dot {
            center: effect.anchor + Vec2::polar(angle, spread),
            radius: dot_radius,
            fill: colors.with_alpha(alternate(effect, k), fade * 0.92),
        });
    }
}

pub fn draw_arcs(effect: &Effect, p: f32, colors: &mut ColorCache, out: &mut Vec<DrawCommand>) {
    let e = ease_out_cubic(p);
    let fade = 1.0 - p;
    let radius = effect.size + e * 150.0;
    let rotation = effect.rotation + p * 2.1;
    let width = 1.2 + fade * 2.2;

    for k in 0..4 {
        let arc_radius = radius - k as f32 * 16.0;
        // Inner arcs of a small, young figure would have a negative radius
        if arc_radius <= 0.0 {
            continue;
        }
        let start = rotation + FRAC_PI_2 * k as f32 + p * 2.4;
        out.push(DrawCommand::Arc {
            center: effect.anchor,
            radius: arc_radius,
            start,
            end: start + FRAC_PI_3,
            stroke: Stroke::new(colors.with_alpha(alternate(effect, k), fade * 0.95), width),
        });
    }
}
