use crate::fx::{color::Rgba, effect::Vec2};

/// Outline style of a stroked primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
}

impl Stroke {
    pub fn new(color: Rgba, width: f32) -> Self {
        Self { color, width }
    }
}

/// Backend-neutral drawing primitive in viewport coordinates (y grows
/// downwards, angles run clockwise on screen).
///
/// A frame is the full list of commands; the consumer clears the previous
/// frame before drawing them in order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Stroked full circle.
    Circle {
        center: Vec2,
        radius: f32,
        stroke: Stroke,
    },
    /// Filled disc.
    Dot {
        center: Vec2,
        radius: f32,
        fill: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
    /// Connected points, optionally closed, filled, or stroked.
    Polyline {
        points: Vec<Vec2>,
        closed: bool,
        fill: Option<Rgba>,
        stroke: Option<Stroke>,
    },
    /// Stroked arc from `start` to `end` radians.
    Arc {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        stroke: Stroke,
    },
}

impl DrawCommand {
    /// Most opaque alpha the command paints with.
    pub fn alpha(&self) -> f32 {
        match self {
            DrawCommand::Circle { stroke, .. }
            | DrawCommand::Line { stroke, .. }
            | DrawCommand::Arc { stroke, .. } => stroke.color.a,
            DrawCommand::Dot { fill, .. } => fill.a,
            DrawCommand::Polyline { fill, stroke, .. } => {
                let fill = fill.map_or(0.0, |c| c.a);
                let stroke = stroke.map_or(0.0, |s| s.color.a);
                fill.max(stroke)
            }
        }
    }
}
