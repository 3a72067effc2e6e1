// File: crates/spark-core/src/primitive.rs
// Summary: Backend-agnostic drawable primitives emitted by the charts.

use crate::types::Color;

/// Stroke styling shared by line-like primitives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    /// Dash pattern as (on, off) lengths; `None` for a solid stroke.
    pub dash: Option<(f64, f64)>,
}

impl Stroke {
    pub const fn solid(color: Color, width: f64) -> Self {
        Self { color, width, dash: None }
    }

    pub const fn dashed(color: Color, width: f64, on: f64, off: f64) -> Self {
        Self { color, width, dash: Some((on, off)) }
    }
}

/// Path fill styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fill {
    pub color: Color,
    pub opacity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    /// Two control points, then the endpoint.
    CubicTo(f64, f64, f64, f64, f64, f64),
    /// Elliptical arc to (x, y) with radii (rx, ry).
    ArcTo { rx: f64, ry: f64, large_arc: bool, sweep: bool, x: f64, y: f64 },
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// One drawable node for the host scene graph. The core decides geometry and
/// style only; serialization and painting belong to the backend.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Stroke,
        /// Emitted but not initially visible (crosshair line).
        hidden: bool,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        stroke: Stroke,
    },
    Path {
        commands: Vec<PathCommand>,
        stroke: Option<Stroke>,
        fill: Option<Fill>,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        size: u32,
        anchor: TextAnchor,
        weight: FontWeight,
        fill: Color,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
}
