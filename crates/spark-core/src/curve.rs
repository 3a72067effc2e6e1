// File: crates/spark-core/src/curve.rs
// Summary: Curve builder turning reduced screen-space points into one primitive.

use crate::primitive::{PathCommand, Primitive, Stroke};
use crate::types::Color;

/// Catmull-Rom tension divisor for control-point placement.
const TENSION: f64 = 6.0;

/// Round to one decimal digit to bound primitive size.
pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Build the drawable for one reduced series: a smooth cubic path when
/// requested and at least two points exist, otherwise a polyline.
pub fn line_primitive(points: &[(f64, f64)], color: Color, use_bezier: bool) -> Primitive {
    if use_bezier && points.len() >= 2 {
        catmull_rom_path(points, color)
    } else {
        polyline(points, color)
    }
}

/// Connected-segment primitive from screen-space points.
pub fn polyline(points: &[(f64, f64)], color: Color) -> Primitive {
    Primitive::Polyline {
        points: points.iter().map(|&(x, y)| (round1(x), round1(y))).collect(),
        stroke: Stroke::solid(color, 1.0),
    }
}

/// Smooth cubic path passing through every point, using a Catmull-Rom-style
/// construction with neighbors clamped at the ends. Degenerate inputs: empty
/// points produce an empty path, one point a bare move, two points a straight
/// segment (the construction needs a neighbor on each side).
pub fn catmull_rom_path(points: &[(f64, f64)], color: Color) -> Primitive {
    let mut commands = Vec::new();

    if let Some(&(x0, y0)) = points.first() {
        commands.push(PathCommand::MoveTo(round1(x0), round1(y0)));

        if points.len() == 2 {
            commands.push(PathCommand::LineTo(round1(points[1].0), round1(points[1].1)));
        } else if points.len() > 2 {
            for i in 0..points.len() - 1 {
                let p0 = points[i.saturating_sub(1)];
                let p1 = points[i];
                let p2 = points[i + 1];
                let p3 = points[(i + 2).min(points.len() - 1)];

                commands.push(PathCommand::CubicTo(
                    round1(p1.0 + (p2.0 - p0.0) / TENSION),
                    round1(p1.1 + (p2.1 - p0.1) / TENSION),
                    round1(p2.0 - (p3.0 - p1.0) / TENSION),
                    round1(p2.1 - (p3.1 - p1.1) / TENSION),
                    round1(p2.0),
                    round1(p2.1),
                ));
            }
        }
    }

    Primitive::Path {
        commands,
        stroke: Some(Stroke::solid(color, 1.0)),
        fill: None,
    }
}
