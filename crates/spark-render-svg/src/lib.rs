// File: crates/spark-render-svg/src/lib.rs
// Summary: Serializes spark-core primitives into an SVG document string.

use std::fmt::Write;

use spark_core::{FontWeight, PathCommand, Primitive, Stroke, TextAnchor};

/// Serializes a primitive list into a standalone SVG document.
///
/// The core decides geometry and style; this backend only maps each
/// primitive onto its SVG element. Sparklines stretch to the host width, so
/// they disable aspect-ratio preservation; the wind rose keeps it.
pub struct SvgRenderer {
    preserve_aspect_ratio: bool,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self { preserve_aspect_ratio: true }
    }

    /// Backend for fluid-width sparklines (`preserveAspectRatio="none"`).
    pub fn stretched() -> Self {
        Self { preserve_aspect_ratio: false }
    }

    pub fn render(&self, primitives: &[Primitive], view_box: (f64, f64)) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\"",
            view_box.0, view_box.1
        );
        if !self.preserve_aspect_ratio {
            out.push_str(" preserveAspectRatio=\"none\"");
        }
        out.push_str(">\n");
        for p in primitives {
            self.render_primitive(&mut out, p);
        }
        out.push_str("</svg>\n");
        out
    }

    fn render_primitive(&self, out: &mut String, p: &Primitive) {
        match p {
            Primitive::Line { x1, y1, x2, y2, stroke, hidden } => {
                let _ = write!(out, "  <line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\"");
                write_stroke(out, stroke);
                if *hidden {
                    out.push_str(" visibility=\"hidden\"");
                }
                out.push_str("/>\n");
            }
            Primitive::Polyline { points, stroke } => {
                out.push_str("  <polyline points=\"");
                for (i, (x, y)) in points.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    let _ = write!(out, "{x},{y}");
                }
                out.push('"');
                out.push_str(" fill=\"none\"");
                write_stroke(out, stroke);
                out.push_str("/>\n");
            }
            Primitive::Path { commands, stroke, fill } => {
                out.push_str("  <path d=\"");
                for c in commands {
                    write_command(out, c);
                }
                out.push('"');
                match fill {
                    Some(f) => {
                        let _ = write!(out, " fill=\"{}\" fill-opacity=\"{}\"", f.color.to_css(), f.opacity);
                    }
                    None => out.push_str(" fill=\"none\""),
                }
                if let Some(s) = stroke {
                    write_stroke(out, s);
                }
                out.push_str("/>\n");
            }
            Primitive::Text { x, y, content, size, anchor, weight, fill } => {
                let anchor = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                let _ = write!(
                    out,
                    "  <text x=\"{x}\" y=\"{y}\" font-size=\"{size}\" text-anchor=\"{anchor}\""
                );
                if *weight == FontWeight::Bold {
                    out.push_str(" font-weight=\"bold\"");
                }
                let _ = write!(out, " fill=\"{}\">{}</text>\n", fill.to_css(), escape(content));
            }
            Primitive::Circle { cx, cy, r, fill, stroke } => {
                let _ = write!(out, "  <circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\"");
                match fill {
                    Some(c) => { let _ = write!(out, " fill=\"{}\"", c.to_css()); }
                    None => out.push_str(" fill=\"none\""),
                }
                if let Some(s) = stroke {
                    write_stroke(out, s);
                }
                out.push_str("/>\n");
            }
        }
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn write_stroke(out: &mut String, s: &Stroke) {
    let _ = write!(out, " stroke=\"{}\" stroke-width=\"{}\"", s.color.to_css(), s.width);
    if let Some((on, off)) = s.dash {
        let _ = write!(out, " stroke-dasharray=\"{on},{off}\"");
    }
}

fn write_command(out: &mut String, c: &PathCommand) {
    match *c {
        PathCommand::MoveTo(x, y) => { let _ = write!(out, "M{x} {y} "); }
        PathCommand::LineTo(x, y) => { let _ = write!(out, "L{x} {y} "); }
        PathCommand::CubicTo(c1x, c1y, c2x, c2y, x, y) => {
            let _ = write!(out, "C{c1x} {c1y} {c2x} {c2y} {x} {y} ");
        }
        PathCommand::ArcTo { rx, ry, large_arc, sweep, x, y } => {
            let _ = write!(
                out,
                "A{rx} {ry} 0 {} {} {x} {y} ",
                large_arc as u8, sweep as u8
            );
        }
        PathCommand::Close => out.push_str("Z "),
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_core::{Color, Fill};

    #[test]
    fn line_and_visibility() {
        let p = Primitive::Line {
            x1: 0.0,
            y1: 10.0,
            x2: 200.0,
            y2: 10.0,
            stroke: Stroke::dashed(Color::BLACK, 1.0, 2.0, 2.0),
            hidden: true,
        };
        let svg = SvgRenderer::new().render(&[p], (200.0, 100.0));
        assert!(svg.contains("stroke-dasharray=\"2,2\""));
        assert!(svg.contains("visibility=\"hidden\""));
        assert!(svg.contains("viewBox=\"0 0 200 100\""));
    }

    #[test]
    fn stretched_disables_aspect_ratio() {
        let svg = SvgRenderer::stretched().render(&[], (1000.0, 100.0));
        assert!(svg.contains("preserveAspectRatio=\"none\""));
        let svg = SvgRenderer::new().render(&[], (340.0, 340.0));
        assert!(!svg.contains("preserveAspectRatio"));
    }

    #[test]
    fn wedge_path_serializes_arc() {
        let p = Primitive::Path {
            commands: vec![
                PathCommand::MoveTo(170.0, 170.0),
                PathCommand::LineTo(170.0, 30.0),
                PathCommand::ArcTo { rx: 140.0, ry: 140.0, large_arc: false, sweep: true, x: 200.0, y: 40.0 },
                PathCommand::Close,
            ],
            stroke: Some(Stroke::solid(Color::BLACK, 1.0)),
            fill: Some(Fill { color: Color::BLACK, opacity: 0.4 }),
        };
        let svg = SvgRenderer::new().render(&[p], (340.0, 340.0));
        assert!(svg.contains("A140 140 0 0 1 200 40"));
        assert!(svg.contains("fill-opacity=\"0.4\""));
    }

    #[test]
    fn text_escapes_markup() {
        let p = Primitive::Text {
            x: 0.0,
            y: 0.0,
            content: "a<b&c".into(),
            size: 10,
            anchor: TextAnchor::Start,
            weight: FontWeight::Normal,
            fill: Color::BLACK,
        };
        let svg = SvgRenderer::new().render(&[p], (10.0, 10.0));
        assert!(svg.contains("a&lt;b&amp;c"));
    }
}
