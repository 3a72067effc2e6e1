// File: crates/spark-core/src/windrose.rs
// Summary: Wind-rose chart: wedge geometry, legend, and sector click mapping.

use crate::error::ChartError;
use crate::primitive::{Fill, FontWeight, PathCommand, Primitive, Stroke, TextAnchor};
use crate::sector::{compass_label, sector_index};
use crate::types::Color;

/// Margin reserved around the rose for cardinal labels and the legend.
const LABEL_MARGIN: f64 = 40.0;

/// One directional series: a label, a color, and exactly one value per sector.
#[derive(Clone, Debug)]
pub struct RoseSeries {
    pub label: String,
    pub color: Color,
    pub values: Vec<f64>,
}

/// Data delivered when a sector is clicked.
#[derive(Clone, Debug, PartialEq)]
pub struct SectorHit {
    pub sector_index: usize,
    pub direction_label: &'static str,
    pub center_degrees: u32,
    /// Absolute value per series in the clicked sector.
    pub series_values: Vec<f64>,
    /// Share of each series' total in the clicked sector, 0..100.
    pub series_percentages: Vec<f64>,
}

/// A directional distribution chart over N equal angular sectors.
///
/// Memory is O(sectors) per series regardless of how many observations fed
/// the aggregation — unlike the sparkline path, whose footprint follows the
/// reduced point count.
pub struct WindRose {
    size: f64,
    sectors: usize,
    series: Vec<RoseSeries>,
    title: Option<String>,
    show_sector_lines: bool,
    click_listener: Option<Box<dyn FnMut(SectorHit)>>,
}

impl WindRose {
    pub fn new(size: u32, sectors: usize) -> Self {
        Self {
            size: size as f64,
            sectors,
            series: Vec::new(),
            title: None,
            show_sector_lines: true,
            click_listener: None,
        }
    }

    /// Rose with the conventional 16 sectors.
    pub fn with_default_sectors(size: u32) -> Self {
        Self::new(size, 16)
    }

    pub fn sectors(&self) -> usize {
        self.sectors
    }

    /// Logical viewbox dimensions `(width, height)`.
    pub fn view_box(&self) -> (f64, f64) {
        let total = self.size + LABEL_MARGIN;
        (total, total)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_show_sector_lines(&mut self, show: bool) {
        self.show_sector_lines = show;
    }

    pub fn set_sector_click_listener(&mut self, listener: impl FnMut(SectorHit) + 'static) {
        self.click_listener = Some(Box::new(listener));
    }

    /// Add a series with one value per sector. A mismatched length is a
    /// contract violation and is rejected here, not at render time — silent
    /// truncation would draw a plausible but wrong rose.
    pub fn add_series(
        &mut self,
        label: impl Into<String>,
        color: Color,
        values: Vec<f64>,
    ) -> Result<(), ChartError> {
        if values.len() != self.sectors {
            return Err(ChartError::SectorCountMismatch {
                expected: self.sectors,
                got: values.len(),
            });
        }
        self.series.push(RoseSeries { label: label.into(), color, values });
        Ok(())
    }

    pub fn series_list(&self) -> &[RoseSeries] {
        &self.series
    }

    pub fn clear_series(&mut self) {
        self.series.clear();
    }

    /// Resolve a pointer angle (degrees, 0 = north, clockwise) to its sector
    /// with per-series absolute values and percentage shares.
    pub fn sector_hit(&self, angle_degrees: f64) -> SectorHit {
        let idx = sector_index(angle_degrees, self.sectors);
        let per = 360.0 / self.sectors as f64;
        let center_degrees = ((idx as f64 * per).round() as i64).rem_euclid(360) as u32;

        let mut series_values = Vec::with_capacity(self.series.len());
        let mut series_percentages = Vec::with_capacity(self.series.len());
        for s in &self.series {
            let total: f64 = s.values.iter().sum();
            let value = s.values[idx];
            series_values.push(value);
            series_percentages.push(if total > 0.0 { value / total * 100.0 } else { 0.0 });
        }

        SectorHit {
            sector_index: idx,
            direction_label: compass_label(center_degrees as f64),
            center_degrees,
            series_values,
            series_percentages,
        }
    }

    /// Feed one click through the hit mapping to the listener.
    pub fn clicked(&mut self, angle_degrees: f64) {
        let hit = self.sector_hit(angle_degrees);
        if let Some(listener) = self.click_listener.as_mut() {
            listener(hit);
        }
    }

    /// Emit the scene: reference circles, cardinal labels, per-series wedges,
    /// sector hairlines, legend, and title. Empty chart emits nothing.
    pub fn draw(&self) -> Vec<Primitive> {
        if self.series.is_empty() {
            return Vec::new();
        }

        let half_margin = LABEL_MARGIN / 2.0;
        let cx = self.size / 2.0 + half_margin;
        let cy = self.size / 2.0 + half_margin;
        let max_radius = self.size / 2.0 - 10.0;
        let per = 360.0 / self.sectors as f64;

        let mut out = Vec::new();

        // Quarter-radius reference circles.
        let grid = Color::new(100, 100, 100);
        for i in 1..=4 {
            out.push(Primitive::Circle {
                cx,
                cy,
                r: max_radius * i as f64 / 4.0,
                fill: None,
                stroke: Some(Stroke::solid(grid, 0.5)),
            });
        }

        // Cardinal labels, with radial lines standing in for hairlines when
        // sector lines are off.
        let cardinals = ["N", "E", "S", "W"];
        for (i, name) in cardinals.iter().enumerate() {
            let angle = (i as f64 * 90.0 - 90.0).to_radians();
            if !self.show_sector_lines {
                out.push(Primitive::Line {
                    x1: cx,
                    y1: cy,
                    x2: cx + angle.cos() * max_radius,
                    y2: cy + angle.sin() * max_radius,
                    stroke: Stroke::solid(Color::new(80, 80, 80), 0.5),
                    hidden: false,
                });
            }
            out.push(Primitive::Text {
                x: cx + angle.cos() * (max_radius + 12.0),
                y: cy + angle.sin() * (max_radius + 12.0) + 4.0,
                content: (*name).to_string(),
                size: 10,
                anchor: TextAnchor::Middle,
                weight: FontWeight::Normal,
                fill: Color::new(180, 180, 180),
            });
        }

        // Wedges; the first series fills, later ones outline so they stay
        // visually distinct. Each series scales to its own maximum.
        for (series_idx, s) in self.series.iter().enumerate() {
            let series_max = s.values.iter().cloned().fold(0.0f64, f64::max);
            if series_max == 0.0 {
                continue;
            }
            for (i, &value) in s.values.iter().enumerate() {
                if value == 0.0 {
                    continue;
                }
                let radius = value / series_max * max_radius;
                let commands = wedge_commands(cx, cy, radius, i as f64 * per, per);
                let (stroke, fill) = if series_idx == 0 {
                    (
                        Some(Stroke::solid(s.color, 1.0)),
                        Some(Fill { color: s.color, opacity: 0.4 }),
                    )
                } else {
                    (Some(Stroke::solid(s.color, 2.0)), None)
                };
                out.push(Primitive::Path { commands, stroke, fill });
            }
        }

        if self.show_sector_lines {
            for i in 0..self.sectors {
                let angle = (i as f64 * per - per / 2.0 - 90.0).to_radians();
                out.push(Primitive::Line {
                    x1: cx,
                    y1: cy,
                    x2: cx + angle.cos() * max_radius,
                    y2: cy + angle.sin() * max_radius,
                    stroke: Stroke::solid(Color::new(60, 60, 60), 0.5),
                    hidden: false,
                });
            }
        }

        // Centered legend under the rose.
        let legend_y = self.size + 32.0;
        let item_spacing = 70.0;
        let legend_start_x = cx - (self.series.len() - 1) as f64 * item_spacing / 2.0;
        for (i, s) in self.series.iter().enumerate() {
            let x = legend_start_x + i as f64 * item_spacing;
            out.push(Primitive::Circle {
                cx: x - 4.0,
                cy: legend_y,
                r: 4.0,
                fill: Some(s.color),
                stroke: None,
            });
            out.push(Primitive::Text {
                x: x + 4.0,
                y: legend_y + 3.0,
                content: s.label.clone(),
                size: 9,
                anchor: TextAnchor::Start,
                weight: FontWeight::Normal,
                fill: Color::new(180, 180, 180),
            });
        }

        if let Some(title) = &self.title {
            out.push(Primitive::Text {
                x: cx,
                y: 12.0,
                content: title.clone(),
                size: 11,
                anchor: TextAnchor::Middle,
                weight: FontWeight::Normal,
                fill: Color::new(200, 200, 200),
            });
        }

        out
    }
}

/// Wedge centered on `center_degrees`, spanning half a sector each side.
/// Degrees are compass-style (0 = north, clockwise); the -90 shift moves
/// screen-space zero from east to north.
fn wedge_commands(cx: f64, cy: f64, radius: f64, center_degrees: f64, width_degrees: f64) -> Vec<PathCommand> {
    let start = (center_degrees - width_degrees / 2.0 - 90.0).to_radians();
    let end = (center_degrees + width_degrees / 2.0 - 90.0).to_radians();
    vec![
        PathCommand::MoveTo(cx, cy),
        PathCommand::LineTo(cx + start.cos() * radius, cy + start.sin() * radius),
        PathCommand::ArcTo {
            rx: radius,
            ry: radius,
            large_arc: false,
            sweep: true,
            x: cx + end.cos() * radius,
            y: cy + end.sin() * radius,
        },
        PathCommand::Close,
    ]
}
