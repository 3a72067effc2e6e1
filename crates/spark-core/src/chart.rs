// File: crates/spark-core/src/chart.rs
// Summary: Sparkline chart: configuration, data staging, and primitive emission.

use std::mem;

use chrono::{DateTime, Utc};

use crate::curve;
use crate::downsample::{self, Smoothing};
use crate::error::ChartError;
use crate::locate;
use crate::primitive::{FontWeight, Primitive, Stroke, TextAnchor};
use crate::scale;
use crate::series::{self, Sample, Series};
use crate::types::{Color, FONT_SIZE, RDP_EPSILON_BASE, TARGET_POINTS, VIEWBOX_WIDTH};

/// Delivered to the crosshair listener for each (host-debounced) pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrosshairEvent {
    /// Relative pointer position across the rendered width, 0..1.
    pub position: f64,
    /// Index into the original (pre-reduction) sample sequence.
    pub index: usize,
    /// Value at that index.
    pub value: f64,
}

/// A sparkline/line chart producing drawable primitives.
///
/// `draw` runs the full pipeline once — normalize, reduce, build curves —
/// and consumes the staged data: after it returns, only the emitted
/// primitives survive, plus a retained copy of the raw primary samples when
/// a crosshair listener is registered (the locator must see true values, not
/// the reduced approximation).
pub struct SparkLine {
    view_box_width: f64,
    plot_height: f64,
    rdp_epsilon: f64,
    target_points: usize,
    line_color: Color,
    smoothing: Smoothing,
    use_bezier: bool,
    title: Option<String>,
    time_scale: Option<(String, String)>,
    fixed_range: Option<(f64, f64)>,
    staged: Vec<Sample>,
    extra: Vec<Series>,
    retained: Vec<Sample>,
    crosshair_listener: Option<Box<dyn FnMut(CrosshairEvent)>>,
}

impl SparkLine {
    /// Chart with fixed logical dimensions. Two font rows are reserved for
    /// labels above and below the plot band.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_view_box(
            width as f64,
            height as f64,
            RDP_EPSILON_BASE.max(width as f64 / 100.0),
        )
    }

    /// Fluid-width chart: the host stretches a fixed logical viewbox
    /// (`VIEWBOX_WIDTH` units wide) to whatever width it has available.
    pub fn fluid(height: u32) -> Self {
        Self::with_view_box(VIEWBOX_WIDTH as f64, height as f64, RDP_EPSILON_BASE)
    }

    fn with_view_box(width: f64, height: f64, rdp_epsilon: f64) -> Self {
        Self {
            view_box_width: width,
            plot_height: height - 2.0 * FONT_SIZE as f64,
            rdp_epsilon,
            target_points: TARGET_POINTS,
            line_color: Color::BLACK,
            smoothing: Smoothing::default(),
            use_bezier: true,
            title: None,
            time_scale: None,
            fixed_range: None,
            staged: Vec::new(),
            extra: Vec::new(),
            retained: Vec::new(),
            crosshair_listener: None,
        }
    }

    /// Logical viewbox dimensions `(width, height)`. The host needs these for
    /// its inverse text-scaling correction when the rendered aspect ratio
    /// diverges from the logical one.
    pub fn view_box(&self) -> (f64, f64) {
        (self.view_box_width, self.plot_height + 2.0 * FONT_SIZE as f64)
    }

    /// Stage primary data; any additional series are discarded.
    pub fn set_data(&mut self, samples: Vec<Sample>) {
        self.staged = samples;
        self.extra.clear();
    }

    /// Stage evenly distributed values, using the index as position.
    pub fn set_data_values(&mut self, values: &[f64]) {
        self.set_data(series::samples_from_values(values));
    }

    /// Stage data from parallel position/value slices.
    pub fn set_data_xy(&mut self, xs: &[f64], ys: &[f64]) -> Result<(), ChartError> {
        self.set_data(series::samples_from_xy(xs, ys)?);
        Ok(())
    }

    /// Stage data with timestamps as positions.
    pub fn set_data_instants(
        &mut self,
        ts: &[DateTime<Utc>],
        ys: &[f64],
    ) -> Result<(), ChartError> {
        self.set_data(series::samples_from_instants(ts, ys)?);
        Ok(())
    }

    /// Stage an additional series drawn beneath the primary one.
    pub fn add_series(&mut self, samples: Vec<Sample>, color: Color) {
        self.extra.push(Series::new(samples, color));
    }

    pub fn set_line_color(&mut self, color: Color) {
        self.line_color = color;
    }

    pub fn line_color(&self) -> Color {
        self.line_color
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Start/end labels drawn under the plot band.
    pub fn set_time_scale(&mut self, start: impl Into<String>, end: impl Into<String>) {
        self.time_scale = Some((start.into(), end.into()));
    }

    pub fn set_smoothing(&mut self, smoothing: Smoothing) {
        self.smoothing = smoothing;
    }

    pub fn smoothing(&self) -> Smoothing {
        self.smoothing
    }

    pub fn set_use_bezier(&mut self, use_bezier: bool) {
        self.use_bezier = use_bezier;
    }

    /// Fix the x-domain instead of auto-fitting to the data. Positions
    /// outside the domain still render, beyond the nominal plot area.
    pub fn set_x_range(&mut self, min: f64, max: f64) {
        self.fixed_range = Some((min, max));
    }

    /// Fix the x-domain from wall-clock instants.
    pub fn set_x_range_instants(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) {
        self.fixed_range = Some((
            start.timestamp_millis() as f64,
            end.timestamp_millis() as f64,
        ));
    }

    /// Revert to auto-fitting the x-domain.
    pub fn clear_x_range(&mut self) {
        self.fixed_range = None;
    }

    /// Register a crosshair listener. While one is registered, `draw`
    /// retains a copy of the raw primary samples for locator lookups.
    pub fn set_crosshair_listener(&mut self, listener: impl FnMut(CrosshairEvent) + 'static) {
        self.crosshair_listener = Some(Box::new(listener));
    }

    /// Locator lookup against the samples retained by the last `draw`.
    pub fn locate(&self, rel: f64) -> Option<(usize, f64)> {
        locate::locate(rel, &self.retained)
    }

    /// Feed one debounced pointer event through the locator to the listener.
    pub fn pointer_moved(&mut self, rel: f64) {
        if let Some((index, value)) = locate::locate(rel, &self.retained) {
            if let Some(listener) = self.crosshair_listener.as_mut() {
                listener(CrosshairEvent { position: rel, index, value });
            }
        }
    }

    /// Run one full pipeline pass and emit the scene.
    ///
    /// Consumes the staged data; intermediate buffers are dropped before the
    /// primitives are returned. Empty input yields an empty scene and leaves
    /// no retained state behind.
    pub fn draw(&mut self) -> Vec<Primitive> {
        let staged = mem::take(&mut self.staged);
        let extra = mem::take(&mut self.extra);

        if staged.is_empty() {
            return Vec::new();
        }
        self.retained = if self.crosshair_listener.is_some() {
            staged.clone()
        } else {
            Vec::new()
        };

        let primary = self.reduce(&scale::normalize(&staged, self.fixed_range));
        drop(staged);
        let extra_reduced: Vec<(Vec<Sample>, Color)> = extra
            .iter()
            .map(|s| (self.reduce(&scale::normalize(&s.samples, self.fixed_range)), s.color))
            .collect();
        drop(extra);

        // One value range across every series keeps the vertical scale
        // consistent between them.
        let mut sets: Vec<&[Sample]> = Vec::with_capacity(1 + extra_reduced.len());
        sets.push(primary.as_slice());
        sets.extend(extra_reduced.iter().map(|(s, _)| s.as_slice()));
        let (min, max) = series::value_range(sets).unwrap_or((0.0, 1.0));

        let fs = FONT_SIZE as f64;
        let min_line_y = self.plot_height + fs;
        let max_line_y = fs;

        let mut out = Vec::new();
        for y in [min_line_y, max_line_y] {
            out.push(Primitive::Line {
                x1: 0.0,
                y1: y,
                x2: self.view_box_width,
                y2: y,
                stroke: Stroke::dashed(self.line_color, 1.0, 2.0, 2.0),
                hidden: false,
            });
        }

        // Additional series first so the primary draws on top.
        for (samples, color) in &extra_reduced {
            out.push(self.series_primitive(samples, *color, min, max));
        }
        out.push(self.series_primitive(&primary, self.line_color, min, max));

        out.push(self.label(0.0, min_line_y - 2.0, format!("{min:.1}"), TextAnchor::Start));
        out.push(self.label(0.0, max_line_y - 2.0, format!("{max:.1}"), TextAnchor::Start));

        if let Some(title) = &self.title {
            out.push(self.label(self.view_box_width, fs - 2.5, title.clone(), TextAnchor::End));
        }
        if let Some((start, end)) = &self.time_scale {
            let y = self.plot_height + 2.0 * fs;
            out.push(Primitive::Text {
                x: 0.0,
                y,
                content: start.clone(),
                size: FONT_SIZE,
                anchor: TextAnchor::Start,
                weight: FontWeight::Normal,
                fill: self.line_color,
            });
            out.push(Primitive::Text {
                x: self.view_box_width,
                y,
                content: end.clone(),
                size: FONT_SIZE,
                anchor: TextAnchor::End,
                weight: FontWeight::Normal,
                fill: self.line_color,
            });
        }

        if self.crosshair_listener.is_some() {
            out.push(Primitive::Line {
                x1: 0.0,
                y1: fs,
                x2: 0.0,
                y2: self.plot_height + fs,
                stroke: Stroke::solid(Color::GRAY, 1.0),
                hidden: true,
            });
        }

        out
    }

    fn reduce(&self, points: &[Sample]) -> Vec<Sample> {
        // Epsilon is expressed in viewbox units; the simplifier works on
        // normalized coordinates.
        downsample::reduce(
            points,
            self.smoothing,
            self.target_points,
            self.rdp_epsilon / self.view_box_width,
        )
    }

    fn series_primitive(&self, samples: &[Sample], color: Color, min: f64, max: f64) -> Primitive {
        let fs = FONT_SIZE as f64;
        let points: Vec<(f64, f64)> = samples
            .iter()
            .map(|s| {
                (
                    s.x * self.view_box_width,
                    scale::y_to_screen(s.y, min, max, self.plot_height, fs),
                )
            })
            .collect();
        curve::line_primitive(&points, color, self.use_bezier)
    }

    fn label(&self, x: f64, y: f64, content: String, anchor: TextAnchor) -> Primitive {
        Primitive::Text {
            x,
            y,
            content,
            size: FONT_SIZE,
            anchor,
            weight: FontWeight::Bold,
            fill: self.line_color,
        }
    }
}
