// File: crates/spark-core/src/types.rs
// Summary: Shared types and constants (viewbox units, colors, reduction targets).

/// Logical viewbox width used by fluid-width sparklines.
pub const VIEWBOX_WIDTH: u32 = 1000;
/// Label font size in viewbox units.
pub const FONT_SIZE: u32 = 10;
/// Default bucket-averaging target point count.
pub const TARGET_POINTS: usize = 50;
/// Minimum simplification tolerance in viewbox units.
pub const RDP_EPSILON_BASE: f64 = 1.0;

/// Plain RGB color carried on emitted primitives.
/// The core never interprets colors; backends serialize them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const GRAY: Color = Color::new(128, 128, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS serialization, e.g. `rgb(64,160,255)`.
    pub fn to_css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}
