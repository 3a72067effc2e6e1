// File: crates/spark-core/src/sector.rs
// Summary: Fixed-cardinality angular aggregation and compass labels.

/// 16-point compass rose, fixed regardless of a chart's own sector count.
const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE",
    "S", "SSW", "SW", "WSW", "W", "WNW", "NW", "NNW",
];

/// Compass label for a direction in degrees (0 = north, clockwise).
pub fn compass_label(degrees: f64) -> &'static str {
    let idx = (degrees.rem_euclid(360.0) / 22.5).round() as usize % 16;
    COMPASS[idx]
}

/// Sector index for an angle: `round(angle / (360/n)) mod n`.
pub fn sector_index(angle_degrees: f64, sectors: usize) -> usize {
    let per = 360.0 / sectors as f64;
    (angle_degrees.rem_euclid(360.0) / per).round() as usize % sectors
}

/// Streams (direction, speed) observations into fixed-size per-sector
/// accumulators: an observation count and a cubic-power energy term.
/// O(1) per observation and O(sectors) memory at any input size, which is
/// what lets a million observations feed a sixteen-slot rose.
#[derive(Clone, Debug)]
pub struct SectorAccumulator {
    counts: Vec<f64>,
    energies: Vec<f64>,
}

impl SectorAccumulator {
    pub fn new(sectors: usize) -> Self {
        Self {
            counts: vec![0.0; sectors],
            energies: vec![0.0; sectors],
        }
    }

    /// Fold one observation into its sector. Accumulation is commutative, so
    /// input order never affects the final sums.
    pub fn observe(&mut self, angle_degrees: f64, speed: f64) {
        let idx = sector_index(angle_degrees, self.counts.len());
        self.counts[idx] += 1.0;
        self.energies[idx] += speed * speed * speed;
    }

    pub fn sectors(&self) -> usize {
        self.counts.len()
    }

    /// Per-sector observation counts; always exactly `sectors` long.
    pub fn counts(&self) -> &[f64] {
        &self.counts
    }

    /// Per-sector cubic-power energy sums; always exactly `sectors` long.
    pub fn energies(&self) -> &[f64] {
        &self.energies
    }
}
