// File: crates/spark-core/src/scale.rs
// Summary: Range normalizer (positions onto [0,1]) and value-to-screen mapping.

use crate::series::Sample;

/// Width threshold under which a domain is treated as zero-width.
const DEGENERATE_RANGE: f64 = 1e-3;

/// Maps sample positions onto the canonical [0,1] domain.
///
/// With a fixed domain, positions outside it map outside [0,1]; that is not
/// an error and simply renders beyond the nominal plot area. A numerically
/// negligible domain width falls back to even spacing in original order.
/// Input is assumed sorted by position; y passes through unchanged.
pub fn normalize(samples: &[Sample], fixed_domain: Option<(f64, f64)>) -> Vec<Sample> {
    if samples.is_empty() {
        return Vec::new();
    }

    let (min_x, max_x) = match fixed_domain {
        Some(d) => d,
        None => (samples[0].x, samples[samples.len() - 1].x),
    };
    let range = max_x - min_x;

    if range.abs() < DEGENERATE_RANGE {
        // Zero-width domain: redistribute evenly instead of dividing by it.
        let n = samples.len();
        return samples
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let x = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
                Sample::new(x, s.y)
            })
            .collect();
    }

    samples
        .iter()
        .map(|s| Sample::new((s.x - min_x) / range, s.y))
        .collect()
}

/// Value-to-screen-y mapping over the plot band starting at `top` and
/// spanning `height` units. Screen y grows downward, so larger values land
/// nearer the top.
pub fn y_to_screen(y: f64, min: f64, max: f64, height: f64, top: f64) -> f64 {
    let span = (max - min).max(1e-12);
    top + height - (y - min) / span * height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_y_orientation() {
        // min at the bottom of the band, max at the top
        assert_eq!(y_to_screen(0.0, 0.0, 10.0, 100.0, 10.0), 110.0);
        assert_eq!(y_to_screen(10.0, 0.0, 10.0, 100.0, 10.0), 10.0);
    }

    #[test]
    fn flat_series_maps_to_band_bottom() {
        let y = y_to_screen(5.0, 5.0, 5.0, 100.0, 0.0);
        assert!(y.is_finite());
        assert_eq!(y, 100.0);
    }
}
