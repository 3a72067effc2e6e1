// File: crates/spark-core/src/locate.rs
// Summary: Crosshair locator mapping relative pointer positions to samples.

use crate::series::Sample;

/// Maps a relative pointer position in [0,1] back onto the original series.
///
/// Reduction is lossy, so lookups consult the retained raw samples rather
/// than whatever the last draw emitted; hover feedback therefore reflects
/// true underlying data. Index is `round(rel * (n-1))` clamped to the series.
/// Pure and stateless; the host debounces pointer events before calling.
pub fn locate(rel: f64, samples: &[Sample]) -> Option<(usize, f64)> {
    if samples.is_empty() {
        return None;
    }
    let n = samples.len();
    let idx = (rel.clamp(0.0, 1.0) * (n - 1) as f64).round() as usize;
    let idx = idx.min(n - 1);
    Some((idx, samples[idx].y))
}
