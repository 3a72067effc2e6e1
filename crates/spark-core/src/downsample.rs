// File: crates/spark-core/src/downsample.rs
// Summary: Downsampling engine (bucket averaging; shape-preserving simplification).

use crate::series::Sample;

/// Reduction algorithm applied to normalized points before curve building.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Smoothing {
    /// Identity; callers accept the O(n) rendering cost this implies.
    None,
    /// Fixed-width bucket averaging toward a target point count.
    #[default]
    BucketAverage,
    /// Ramer-Douglas-Peucker shape-preserving simplification.
    Rdp,
}

/// Apply the configured reduction to one normalized series.
pub fn reduce(points: &[Sample], smoothing: Smoothing, target: usize, epsilon: f64) -> Vec<Sample> {
    match smoothing {
        Smoothing::None => points.to_vec(),
        Smoothing::BucketAverage => bucket_average(points, target),
        Smoothing::Rdp => rdp(points, epsilon),
    }
}

/// Average normalized points into `max(3, round(target * span))` buckets over
/// the covered x-span, which may be narrower than [0,1] for partial or
/// fixed-domain data. Each non-empty bucket is represented by its midpoint x
/// and mean y. Returns the input unchanged when reduction would be
/// meaningless: already at or under `target` points, covered span under 0.01,
/// or fewer than 3 surviving buckets.
pub fn bucket_average(points: &[Sample], target: usize) -> Vec<Sample> {
    if points.len() <= target {
        return points.to_vec();
    }

    let mut min_x = points[0].x;
    let mut max_x = points[0].x;
    for p in points {
        if p.x < min_x { min_x = p.x; }
        if p.x > max_x { max_x = p.x; }
    }
    let span = max_x - min_x;
    if span < 0.01 {
        return points.to_vec();
    }

    // Bucket count scales with the covered span so partial data is not
    // over-smoothed relative to its coverage.
    let buckets = ((target as f64 * span).round() as usize).max(3);
    let width = span / buckets as f64;

    let mut sums = vec![0.0f64; buckets];
    let mut counts = vec![0usize; buckets];
    for p in points {
        // Half-open [start, end); the point at the exact span maximum joins
        // the last bucket once instead of opening a phantom one.
        let idx = (((p.x - min_x) / width) as usize).min(buckets - 1);
        sums[idx] += p.y;
        counts[idx] += 1;
    }

    let mut out = Vec::with_capacity(buckets);
    for i in 0..buckets {
        if counts[i] == 0 {
            continue;
        }
        let mid = min_x + (i as f64 + 0.5) * width;
        out.push(Sample::new(mid, sums[i] / counts[i] as f64));
    }

    if out.len() < 3 {
        return points.to_vec();
    }
    out
}

/// Shape-preserving simplification. Y is renormalized to the series' own
/// range so `epsilon` is independent of value-domain scale. Endpoints are
/// always kept and order is preserved. An explicit range stack replaces
/// call-stack recursion, so pathological inputs cannot overflow the stack.
pub fn rdp(points: &[Sample], epsilon: f64) -> Vec<Sample> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let mut min_y = points[0].y;
    let mut max_y = points[0].y;
    for p in points {
        if p.y < min_y { min_y = p.y; }
        if p.y > max_y { max_y = p.y; }
    }
    let mut range_y = max_y - min_y;
    if range_y < 1e-3 {
        range_y = 1.0;
    }

    let scaled: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (p.x, (p.y - min_y) / range_y))
        .collect();

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut stack = vec![(0usize, n - 1)];
    while let Some((start, end)) = stack.pop() {
        if end <= start + 1 {
            continue;
        }
        let mut max_dist = 0.0f64;
        let mut max_idx = start;
        for i in (start + 1)..end {
            let d = perpendicular_distance(scaled[i], scaled[start], scaled[end]);
            if d > max_dist {
                max_dist = d;
                max_idx = i;
            }
        }
        if max_dist > epsilon {
            keep[max_idx] = true;
            stack.push((start, max_idx));
            stack.push((max_idx, end));
        }
    }

    points
        .iter()
        .zip(&keep)
        .filter(|(_, &k)| k)
        .map(|(p, _)| *p)
        .collect()
}

/// Point-to-chord distance; Euclidean fallback when the chord has zero length.
fn perpendicular_distance(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        let px = p.0 - a.0;
        let py = p.1 - a.1;
        return (px * px + py * py).sqrt();
    }
    let area2 = ((b.0 - a.0) * (a.1 - p.1) - (a.0 - p.0) * (b.1 - a.1)).abs();
    area2 / len_sq.sqrt()
}
