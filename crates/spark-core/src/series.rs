// File: crates/spark-core/src/series.rs
// Summary: Sample model, sample-vector builders, and shared value-range scan.

use chrono::{DateTime, Utc};

use crate::error::ChartError;
use crate::types::Color;

/// One (position, value) observation. Positions are monotonic non-decreasing
/// within an input sequence (time or index); values are unconstrained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Collapse a wall-clock instant to an epoch-millisecond position.
    pub fn at_instant(t: DateTime<Utc>, y: f64) -> Self {
        Self { x: t.timestamp_millis() as f64, y }
    }
}

/// Build samples from bare values, using the index as position.
pub fn samples_from_values(values: &[f64]) -> Vec<Sample> {
    values
        .iter()
        .enumerate()
        .map(|(i, &y)| Sample::new(i as f64, y))
        .collect()
}

/// Build samples from parallel position/value slices.
pub fn samples_from_xy(xs: &[f64], ys: &[f64]) -> Result<Vec<Sample>, ChartError> {
    if xs.len() != ys.len() {
        return Err(ChartError::LengthMismatch { positions: xs.len(), values: ys.len() });
    }
    Ok(xs.iter().zip(ys).map(|(&x, &y)| Sample::new(x, y)).collect())
}

/// Build samples from parallel timestamp/value slices.
pub fn samples_from_instants(ts: &[DateTime<Utc>], ys: &[f64]) -> Result<Vec<Sample>, ChartError> {
    if ts.len() != ys.len() {
        return Err(ChartError::LengthMismatch { positions: ts.len(), values: ys.len() });
    }
    Ok(ts.iter().zip(ys).map(|(&t, &y)| Sample::at_instant(t, y)).collect())
}

/// A sample sequence with its display color.
#[derive(Clone, Debug)]
pub struct Series {
    pub samples: Vec<Sample>,
    pub color: Color,
}

impl Series {
    pub fn new(samples: Vec<Sample>, color: Color) -> Self {
        Self { samples, color }
    }
}

/// Global y-range across every sample set, so all series in a chart share one
/// vertical scale. `None` when every set is empty.
pub fn value_range<'a, I>(sets: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = &'a [Sample]>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for set in sets {
        for s in set {
            min = min.min(s.y);
            max = max.max(s.y);
            any = true;
        }
    }
    if any { Some((min, max)) } else { None }
}
