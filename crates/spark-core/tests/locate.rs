// File: crates/spark-core/tests/locate.rs
// Purpose: Crosshair locator round trips on the raw sample sequence.

use spark_core::series::samples_from_values;
use spark_core::locate;

const VALUES: [f64; 10] = [5.0, 15.0, 10.0, 25.0, 20.0, 30.0, 15.0, 35.0, 25.0, 40.0];

#[test]
fn endpoints_round_trip() {
    let samples = samples_from_values(&VALUES);
    assert_eq!(locate(0.0, &samples), Some((0, 5.0)));
    assert_eq!(locate(1.0, &samples), Some((9, 40.0)));
}

#[test]
fn midpoint_rounds_half_up() {
    let samples = samples_from_values(&VALUES);
    // round(0.5 * 9) = round(4.5) = 5
    assert_eq!(locate(0.5, &samples), Some((5, 30.0)));
}

#[test]
fn out_of_range_positions_clamp() {
    let samples = samples_from_values(&VALUES);
    assert_eq!(locate(-0.2, &samples), Some((0, 5.0)));
    assert_eq!(locate(1.7, &samples), Some((9, 40.0)));
}

#[test]
fn empty_series_yields_nothing() {
    assert_eq!(locate(0.5, &[]), None);
}

#[test]
fn single_sample_always_index_zero() {
    let samples = samples_from_values(&[7.0]);
    for rel in [0.0, 0.3, 1.0] {
        assert_eq!(locate(rel, &samples), Some((0, 7.0)));
    }
}
