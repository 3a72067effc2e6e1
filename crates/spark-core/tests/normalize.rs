// File: crates/spark-core/tests/normalize.rs
// Purpose: Range-normalizer behavior, including degenerate-domain fallbacks.

use spark_core::scale::normalize;
use spark_core::Sample;

#[test]
fn canonical_input_is_unchanged() {
    // Already in [0,1], strictly increasing, min=0 max=1.
    let input: Vec<Sample> = (0..=10)
        .map(|i| Sample::new(i as f64 / 10.0, i as f64))
        .collect();
    let out = normalize(&input, None);
    assert_eq!(out.len(), input.len());
    for (a, b) in input.iter().zip(&out) {
        assert!((a.x - b.x).abs() < 1e-12);
        assert_eq!(a.y, b.y);
    }
}

#[test]
fn auto_fit_maps_first_and_last_to_unit_interval() {
    let input = vec![
        Sample::new(100.0, 1.0),
        Sample::new(150.0, 2.0),
        Sample::new(300.0, 3.0),
    ];
    let out = normalize(&input, None);
    assert_eq!(out[0].x, 0.0);
    assert!((out[1].x - 0.25).abs() < 1e-12);
    assert_eq!(out[2].x, 1.0);
    // y passes through untouched
    assert_eq!(out[1].y, 2.0);
}

#[test]
fn zero_width_domain_redistributes_evenly() {
    let input: Vec<Sample> = (0..5).map(|i| Sample::new(42.0, i as f64)).collect();
    let out = normalize(&input, None);
    let xs: Vec<f64> = out.iter().map(|s| s.x).collect();
    assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    // original order preserved
    let ys: Vec<f64> = out.iter().map(|s| s.y).collect();
    assert_eq!(ys, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn single_sample_zero_width_maps_to_origin() {
    let out = normalize(&[Sample::new(7.0, 3.0)], None);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].x, 0.0);
    assert_eq!(out[0].y, 3.0);
}

#[test]
fn fixed_domain_permits_overflow() {
    // Data wider than the fixed domain maps outside [0,1] without error.
    let input = vec![
        Sample::new(-5.0, 1.0),
        Sample::new(5.0, 2.0),
        Sample::new(15.0, 3.0),
    ];
    let out = normalize(&input, Some((0.0, 10.0)));
    assert!((out[0].x - -0.5).abs() < 1e-12);
    assert!((out[1].x - 0.5).abs() < 1e-12);
    assert!((out[2].x - 1.5).abs() < 1e-12);
}

#[test]
fn empty_input_is_empty_output() {
    assert!(normalize(&[], None).is_empty());
    assert!(normalize(&[], Some((0.0, 1.0))).is_empty());
}
