// File: crates/spark-core/tests/sparkline.rs
// Purpose: End-to-end sparkline pipeline: scene content, data lifecycle,
// crosshair retention.

use std::cell::RefCell;
use std::rc::Rc;

use spark_core::{Color, Primitive, Sample, Smoothing, SparkLine, Stroke};

fn values(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 * 0.05).sin() * 10.0).collect()
}

fn paths_and_polylines(scene: &[Primitive]) -> usize {
    scene
        .iter()
        .filter(|p| matches!(p, Primitive::Path { .. } | Primitive::Polyline { .. }))
        .count()
}

#[test]
fn empty_chart_emits_nothing() {
    let mut chart = SparkLine::new(200, 100);
    assert!(chart.draw().is_empty());
    assert!(chart.draw().is_empty());
}

#[test]
fn scene_has_reference_lines_curve_and_labels() {
    let mut chart = SparkLine::new(200, 100);
    chart.set_data_values(&values(500));
    let scene = chart.draw();

    let dashed: Vec<&Primitive> = scene
        .iter()
        .filter(|p| matches!(p, Primitive::Line { stroke: Stroke { dash: Some(_), .. }, .. }))
        .collect();
    assert_eq!(dashed.len(), 2, "min/max reference lines");
    assert_eq!(paths_and_polylines(&scene), 1, "one curve for the primary series");

    let labels: Vec<&Primitive> = scene
        .iter()
        .filter(|p| matches!(p, Primitive::Text { .. }))
        .collect();
    assert_eq!(labels.len(), 2, "min and max value labels");
}

#[test]
fn draw_consumes_staged_data() {
    let mut chart = SparkLine::new(200, 100);
    chart.set_data_values(&values(100));
    assert!(!chart.draw().is_empty());
    // Staged data was released with the render pass.
    assert!(chart.draw().is_empty());
}

#[test]
fn additional_series_draw_before_primary() {
    let mut chart = SparkLine::new(200, 100);
    chart.set_line_color(Color::BLACK);
    chart.set_data_values(&values(100));
    chart.add_series(
        values(100).iter().enumerate().map(|(i, &y)| Sample::new(i as f64, y + 1.0)).collect(),
        Color::new(200, 0, 0),
    );
    let scene = chart.draw();
    assert_eq!(paths_and_polylines(&scene), 2);

    let curve_colors: Vec<Color> = scene
        .iter()
        .filter_map(|p| match p {
            Primitive::Path { stroke: Some(s), .. } => Some(s.color),
            Primitive::Polyline { stroke, .. } => Some(stroke.color),
            _ => None,
        })
        .collect();
    // Extra series first so the primary lands on top.
    assert_eq!(curve_colors, vec![Color::new(200, 0, 0), Color::BLACK]);
}

#[test]
fn reduction_shrinks_large_series() {
    let mut chart = SparkLine::new(1000, 100);
    chart.set_smoothing(Smoothing::BucketAverage);
    chart.set_use_bezier(false);
    chart.set_data_values(&values(100_000));
    let scene = chart.draw();

    let polyline_len = scene
        .iter()
        .find_map(|p| match p {
            Primitive::Polyline { points, .. } => Some(points.len()),
            _ => None,
        })
        .expect("polyline present");
    assert!(polyline_len <= 50, "expected <=50 reduced points, got {polyline_len}");
}

#[test]
fn crosshair_retains_raw_samples_across_reducing_draw() {
    let mut chart = SparkLine::new(200, 100);
    chart.set_crosshair_listener(|_| {});
    let raw = [5.0, 15.0, 10.0, 25.0, 20.0, 30.0, 15.0, 35.0, 25.0, 40.0];
    chart.set_data_values(&raw);
    chart.set_smoothing(Smoothing::Rdp);
    let scene = chart.draw();

    // The hidden crosshair line is part of the scene.
    assert!(scene
        .iter()
        .any(|p| matches!(p, Primitive::Line { hidden: true, .. })));

    // Locator sees the raw values, not the reduced curve.
    assert_eq!(chart.locate(0.0), Some((0, 5.0)));
    assert_eq!(chart.locate(0.5), Some((5, 30.0)));
    assert_eq!(chart.locate(1.0), Some((9, 40.0)));
}

#[test]
fn pointer_events_reach_the_listener() {
    let seen: Rc<RefCell<Vec<(usize, f64)>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut chart = SparkLine::new(200, 100);
    chart.set_crosshair_listener(move |ev| sink.borrow_mut().push((ev.index, ev.value)));
    chart.set_data_values(&[1.0, 2.0, 3.0]);
    chart.draw();

    chart.pointer_moved(0.0);
    chart.pointer_moved(1.0);
    assert_eq!(*seen.borrow(), vec![(0, 1.0), (2, 3.0)]);
}

#[test]
fn without_crosshair_nothing_is_retained() {
    let mut chart = SparkLine::new(200, 100);
    chart.set_data_values(&values(100));
    chart.draw();
    assert_eq!(chart.locate(0.5), None);
}

#[test]
fn title_and_time_scale_add_labels() {
    let mut chart = SparkLine::new(200, 100);
    chart.set_title("cpu");
    chart.set_time_scale("09:00", "17:00");
    chart.set_data_values(&values(50));
    let scene = chart.draw();

    let texts: Vec<&str> = scene
        .iter()
        .filter_map(|p| match p {
            Primitive::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
        .collect();
    assert!(texts.contains(&"cpu"));
    assert!(texts.contains(&"09:00"));
    assert!(texts.contains(&"17:00"));
}

#[test]
fn fixed_range_positions_partial_data() {
    let mut chart = SparkLine::new(100, 100);
    chart.set_use_bezier(false);
    chart.set_smoothing(Smoothing::None);
    chart.set_x_range(0.0, 100.0);
    // Data covers only the second half of the fixed domain.
    chart
        .set_data_xy(&[50.0, 75.0, 100.0], &[1.0, 2.0, 3.0])
        .unwrap();
    let scene = chart.draw();

    let points = scene
        .iter()
        .find_map(|p| match p {
            Primitive::Polyline { points, .. } => Some(points.clone()),
            _ => None,
        })
        .expect("polyline present");
    // Viewbox is 100 wide, so screen x tracks the domain percentage.
    assert_eq!(points[0].0, 50.0);
    assert_eq!(points[2].0, 100.0);
}
