// File: crates/demo/src/main.rs
// Summary: Demo loads (or synthesizes) samples and writes sparkline + wind-rose SVGs.

use anyhow::{Context, Result};
use spark_core::{Sample, SectorAccumulator, Smoothing, SparkLine, Color, WindRose};
use spark_render_svg::SvgRenderer;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Accept a CSV path from the CLI or fall back to a synthetic waveform.
    let samples = match std::env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            println!("Using input file: {}", path.display());
            load_samples_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => synth_waveform(250_000),
    };
    println!("Loaded {} samples", samples.len());

    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir)?;

    // 1) Sparkline, bucket-averaged with a smooth curve.
    let mut spark = SparkLine::fluid(120);
    spark.set_title("demo series");
    spark.set_time_scale("start", "end");
    spark.set_smoothing(Smoothing::BucketAverage);
    spark.set_crosshair_listener(|ev| {
        println!("crosshair at {:.0}%: index {} value {:.2}", ev.position * 100.0, ev.index, ev.value);
    });
    spark.set_data(samples.clone());
    let scene = spark.draw();
    let svg = SvgRenderer::stretched().render(&scene, spark.view_box());
    write_out(&out_dir.join("sparkline.svg"), &svg)?;

    // Simulate a couple of debounced pointer events.
    spark.pointer_moved(0.25);
    spark.pointer_moved(0.75);

    // 2) The same data reduced with RDP, drawn as a plain polyline.
    let mut spark2 = SparkLine::new(400, 120);
    spark2.set_title("rdp");
    spark2.set_smoothing(Smoothing::Rdp);
    spark2.set_use_bezier(false);
    spark2.set_data(samples);
    let scene = spark2.draw();
    let svg = SvgRenderer::new().render(&scene, spark2.view_box());
    write_out(&out_dir.join("sparkline_rdp.svg"), &svg)?;

    // 3) Wind rose aggregated from synthetic wind observations.
    let mut acc = SectorAccumulator::new(16);
    for i in 0..100_000u32 {
        let angle = (f64::from(i) * 0.7 + (f64::from(i) * 0.013).sin() * 90.0) % 360.0;
        let speed = 2.0 + (f64::from(i) * 0.002).sin().abs() * 10.0;
        acc.observe(angle, speed);
    }
    let mut rose = WindRose::with_default_sectors(320);
    rose.set_title("wind distribution");
    rose.set_sector_click_listener(|hit| {
        println!(
            "sector {} ({}, {} deg): {:?} / {:?} %",
            hit.sector_index, hit.direction_label, hit.center_degrees,
            hit.series_values, hit.series_percentages
        );
    });
    rose.add_series("Duration", Color::new(30, 144, 255), acc.counts().to_vec())?;
    rose.add_series("Energy", Color::new(255, 140, 0), acc.energies().to_vec())?;
    let scene = rose.draw();
    let svg = SvgRenderer::new().render(&scene, rose.view_box());
    write_out(&out_dir.join("windrose.svg"), &svg)?;

    rose.clicked(225.0);

    Ok(())
}

/// Load `position,value` rows from a headered CSV file.
fn load_samples_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut samples = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let x: f64 = rec
            .get(0)
            .context("missing position column")?
            .trim()
            .parse()?;
        let y: f64 = rec
            .get(1)
            .context("missing value column")?
            .trim()
            .parse()?;
        samples.push(Sample::new(x, y));
    }
    Ok(samples)
}

fn synth_waveform(n: usize) -> Vec<Sample> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            let y = (x * 0.0005).sin() * 20.0 + (x * 0.0071).sin() * 4.0 + x * 1e-5;
            Sample::new(x, y)
        })
        .collect()
}

fn write_out(path: &Path, svg: &str) -> Result<()> {
    std::fs::write(path, svg).with_context(|| format!("write '{}'", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
