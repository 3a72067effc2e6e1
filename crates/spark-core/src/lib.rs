// File: crates/spark-core/src/lib.rs
// Summary: Core library entry point; exports the reduction pipeline and chart API.

pub mod types;
pub mod error;
pub mod series;
pub mod scale;
pub mod downsample;
pub mod curve;
pub mod primitive;
pub mod locate;
pub mod chart;
pub mod sector;
pub mod windrose;

pub use chart::{CrosshairEvent, SparkLine};
pub use downsample::{bucket_average, rdp, Smoothing};
pub use error::ChartError;
pub use locate::locate;
pub use primitive::{Fill, FontWeight, PathCommand, Primitive, Stroke, TextAnchor};
pub use sector::{compass_label, sector_index, SectorAccumulator};
pub use series::{Sample, Series};
pub use types::Color;
pub use windrose::{RoseSeries, SectorHit, WindRose};
