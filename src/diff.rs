//! Per-pixel image comparison and heatmap rendering.

use color_pipeline::{
    Distance, DistanceStats, Encode, LinearRgba, Rgba32, SrgbCodec, WorkingColor,
};
use serde::Serialize;

use crate::error::DeltaeError;
use crate::image::RgbaImage;
use crate::metric::{compare_pixels, MetricKind};
use crate::space::Standard;

/// Settings for one image comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffOptions {
    pub metric: MetricKind,
    pub standard: Standard,
    /// Normalized distance above which a pixel counts as different
    pub threshold: f32,
    pub parallel: bool,
}

/// Summary of an image comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffReport {
    pub width: u32,
    pub height: u32,
    pub metric: MetricKind,
    pub threshold: f32,
    pub mean: f32,
    pub max: f32,
    pub pixels: usize,
    pub differing: usize,
    pub passed: bool,
}

impl DiffReport {
    fn new(width: u32, height: u32, options: &DiffOptions, stats: &DistanceStats) -> Self {
        Self {
            width,
            height,
            metric: options.metric,
            threshold: stats.threshold.to_f32(),
            mean: stats.mean,
            max: stats.max.to_f32(),
            pixels: stats.count,
            differing: stats.above_threshold,
            passed: stats.all_within(),
        }
    }
}

impl std::fmt::Display for DiffReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Image:     {}x{} ({} pixels)", self.width, self.height, self.pixels)?;
        writeln!(f, "Metric:    {}", self.metric)?;
        writeln!(f, "Mean:      {:.4}", self.mean)?;
        writeln!(f, "Max:       {:.4}", self.max)?;
        writeln!(f, "Threshold: {:.4}", self.threshold)?;
        write!(
            f,
            "Differing: {} ({})",
            self.differing,
            if self.passed { "pass" } else { "FAIL" }
        )
    }
}

/// Compare two images pixel by pixel.
///
/// Returns the summary and the per-pixel distances in row-major order.
pub fn diff_images(
    a: &RgbaImage,
    b: &RgbaImage,
    options: &DiffOptions,
) -> Result<(DiffReport, Vec<Distance>), DeltaeError> {
    a.check_same_size(b)?;

    let distances = compare_pixels(
        options.metric,
        options.standard,
        &a.pixels,
        &b.pixels,
        options.parallel,
    )?;
    let stats = DistanceStats::from_distances(&distances, Distance::from_ratio(options.threshold));
    let report = DiffReport::new(a.width, a.height, options, &stats);

    tracing::info!(
        metric = %options.metric,
        mean = report.mean,
        max = report.max,
        differing = report.differing,
        "Compared images"
    );

    Ok((report, distances))
}

const HEAT_COLD: LinearRgba = LinearRgba::new(0.0, 0.0, 0.0, 1.0);
const HEAT_WARM: LinearRgba = LinearRgba::new(1.0, 0.85, 0.0, 1.0);
const HEAT_OVER: LinearRgba = LinearRgba::new(1.0, 0.0, 0.0, 1.0);

/// Render distances as an image.
///
/// Pixels at or below `threshold` ramp from black to amber in linear light,
/// scaled so the threshold itself is full amber. Pixels above it are red.
pub fn heatmap(distances: &[Distance], width: u32, height: u32, threshold: f32) -> RgbaImage {
    let threshold = Distance::from_ratio(threshold);
    let scale = threshold.to_f32().max(f32::EPSILON);

    let pixels = distances
        .iter()
        .map(|&d| {
            let color = if d > threshold {
                HEAT_OVER
            } else {
                HEAT_COLD.lerp(HEAT_WARM, (d.to_f32() / scale).min(1.0))
            };
            let pixel: Rgba32 = SrgbCodec.encode(color);
            pixel
        })
        .collect();

    RgbaImage {
        width,
        height,
        pixels,
    }
}
