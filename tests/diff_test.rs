//! End-to-end image comparison through PNG files on disk.

mod common;

use common::fixtures::{self, colors};
use common::Workspace;
use deltae::diff::{diff_images, heatmap, DiffOptions};
use deltae::error::DeltaeError;
use deltae::image::read_png;
use deltae::metric::MetricKind;
use deltae::space::Standard;
use pretty_assertions::assert_eq;

fn options(metric: MetricKind) -> DiffOptions {
    DiffOptions {
        metric,
        standard: Standard::Bt709,
        threshold: 0.02,
        parallel: true,
    }
}

#[test]
fn test_identical_files_pass() {
    let ws = Workspace::new();
    let image = fixtures::gradient(64, 8);
    let a = ws.png("a.png", &image);
    let b = ws.png("b.png", &image);

    let (report, _) = diff_images(
        &read_png(&a).unwrap(),
        &read_png(&b).unwrap(),
        &options(MetricKind::Ciede2000),
    )
    .unwrap();

    common::assert_differing(&report, 0);
    assert_eq!(report.max, 0.0);
    assert_eq!((report.width, report.height), (64, 8));
}

#[test]
fn test_imperceptible_change_passes() {
    let ws = Workspace::new();
    let base = fixtures::with_pixels(&fixtures::gradient(16, 16), &[0, 1, 2], colors::GRAY);
    let nudged = fixtures::with_pixels(&base, &[0, 1, 2], colors::GRAY_NUDGED);
    let a = read_png(&ws.png("a.png", &base)).unwrap();
    let b = read_png(&ws.png("b.png", &nudged)).unwrap();

    let (report, distances) = diff_images(&a, &b, &options(MetricKind::Ciede2000)).unwrap();
    common::assert_differing(&report, 0);
    assert!(distances[0].to_f32() > 0.0);
}

#[test]
fn test_visible_change_fails_for_every_metric() {
    let ws = Workspace::new();
    let base = fixtures::gradient(32, 4);
    let changed = fixtures::with_pixels(&base, &[5, 40, 100], colors::RED);
    let a = read_png(&ws.png("a.png", &base)).unwrap();
    let b = read_png(&ws.png("b.png", &changed)).unwrap();

    for &metric in MetricKind::all() {
        let (report, _) = diff_images(&a, &b, &options(metric)).unwrap();
        common::assert_differing(&report, 3);
        common::assert_report_json(&report);
    }
}

#[test]
fn test_mismatched_sizes_rejected() {
    let ws = Workspace::new();
    let a = read_png(&ws.png("a.png", &fixtures::gradient(8, 8))).unwrap();
    let b = read_png(&ws.png("b.png", &fixtures::gradient(8, 9))).unwrap();

    let err = diff_images(&a, &b, &options(MetricKind::Cie76)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Image size mismatch: 8x8 vs 8x9"
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let ws = Workspace::new();
    let err = read_png(&ws.path("nope.png")).unwrap_err();
    assert!(matches!(err, DeltaeError::Io(_)));
}

#[test]
fn test_heatmap_written_and_readable() {
    let ws = Workspace::new();
    let base = fixtures::gradient(10, 2);
    let changed = fixtures::with_pixels(&base, &[3], colors::RED);

    let (report, distances) = diff_images(&base, &changed, &options(MetricKind::Cie94)).unwrap();
    let map = heatmap(&distances, report.width, report.height, 0.02);
    let path = ws.png("heat.png", &map);

    let back = read_png(&path).unwrap();
    assert_eq!(back, map);
    assert_eq!(back.pixels[3], colors::RED);
    assert_eq!(back.pixels[0], color_pipeline::Rgba32::new(0, 0, 0, 255));
}
