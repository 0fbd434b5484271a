//! Assertion helpers for tests.

use deltae::diff::DiffReport;
use pretty_assertions::assert_eq;

/// Assert the report counts exactly `expected` differing pixels
pub fn assert_differing(report: &DiffReport, expected: usize) {
    assert_eq!(
        report.differing, expected,
        "Expected {} differing pixels, got {}. Report:\n{}",
        expected, report.differing, report
    );
    assert_eq!(report.passed, expected == 0, "passed flag disagrees with count");
}

/// Assert the report's JSON form carries the fields scripts rely on
pub fn assert_report_json(report: &DiffReport) {
    let json: serde_json::Value = serde_json::to_value(report).unwrap();
    for key in [
        "width", "height", "metric", "threshold", "mean", "max", "pixels", "differing", "passed",
    ] {
        assert!(
            json.get(key).is_some(),
            "Missing key {key} in {}",
            serde_json::to_string_pretty(&json).unwrap()
        );
    }
    assert_eq!(json["metric"], report.metric.name());
}
