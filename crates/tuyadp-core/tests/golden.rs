use std::fs;
use std::path::Path;

use tuyadp_core::{Payload, Report, analyze_frame_file};

fn load_expected_report(dir: &str) -> Report {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let expected_path = root.join(dir).join("expected_report.json");

    let expected_json = fs::read_to_string(&expected_path).expect("read expected_report.json");
    serde_json::from_str(&expected_json).expect("parse expected report")
}

fn run_golden(dir: &str) {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let input = root.join(dir).join("input.hex");
    let expected = load_expected_report(dir);

    let mut actual = analyze_frame_file(&input).expect("analyze frames");
    actual.input.path = expected.input.path.clone();
    actual.tool.version = expected.tool.version.clone();

    let actual_value = serde_json::to_value(actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");
}

#[test]
fn golden_datapoints() {
    run_golden("tests/golden/datapoints");
}

#[test]
fn golden_malformed() {
    run_golden("tests/golden/malformed");
}

#[test]
fn golden_datapoints_keeps_latest_value() {
    let report = load_expected_report("tests/golden/datapoints");
    let temperature = report
        .data_points
        .iter()
        .find(|dp| dp.data_point_id == 2)
        .expect("data point 2");
    assert_eq!(temperature.reports, 2);
    assert_eq!(temperature.last_payload, Some(Payload::Value(256)));
}

#[test]
fn golden_malformed_has_rejections() {
    let report = load_expected_report("tests/golden/malformed");
    let summary = report.capture_summary.expect("capture summary");
    assert_eq!(summary.frames_rejected, 2);
    assert_eq!(report.violations[0].id, "TDP-FRAME-TOO-SHORT");
    assert_eq!(report.violations[0].examples, vec!["line 4", "line 7"]);
}
