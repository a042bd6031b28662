//! End-to-end runs of the `scrub` binary.

use std::fs;
use std::path::Path;
use std::process::Command;

fn scrub() -> Command {
    Command::new(env!("CARGO_BIN_EXE_scrub"))
}

fn write_input(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("input.csv");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn scans_a_csv_and_writes_all_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "name,contact,pan\nAsha,9876543210,ABCDE1234F\nRavi,hello,n/a\n",
    );
    let clean = dir.path().join("clean.csv");
    let reports = dir.path().join("reports");

    let status = scrub()
        .arg(&input)
        .arg("--output")
        .arg(&clean)
        .arg("--report-dir")
        .arg(&reports)
        .status()
        .unwrap();
    assert!(status.success());

    let clean_csv = fs::read_to_string(&clean).unwrap();
    assert!(clean_csv.contains("XXXXXX3210"));
    assert!(clean_csv.contains("PAN_"));
    assert!(!clean_csv.contains("9876543210"));
    assert!(!clean_csv.contains("ABCDE1234F"));
    assert!(clean_csv.contains("hello"));

    let detections: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(reports.join("detections.json")).unwrap())
            .unwrap();
    let detections = detections.as_array().unwrap();
    assert_eq!(detections.len(), 2);
    assert_eq!(detections[0]["row_index"], 1);
    assert_eq!(detections[0]["pii_type"], "phone");
    assert_eq!(detections[1]["pii_type"], "pan");

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(reports.join("summary.json")).unwrap()).unwrap();
    assert_eq!(summary["total_detections"], 2);
    assert_eq!(summary["counts_by_type"]["phone"], 1);
    assert_eq!(summary["counts_by_type"]["pan"], 1);
}

#[test]
fn threshold_flag_changes_what_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "aadhaar\n1234 5678 9012\n");
    let reports = dir.path().join("reports");

    // Default threshold drops the checksum-failed candidate.
    let status = scrub()
        .arg(&input)
        .arg("--report-dir")
        .arg(&reports)
        .current_dir(dir.path())
        .status()
        .unwrap();
    assert!(status.success());
    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(reports.join("summary.json")).unwrap()).unwrap();
    assert_eq!(summary["total_detections"], 0);

    // A permissive threshold keeps it.
    let status = scrub()
        .arg(&input)
        .arg("--report-dir")
        .arg(&reports)
        .arg("--confidence-threshold")
        .arg("0.3")
        .current_dir(dir.path())
        .status()
        .unwrap();
    assert!(status.success());
    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(reports.join("summary.json")).unwrap()).unwrap();
    assert_eq!(summary["total_detections"], 1);
    assert_eq!(summary["counts_by_type"]["aadhaar"], 1);
}

#[test]
fn aadhaar_partial_flag_keeps_boundary_groups() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "aadhaar\n123456789010\n");
    let clean = dir.path().join("clean.csv");

    let status = scrub()
        .arg(&input)
        .arg("--output")
        .arg(&clean)
        .arg("--report-dir")
        .arg(dir.path().join("reports"))
        .arg("--aadhaar-partial")
        .status()
        .unwrap();
    assert!(status.success());

    let clean_csv = fs::read_to_string(&clean).unwrap();
    assert!(clean_csv.contains("1234XXXX9010"));
}

#[test]
fn invalid_threshold_fails_with_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "a\n1\n");

    let output = scrub()
        .arg(&input)
        .arg("--confidence-threshold")
        .arg("1.5")
        .arg("--report-dir")
        .arg(dir.path().join("reports"))
        .status()
        .unwrap();
    assert!(!output.success());
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let status = scrub()
        .arg(dir.path().join("nope.csv"))
        .arg("--report-dir")
        .arg(dir.path().join("reports"))
        .status()
        .unwrap();
    assert!(!status.success());
}
