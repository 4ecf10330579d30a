mod common;
use common::{SAMPLE, td, temp_out, write_snapshot};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_csv_range_includes_empty_days() {
    let records = write_snapshot("export_csv_range", SAMPLE);
    let out = temp_out("export_csv_range", "csv");

    td()
        .args([
            "--records",
            &records,
            "--test",
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--range",
            "2024-06-01:2024-06-03",
            "--kind",
            "shift",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "date,count,statuses,total_secondary_quantity");
    assert_eq!(lines[1], "2024-06-01,2,approved=1 pending=1,6");
    assert_eq!(lines[2], "2024-06-02,1,pending=1,1");
    assert_eq!(lines[3], "2024-06-03,0,,0");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_export_json_all_days_with_records() {
    let records = write_snapshot("export_json_all", SAMPLE);
    let out = temp_out("export_json_all", "json");

    td()
        .args([
            "--records", &records, "--test", "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let days: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let days = days.as_array().expect("array");

    // 05-31 application, 06-01, 06-02, 06-15; the undated booking is not exported
    assert_eq!(days.len(), 4);
    assert_eq!(days[0]["date"], "2024-05-31");
    assert_eq!(days[2]["date"], "2024-06-02");
    assert_eq!(days[2]["count"], 2);
    assert_eq!(days[2]["counts_by_status"]["confirmed"], 1);
    assert_eq!(days[2]["total_secondary_quantity"], 4);
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let records = write_snapshot("export_overwrite", SAMPLE);
    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "keep me").expect("seed file");

    td()
        .args(["--records", &records, "--test", "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    td()
        .args(["--records", &records, "--test", "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").starts_with("date,"));
}

#[test]
fn test_export_bad_range_leaves_no_output_dir() {
    let records = write_snapshot("export_bad_range", SAMPLE);
    let dir = std::env::temp_dir().join("tourdesk_bad_range_out");
    fs::remove_dir_all(&dir).ok();
    let out = dir.join("summary.csv").to_string_lossy().to_string();

    td()
        .args([
            "--records", &records, "--test", "export", "--file", &out, "--range", "2024-06:2024",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));

    assert!(!dir.exists());
}
