use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{SAMPLE, td, write_snapshot};

#[test]
fn test_list_month_shows_days_and_rejected() {
    let records = write_snapshot("list_month", SAMPLE);

    td()
        .args(["--records", &records, "--test", "list", "--period", "2024-06"])
        .assert()
        .success()
        .stdout(contains("2024-06-01"))
        .stdout(contains("2024-06-02"))
        .stdout(contains("2024-06-15"))
        .stdout(contains("Bruno Verdi"))
        .stdout(contains("Coach 1 (AB123CD) / Elio Costa"))
        .stdout(contains("TX-1002 Dario Neri"))
        .stdout(contains("(missing)"))
        // submitted on 2024-05-31 UTC, outside the period
        .stdout(contains("Franca Gialli").not());
}

#[test]
fn test_list_filters_by_kind() {
    let records = write_snapshot("list_kind", SAMPLE);

    td()
        .args([
            "--records", &records, "--test", "list", "--period", "2024-06-01", "--kind", "shift",
        ])
        .assert()
        .success()
        .stdout(contains("Anna Rossi"))
        .stdout(contains("Bruno Verdi"))
        .stdout(contains("Coach 1").not())
        .stdout(contains("Carla Bianchi").not());
}

#[test]
fn test_list_empty_period() {
    let records = write_snapshot("list_empty", SAMPLE);

    td()
        .args(["--records", &records, "--test", "list", "--period", "2023-01"])
        .assert()
        .success()
        .stdout(contains("No records between 2023-01-01 and 2023-01-31"));
}

#[test]
fn test_reference_zone_override_moves_records() {
    let records = write_snapshot("list_tz", SAMPLE);

    td()
        .args([
            "--records", &records, "--test", "list", "--period", "2024-05", "--kind",
            "guide-application",
        ])
        .assert()
        .success()
        .stdout(contains("2024-05-31"))
        .stdout(contains("Franca Gialli"));

    td()
        .args([
            "--records",
            &records,
            "--tz",
            "America/Sao_Paulo",
            "--test",
            "list",
            "--period",
            "2024-05",
            "--kind",
            "guide-application",
        ])
        .assert()
        .success()
        .stdout(contains("2024-05-30"))
        .stdout(contains("2024-05-31").not());
}

#[test]
fn test_unknown_zone_fails() {
    let records = write_snapshot("bad_tz", SAMPLE);

    td()
        .args(["--records", &records, "--tz", "Nowhere/Special", "list", "--period", "2024-06"])
        .assert()
        .failure()
        .stderr(contains("Unknown time zone: Nowhere/Special"));
}

#[test]
fn test_summary_totals() {
    let records = write_snapshot("summary_totals", SAMPLE);

    td()
        .args([
            "--records", &records, "--test", "summary", "--period", "2024-06", "--kind", "shift",
        ])
        .assert()
        .success()
        .stdout(contains("2024-06-01"))
        .stdout(contains("2024-06-02"))
        .stdout(contains("Total: 3 record(s), quantity 7"));
}

#[test]
fn test_summary_all_days_lists_empty_days() {
    let records = write_snapshot("summary_all_days", SAMPLE);

    td()
        .args([
            "--records",
            &records,
            "--test",
            "summary",
            "--period",
            "2024-06-01:2024-06-04",
            "--kind",
            "shift",
            "--all-days",
        ])
        .assert()
        .success()
        .stdout(contains("2024-06-03"))
        .stdout(contains("2024-06-04"));
}

#[test]
fn test_calendar_single_count() {
    let records = write_snapshot("calendar_count", SAMPLE);

    td()
        .args([
            "--records",
            &records,
            "--test",
            "calendar",
            "--month",
            "2024-06",
            "--mode",
            "single-count",
        ])
        .assert()
        .success()
        .stdout(contains("June 2024"))
        .stdout(contains("Mo"))
        .stdout(contains("(2)"))
        .stdout(contains("(1)"));
}

#[test]
fn test_calendar_dots_legend() {
    let records = write_snapshot("calendar_dots", SAMPLE);

    td()
        .args([
            "--records",
            &records,
            "--test",
            "calendar",
            "--month",
            "2024-06",
            "--kind",
            "shift",
            "--mode",
            "status-dots",
            "--max-dots",
            "2",
        ])
        .assert()
        .success()
        .stdout(contains("pending"))
        .stdout(contains("approved"))
        .stdout(contains("completed").not());
}

#[test]
fn test_calendar_rejects_non_month() {
    let records = write_snapshot("calendar_bad_month", SAMPLE);

    td()
        .args(["--records", &records, "--test", "calendar", "--month", "2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid period: 2024"));
}

#[test]
fn test_search_by_name() {
    let records = write_snapshot("search_name", SAMPLE);

    td()
        .args(["--records", &records, "--test", "search", "anna", "--field", "name"])
        .assert()
        .success()
        .stdout(contains("2024-06-01"))
        .stdout(contains("2024-06-02"))
        .stdout(contains("2 match(es)"));
}

#[test]
fn test_search_default_fields_find_code() {
    let records = write_snapshot("search_code", SAMPLE);

    td()
        .args(["--records", &records, "--test", "search", "tx-1001"])
        .assert()
        .success()
        .stdout(contains("Carla Bianchi"))
        .stdout(contains("1 match(es)"));
}

#[test]
fn test_search_languages_in_notes() {
    let records = write_snapshot("search_notes", SAMPLE);

    td()
        .args(["--records", &records, "--test", "search", "german", "-f", "notes"])
        .assert()
        .success()
        .stdout(contains("Franca Gialli"));
}

#[test]
fn test_search_empty_query() {
    let records = write_snapshot("search_empty", SAMPLE);

    td()
        .args(["--records", &records, "--test", "search", "   "])
        .assert()
        .success()
        .stdout(contains("Empty search query"));
}

#[test]
fn test_search_no_match() {
    let records = write_snapshot("search_none", SAMPLE);

    td()
        .args(["--records", &records, "--test", "search", "zzz"])
        .assert()
        .success()
        .stdout(contains("No matches for 'zzz'"));
}

#[test]
fn test_missing_snapshot_fails() {
    let mut path = std::env::temp_dir();
    path.push("definitely_missing_tourdesk_records.json");
    let path = path.to_string_lossy().to_string();
    std::fs::remove_file(&path).ok();

    td()
        .args(["--records", &path, "--test", "list", "--period", "2024-06"])
        .assert()
        .failure()
        .stderr(contains("Records snapshot not found"));
}

#[test]
fn test_unreadable_entries_are_reported() {
    let records = write_snapshot(
        "report_unreadable",
        r#"[
          {"kind": "shift", "id": "ok", "guide_id": "g", "guide_name": "Kept Guide",
           "shift_date": "2024-06-01", "status": "approved"},
          {"kind": "shift", "id": "weird", "guide_id": "g", "guide_name": "Odd Guide",
           "shift_date": "2024-06-01", "status": "on-hold"}
        ]"#,
    );

    td()
        .args(["--records", &records, "--test", "list", "--period", "2024-06"])
        .assert()
        .success()
        .stdout(contains("Kept Guide"))
        .stdout(contains("1 unreadable entry(ies) in the snapshot"))
        .stdout(contains("#1 weird"))
        .stdout(contains("on-hold"));
}

#[test]
fn test_non_string_dates_are_reported() {
    let records = write_snapshot(
        "report_non_string_dates",
        r#"[
          {"kind": "booking", "id": "iso", "confirmation_code": "TX-1", "customer_name": "Ann",
           "tour_date": "2024-06-01", "status": "confirmed"},
          {"kind": "booking", "id": "epoch", "confirmation_code": "TX-2", "customer_name": "Ben",
           "tour_date": 1717236000000, "status": "pending"},
          {"kind": "booking", "id": "stamp", "confirmation_code": "TX-3", "customer_name": "Cid",
           "tour_date": {"_seconds": 1717236000}, "status": "pending"}
        ]"#,
    );

    td()
        .args(["--records", &records, "--test", "list", "--period", "2024-06"])
        .assert()
        .success()
        .stdout(contains("TX-1 Ann"))
        .stdout(contains("2 record(s) without a usable date"))
        .stdout(contains("'1717236000000'"))
        .stdout(contains("_seconds"));
}

#[test]
fn test_list_day_header_shows_quantity() {
    let records = write_snapshot("list_header_qty", SAMPLE);

    td()
        .args([
            "--records", &records, "--test", "list", "--period", "2024-06-01", "--kind", "shift",
        ])
        .assert()
        .success()
        .stdout(contains("2024-06-01 Sat"))
        .stdout(contains("qty 6"));
}

#[cfg(unix)]
#[test]
fn test_config_without_records_key_can_be_checked_and_migrated() {
    let home = std::env::temp_dir().join("tourdesk_partial_config_home");
    let conf_dir = home.join(".tourdesk");
    std::fs::remove_dir_all(&home).ok();
    std::fs::create_dir_all(&conf_dir).expect("create config dir");
    let conf = conf_dir.join("tourdesk.conf");
    std::fs::write(&conf, "max_dots: 2\n").expect("write partial config");

    td()
        .env("HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields"))
        .stdout(contains("records"));

    td()
        .env("HOME", &home)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Configuration migrated"));

    let migrated = std::fs::read_to_string(&conf).expect("read migrated config");
    assert!(migrated.contains("records:"));
    assert!(migrated.contains("max_dots: 2"));
    assert!(migrated.contains("records.json"));
}

#[test]
fn test_config_print() {
    td()
        .args(["--test", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("reference_timezone"))
        .stdout(contains("status_priority"));
}
