use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::fs;
use std::path::Path;

mod common;
use common::{add_booking, init_db, init_db_with_data, rbk, setup_test_db, temp_out};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    rbk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(Path::new(&db_path).exists());

    rbk()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Bookings:"))
        .stdout(contains("Schema:"));
}

#[test]
fn test_list_empty_store() {
    let db_path = setup_test_db("list_empty");
    init_db(&db_path);

    rbk()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No bookings"));
}

#[test]
fn test_list_hides_past_bookings_by_default() {
    let db_path = setup_test_db("list_upcoming");
    init_db_with_data(&db_path);

    rbk()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Ana"))
        .stdout(contains("Marko"))
        .stdout(contains("4 days"))
        .stdout(contains("Old Guest").not());

    rbk()
        .args(["--db", &db_path, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Old Guest"))
        .stdout(contains("Ana"));
}

#[test]
fn test_list_only_past_bookings() {
    let db_path = setup_test_db("list_only_past");
    init_db(&db_path);
    add_booking(&db_path, "2001-01-01", "2001-01-03", "Long Ago");

    rbk()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No upcoming bookings"));
}

#[test]
fn test_list_json_sorted_by_start() {
    let db_path = setup_test_db("list_json");
    init_db(&db_path);
    add_booking(&db_path, "2099-06-01", "2099-06-03", "Later");
    add_booking(&db_path, "2099-05-01", "2099-05-03", "Sooner");

    let out = rbk()
        .args(["--db", &db_path, "list", "--json"])
        .output()
        .expect("run list --json");
    assert!(out.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is JSON");
    let names: Vec<&str> = parsed
        .as_array()
        .expect("array")
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Sooner", "Later"]);
    assert_eq!(parsed[0]["from"], "2099-05-01");
}

#[test]
fn test_list_json_on_fresh_database_is_clean_json() {
    let db_path = setup_test_db("list_json_fresh");

    // No `init`: the schema is created on first open.
    let out = rbk()
        .args(["--db", &db_path, "list", "--json"])
        .output()
        .expect("run list --json");
    assert!(out.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is only JSON");
    assert_eq!(parsed, serde_json::json!([]));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Migration applied"));
}

#[test]
fn test_add_rejects_empty_name() {
    let db_path = setup_test_db("add_empty_name");
    init_db(&db_path);

    rbk()
        .args([
            "--db", &db_path, "add", "--from", "2099-01-01", "--to", "2099-01-02", "--name", "",
        ])
        .assert()
        .failure()
        .stderr(contains("name must not be empty"));
}

#[test]
fn test_add_rejects_bad_date() {
    let db_path = setup_test_db("add_bad_date");
    init_db(&db_path);

    rbk()
        .args([
            "--db", &db_path, "add", "--from", "2099-13-01", "--to", "2099-01-02", "--name", "X",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_add_inverted_range_is_saved_with_warning() {
    let db_path = setup_test_db("add_inverted");
    init_db(&db_path);

    rbk()
        .args([
            "--db", &db_path, "add", "--from", "2099-01-10", "--to", "2099-01-05", "--name",
            "Backwards",
        ])
        .assert()
        .success()
        .stdout(contains("after end date"))
        .stdout(contains("Booking #1 saved"));

    rbk()
        .args(["--db", &db_path, "show", "1"])
        .assert()
        .success()
        .stdout(contains("Backwards"))
        .stdout(contains("end date is before start date"));
}

#[test]
fn test_add_shows_refreshed_list() {
    let db_path = setup_test_db("add_refresh");
    init_db(&db_path);

    rbk()
        .args([
            "--db", &db_path, "add", "--from", "2099-02-01", "--to", "2099-02-03", "--name",
            "Fresh",
        ])
        .assert()
        .success()
        .stdout(contains("Booking #1 saved"))
        .stdout(contains("#1"))
        .stdout(contains("2 days"));
}

#[test]
fn test_add_storage_failure_is_reported_not_fatal() {
    // A directory cannot be opened as a database file.
    let dir = env::temp_dir().to_string_lossy().to_string();

    rbk()
        .args([
            "--db", &dir, "add", "--from", "2099-02-01", "--to", "2099-02-03", "--name", "Lost",
        ])
        .assert()
        .success()
        .stderr(contains("Saving the booking failed"));
}

#[test]
fn test_add_refresh_failure_does_not_report_failed_save() {
    let db_path = setup_test_db("add_refresh_fail");
    init_db(&db_path);

    // A row the list view cannot read back.
    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute(
            "INSERT INTO bookings (from_date, to_date, name, created_at)
             VALUES ('not-a-date', '2099-01-02', 'Broken', '2099-01-01')",
            [],
        )
        .unwrap();
    }

    rbk()
        .args([
            "--db", &db_path, "add", "--from", "2099-02-01", "--to", "2099-02-03", "--name",
            "Kept",
        ])
        .assert()
        .success()
        .stdout(contains("Booking #2 saved"))
        .stderr(contains("Refreshing the booking list failed"))
        .stderr(contains("Saving the booking failed").not());

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let names: i64 = conn
        .query_row("SELECT COUNT(*) FROM bookings WHERE name = 'Kept'", [], |r| r.get(0))
        .unwrap();
    assert_eq!(names, 1);
}

#[test]
fn test_show_booking_details() {
    let db_path = setup_test_db("show_details");
    init_db(&db_path);

    rbk()
        .args([
            "--db",
            &db_path,
            "add",
            "--from",
            "2024-03-10",
            "--to",
            "2024-03-12",
            "--name",
            "Ana",
            "--contact",
            "ana@example.com",
            "--notes",
            "Arrives by ferry",
        ])
        .assert()
        .success();
    add_booking(&db_path, "2024-04-01", "2024-04-02", "Plain");

    rbk()
        .args(["--db", &db_path, "show", "1"])
        .assert()
        .success()
        .stdout(contains("March 2024"))
        .stdout(contains("From Sunday, 10.3. to Tuesday, 12.3."))
        .stdout(contains("2 days"))
        .stdout(contains("Ana"))
        .stdout(contains("ana@example.com"))
        .stdout(contains("Arrives by ferry"));

    rbk()
        .args(["--db", &db_path, "show", "2"])
        .assert()
        .success()
        .stdout(contains("Plain"))
        .stdout(contains("Contact").not())
        .stdout(contains("Notes").not());
}

#[test]
fn test_show_missing_booking() {
    let db_path = setup_test_db("show_missing");
    init_db(&db_path);

    rbk()
        .args(["--db", &db_path, "show", "999"])
        .assert()
        .success()
        .stdout(contains("Not found"));
}

#[test]
fn test_show_by_day_picks_earliest_booking() {
    let db_path = setup_test_db("show_by_day");
    init_db_with_data(&db_path);

    rbk()
        .args(["--db", &db_path, "show", "--day", "2099-03-04"])
        .assert()
        .success()
        .stdout(contains("Ana"))
        .stdout(contains("Marko").not());

    rbk()
        .args(["--db", &db_path, "show", "--day", "2099-03-20"])
        .assert()
        .success()
        .stdout(contains("Not found"));
}

#[test]
fn test_calendar_month_lists_overlapping_bookings() {
    let db_path = setup_test_db("calendar_month");
    init_db_with_data(&db_path);

    rbk()
        .args(["--db", &db_path, "calendar", "--month", "2099-03"])
        .assert()
        .success()
        .stdout(contains("March 2099"))
        .stdout(contains("Su Mo Tu We Th Fr Sa"))
        .stdout(contains("#2 Ana (2099-03-01 → 2099-03-05)"))
        .stdout(contains("#3 Marko (2099-03-04 → 2099-03-08)"))
        .stdout(contains("Old Guest").not());
}

#[test]
fn test_calendar_invalid_month() {
    let db_path = setup_test_db("calendar_bad_month");
    init_db(&db_path);

    rbk()
        .args(["--db", &db_path, "calendar", "--month", "2099-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month format"));
}

#[test]
fn test_view_modes() {
    let db_path = setup_test_db("view_modes");
    init_db_with_data(&db_path);

    rbk()
        .args(["--db", &db_path, "view", "list"])
        .assert()
        .success()
        .stdout(contains("Marko"))
        .stdout(contains("Old Guest").not());

    rbk()
        .args(["--db", &db_path, "view", "calendar", "--month", "2099-03"])
        .assert()
        .success()
        .stdout(contains("March 2099"));

    rbk()
        .args(["--db", &db_path, "view", "agenda", "--month", "2099-03"])
        .assert()
        .success()
        .stdout(contains("Unknown view"))
        .stdout(contains("March 2099"));
}

#[test]
fn test_del_single_booking() {
    let db_path = setup_test_db("del_single");
    init_db_with_data(&db_path);

    rbk()
        .args(["--db", &db_path, "del", "2", "--yes"])
        .assert()
        .success()
        .stdout(contains("Booking #2 has been deleted"));

    rbk()
        .args(["--db", &db_path, "show", "2"])
        .assert()
        .success()
        .stdout(contains("Not found"));

    rbk()
        .args(["--db", &db_path, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Marko"))
        .stdout(contains("Old Guest"));
}

#[test]
fn test_del_missing_id_is_noop() {
    let db_path = setup_test_db("del_missing");
    init_db_with_data(&db_path);

    rbk()
        .args(["--db", &db_path, "del", "77", "--yes"])
        .assert()
        .success()
        .stdout(contains("nothing deleted"));

    rbk()
        .args(["--db", &db_path, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Ana"))
        .stdout(contains("Marko"))
        .stdout(contains("Old Guest"));
}

#[test]
fn test_del_cancelled_keeps_booking() {
    let db_path = setup_test_db("del_cancel");
    init_db_with_data(&db_path);

    rbk()
        .args(["--db", &db_path, "del", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    rbk()
        .args(["--db", &db_path, "show", "2"])
        .assert()
        .success()
        .stdout(contains("Ana"));
}

#[test]
fn test_del_confirmed_via_prompt() {
    let db_path = setup_test_db("del_prompt");
    init_db_with_data(&db_path);

    rbk()
        .args(["--db", &db_path, "del", "3"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Booking #3 has been deleted"));
}

#[test]
fn test_del_all() {
    let db_path = setup_test_db("del_all");
    init_db_with_data(&db_path);

    rbk()
        .args(["--db", &db_path, "del", "--all", "--yes"])
        .assert()
        .success()
        .stdout(contains("All bookings have been deleted (3)"));

    rbk()
        .args(["--db", &db_path, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("No bookings"));
}

#[test]
fn test_del_requires_id_or_all() {
    let db_path = setup_test_db("del_args");
    init_db(&db_path);

    rbk().args(["--db", &db_path, "del"]).assert().failure();
    rbk()
        .args(["--db", &db_path, "del", "1", "--all"])
        .assert()
        .failure();
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_ops");
    init_db_with_data(&db_path);

    rbk()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success();

    rbk()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("del"))
        .stdout(contains("Booking deleted"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("backup_db");
    init_db_with_data(&db_path);

    let plain = temp_out("backup_plain", "sqlite");
    rbk()
        .args(["--db", &db_path, "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(fs::metadata(&plain).unwrap().len() > 0);

    let zipped = temp_out("backup_zipped", "sqlite");
    let zip_path = Path::new(&zipped).with_extension("zip");
    fs::remove_file(&zip_path).ok();

    rbk()
        .args(["--db", &db_path, "backup", "--file", &zipped, "--compress"])
        .assert()
        .success();
    assert!(zip_path.exists());
}

#[test]
fn test_backup_declined_overwrite_keeps_file() {
    let db_path = setup_test_db("backup_keep");
    init_db(&db_path);

    let out = temp_out("backup_keep", "sqlite");
    fs::write(&out, "ORIGINAL").unwrap();

    rbk()
        .args(["--db", &db_path, "backup", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Backup cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "ORIGINAL");
}

#[test]
fn test_db_check_and_vacuum() {
    let db_path = setup_test_db("db_maintenance");
    init_db_with_data(&db_path);

    rbk()
        .args(["--db", &db_path, "db", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Vacuum completed"));
}

#[test]
fn test_db_migrate_reports_schema_version() {
    let db_path = setup_test_db("db_migrate");

    rbk()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stderr(contains("Migration applied"))
        .stdout(contains("Schema is up to date (v1)."));
}
