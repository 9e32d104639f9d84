use predicates::str::contains;
use std::fs;

mod common;
use common::{ctk, init_db, setup_test_db, temp_out};

fn seed_two_events(db_path: &str) {
    ctk()
        .args(["--db", db_path, "add", "3", "--time", "2026-07-14T08:00:00Z"])
        .assert()
        .success();
    ctk()
        .args(["--db", db_path, "add", "2", "--time", "2026-07-20T08:00:00Z"])
        .assert()
        .success();
}

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv");
    init_db(&db_path);
    seed_two_events(&db_path);

    let out = temp_out("export_csv", "csv");

    ctk()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("carb_servings"));
    assert!(content.contains("2026-07-14"));
    assert!(content.contains("2026-07-20"));
}

#[test]
fn test_export_json_with_range() {
    let db_path = setup_test_db("export_json_range");
    init_db(&db_path);
    seed_two_events(&db_path);

    let out = temp_out("export_json_range", "json");

    ctk()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--range",
            "2026-07-01:2026-07-15",
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    let arr = rows.as_array().expect("json array");
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["carb_servings"], 3);
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative");
    init_db(&db_path);
    seed_two_events(&db_path);

    ctk()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            "relative_out.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_range_warns() {
    let db_path = setup_test_db("export_empty_range");
    init_db(&db_path);
    seed_two_events(&db_path);

    let out = temp_out("export_empty_range", "csv");

    ctk()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--range",
            "2025-01",
        ])
        .assert()
        .success()
        .stdout(contains("No meal events found for selected range."));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup");
    init_db(&db_path);
    seed_two_events(&db_path);

    let out = temp_out("backup", "sqlite");

    ctk()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&out).exists());
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_zip");
    init_db(&db_path);
    seed_two_events(&db_path);

    let out = temp_out("backup_zip", "sqlite");

    ctk()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    let zip_path = std::path::Path::new(&out).with_extension("zip");
    assert!(zip_path.exists());
    // uncompressed copy is removed after zipping
    assert!(!std::path::Path::new(&out).exists());
}
