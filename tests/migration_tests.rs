//! Migration of the legacy `carb_time_items` schema (two reminder
//! booleans per row) into `meal_events` (single reminder state).

use predicates::str::contains;

mod common;
use common::{ctk, setup_test_db};

/// Build a database using the legacy mobile-app schema.
fn create_legacy_db(db_path: &str) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");

    conn.execute_batch(
        r#"
        CREATE TABLE carb_time_items (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            time                 INTEGER NOT NULL,
            carb_servings        INTEGER NOT NULL,
            sent_first_reminder  INTEGER NOT NULL DEFAULT 0,
            sent_second_reminder INTEGER NOT NULL DEFAULT 0
        );

        INSERT INTO carb_time_items (time, carb_servings, sent_first_reminder, sent_second_reminder)
        VALUES
            (1767225600000, 3, 0, 0),
            (1767240000000, 2, 1, 0),
            (1767254400000, 4, 1, 1);
        "#,
    )
    .expect("create legacy schema");
}

#[test]
fn test_legacy_booleans_become_reminder_states() {
    let db_path = setup_test_db("legacy_migration");
    create_legacy_db(&db_path);

    ctk()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migrated carb_time_items to meal_events."));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");

    let states: Vec<String> = conn
        .prepare("SELECT reminder FROM meal_events ORDER BY time ASC")
        .expect("prepare")
        .query_map([], |row| row.get(0))
        .expect("query")
        .map(|r| r.expect("row"))
        .collect();

    assert_eq!(states, vec!["none", "first", "second"]);

    // Legacy table is gone
    let legacy_left: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='carb_time_items'",
            [],
            |row| row.get(0),
        )
        .expect("count");
    assert_eq!(legacy_left, 0);
}

#[test]
fn test_migration_is_idempotent() {
    let db_path = setup_test_db("legacy_migration_rerun");
    create_legacy_db(&db_path);

    ctk()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success();

    // A second run finds a modern schema and changes nothing
    ctk()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed."));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM meal_events", [], |row| row.get(0))
        .expect("count");
    assert_eq!(count, 3);
}
