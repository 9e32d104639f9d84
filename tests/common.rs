#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ctk() -> Command {
    cargo_bin_cmd!("carbtracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_carbtracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema for a test DB
pub fn init_db(db_path: &str) {
    ctk()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Insert a meal event directly via the library DB API, bypassing the
/// CLI spacing guard. Returns the new row id.
pub fn insert_event_at(db_path: &str, time: DateTime<Utc>, servings: u32) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    carbtracker::db::initialize::init_db(&conn).expect("init db");

    let ev = carbtracker::models::meal_event::MealEvent::new(time, servings);
    carbtracker::db::queries::insert_meal_event(&conn, &ev).expect("insert event")
}

/// Rewind the stored time of an event, useful to simulate the passage
/// of time between reminder passes.
pub fn set_event_time(db_path: &str, id: i64, time: DateTime<Utc>) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.execute(
        "UPDATE meal_events SET time = ?1 WHERE id = ?2",
        rusqlite::params![time.timestamp_millis(), id],
    )
    .expect("update event time");
}
