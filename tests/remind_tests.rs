use chrono::{TimeDelta, Utc};
use predicates::str::contains;

mod common;
use common::{ctk, init_db, insert_event_at, set_event_time, setup_test_db};

#[test]
fn test_remind_without_events_is_quiet() {
    let db_path = setup_test_db("remind_empty");
    init_db(&db_path);

    ctk()
        .args(["--db", &db_path, "remind"])
        .assert()
        .success()
        .stdout(contains("No reminder due."));
}

#[test]
fn test_remind_below_threshold_is_quiet() {
    let db_path = setup_test_db("remind_early");
    init_db(&db_path);
    insert_event_at(&db_path, Utc::now() - TimeDelta::minutes(45), 3);

    ctk()
        .args(["--db", &db_path, "remind"])
        .assert()
        .success()
        .stdout(contains("No reminder due."));
}

#[test]
fn test_remind_emits_safe_to_eat_once() {
    let db_path = setup_test_db("remind_safe");
    init_db(&db_path);
    insert_event_at(&db_path, Utc::now() - TimeDelta::minutes(3 * 60 + 30), 3);

    ctk()
        .args(["--db", &db_path, "remind"])
        .assert()
        .success()
        .stdout(contains("It's safe to eat now."));

    // Second pass at the same elapsed bucket stays quiet
    ctk()
        .args(["--db", &db_path, "remind"])
        .assert()
        .success()
        .stdout(contains("No reminder due."));
}

#[test]
fn test_remind_escalates_to_time_to_eat() {
    let db_path = setup_test_db("remind_urgent");
    init_db(&db_path);
    let id = insert_event_at(&db_path, Utc::now() - TimeDelta::minutes(3 * 60 + 30), 3);

    ctk()
        .args(["--db", &db_path, "remind"])
        .assert()
        .success()
        .stdout(contains("It's safe to eat now."));

    // Four hours later the same gap turns urgent
    set_event_time(&db_path, id, Utc::now() - TimeDelta::hours(5));

    ctk()
        .args(["--db", &db_path, "remind"])
        .assert()
        .success()
        .stdout(contains("Time to eat!"));

    // And only once
    ctk()
        .args(["--db", &db_path, "remind"])
        .assert()
        .success()
        .stdout(contains("No reminder due."));
}

#[test]
fn test_remind_skips_straight_to_urgent_after_a_long_gap() {
    let db_path = setup_test_db("remind_skip");
    init_db(&db_path);
    insert_event_at(&db_path, Utc::now() - TimeDelta::hours(6), 2);

    ctk()
        .args(["--db", &db_path, "remind"])
        .assert()
        .success()
        .stdout(contains("Time to eat!"));
}
