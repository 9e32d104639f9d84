use chrono::{TimeDelta, Utc};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{ctk, init_db, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    ctk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list_event() {
    let db_path = setup_test_db("add_list");
    init_db(&db_path);

    let t = (Utc::now() - TimeDelta::minutes(90)).to_rfc3339();

    ctk()
        .args(["--db", &db_path, "add", "3", "--time", &t])
        .assert()
        .success()
        .stdout(contains("Recorded 3 carb servings"));

    ctk()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("3"))
        .stdout(contains("1 event(s), 3 carb serving(s) total"));
}

#[test]
fn test_add_refuses_too_soon_without_force() {
    let db_path = setup_test_db("too_soon");
    init_db(&db_path);

    ctk()
        .args(["--db", &db_path, "add", "3"])
        .assert()
        .success();

    // Second meal right away: refused
    ctk()
        .args(["--db", &db_path, "add", "2"])
        .assert()
        .failure()
        .stderr(contains("use --force"));

    // With --force it goes through
    ctk()
        .args(["--db", &db_path, "add", "2", "--force"])
        .assert()
        .success()
        .stdout(contains("Recorded 2 carb servings"));
}

#[test]
fn test_add_rejects_out_of_range_servings() {
    let db_path = setup_test_db("servings_range");
    init_db(&db_path);

    ctk()
        .args(["--db", &db_path, "add", "9"])
        .assert()
        .failure();
}

#[test]
fn test_status_without_data() {
    let db_path = setup_test_db("status_empty");
    init_db(&db_path);

    ctk()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("No meals recorded in the last 7 days"))
        .stdout(contains("Time to eat!"));
}

#[test]
fn test_status_reports_elapsed_and_total() {
    let db_path = setup_test_db("status_elapsed");
    init_db(&db_path);

    let t = (Utc::now() - TimeDelta::minutes(90)).to_rfc3339();
    ctk()
        .args(["--db", &db_path, "add", "3", "--time", &t])
        .assert()
        .success();

    ctk()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Please wait before eating."))
        .stdout(contains("Last meal: 1 hour 30 minutes ago"))
        .stdout(contains("Total carb servings (last 7 days): 3"));
}

#[test]
fn test_status_safe_to_eat_after_first_threshold() {
    let db_path = setup_test_db("status_safe");
    init_db(&db_path);

    let t = (Utc::now() - TimeDelta::minutes(3 * 60 + 10)).to_rfc3339();
    ctk()
        .args(["--db", &db_path, "add", "4", "--time", &t])
        .assert()
        .success();

    ctk()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("It's safe to eat now."));
}

#[test]
fn test_del_by_id() {
    let db_path = setup_test_db("del_id");
    init_db(&db_path);

    ctk()
        .args(["--db", &db_path, "add", "3"])
        .assert()
        .success();

    ctk()
        .args(["--db", &db_path, "del", "--id", "1"])
        .assert()
        .success()
        .stdout(contains("Meal event 1 has been deleted."));

    ctk()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No meal events found."));
}

#[test]
fn test_del_unknown_id_fails() {
    let db_path = setup_test_db("del_unknown");
    init_db(&db_path);

    ctk()
        .args(["--db", &db_path, "del", "--id", "42"])
        .assert()
        .failure()
        .stderr(contains("No meal event with id 42"));
}

#[test]
fn test_prune_removes_stale_events() {
    let db_path = setup_test_db("prune");
    init_db(&db_path);

    let old = (Utc::now() - TimeDelta::days(8)).to_rfc3339();
    ctk()
        .args(["--db", &db_path, "add", "3", "--time", &old])
        .assert()
        .success();

    ctk()
        .args(["--db", &db_path, "prune", "--days", "7"])
        .assert()
        .success()
        .stdout(contains("Removed 1 stale event(s)"));

    ctk()
        .args(["--db", &db_path, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("No meal events found."));
}

#[test]
fn test_prune_reports_nothing_to_do() {
    let db_path = setup_test_db("prune_empty");
    init_db(&db_path);

    ctk()
        .args(["--db", &db_path, "prune", "--days", "7"])
        .assert()
        .success()
        .stdout(contains("No events older than 7 days."));
}

#[test]
fn test_list_period_filters_events() {
    let db_path = setup_test_db("list_period");
    init_db(&db_path);

    ctk()
        .args(["--db", &db_path, "add", "3", "--time", "2026-07-14T08:00:00Z"])
        .assert()
        .success();
    ctk()
        .args(["--db", &db_path, "add", "2", "--time", "2026-07-20T08:00:00Z"])
        .assert()
        .success();

    ctk()
        .args(["--db", &db_path, "list", "--period", "2026-07-14"])
        .assert()
        .success()
        .stdout(contains("2026-07-14 08:00"))
        .stdout(
            predicates::str::is_match("2026-07-20")
                .expect("Invalid regex")
                .not(),
        );

    ctk()
        .args(["--db", &db_path, "list", "--period", "2026-07"])
        .assert()
        .success()
        .stdout(contains("2 event(s), 5 carb serving(s) total"));
}

#[test]
fn test_db_check_passes() {
    let db_path = setup_test_db("db_check");
    init_db(&db_path);

    ctk()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed."));
}

#[test]
fn test_db_info_shows_totals() {
    let db_path = setup_test_db("db_info");
    init_db(&db_path);

    ctk()
        .args(["--db", &db_path, "add", "3"])
        .assert()
        .success();

    ctk()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total meal events:"))
        .stdout(contains("Carb servings (last 7 days):"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_ops");
    init_db(&db_path);

    ctk()
        .args(["--db", &db_path, "add", "3"])
        .assert()
        .success();

    ctk()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("Recorded 3 carb servings"));
}
