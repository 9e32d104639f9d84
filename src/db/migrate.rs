use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `meal_events` table with the modern schema (reminder enum).
fn create_meal_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS meal_events (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            time          INTEGER NOT NULL,
            carb_servings INTEGER NOT NULL CHECK(carb_servings >= 0),
            reminder      TEXT NOT NULL DEFAULT 'none' CHECK(reminder IN ('none','first','second')),
            source        TEXT NOT NULL DEFAULT 'cli',
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_meal_events_time ON meal_events(time);
        CREATE INDEX IF NOT EXISTS idx_meal_events_reminder ON meal_events(reminder);
        "#,
    )?;
    Ok(())
}

/// Migrate the legacy `carb_time_items` table (two reminder booleans)
/// into `meal_events` (single reminder state column).
fn migrate_legacy_carb_time_items(conn: &Connection) -> Result<()> {
    warning("Legacy carb_time_items table found, migrating to meal_events...");

    conn.execute_batch(
        r#"
        PRAGMA foreign_keys=OFF;
        BEGIN;

        CREATE TABLE IF NOT EXISTS meal_events (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            time          INTEGER NOT NULL,
            carb_servings INTEGER NOT NULL CHECK(carb_servings >= 0),
            reminder      TEXT NOT NULL DEFAULT 'none' CHECK(reminder IN ('none','first','second')),
            source        TEXT NOT NULL DEFAULT 'cli',
            created_at    TEXT NOT NULL
        );

        INSERT INTO meal_events (id, time, carb_servings, reminder, source, created_at)
        SELECT id,
               time,
               carb_servings,
               CASE
                   WHEN sent_second_reminder = 1 THEN 'second'
                   WHEN sent_first_reminder = 1 THEN 'first'
                   ELSE 'none'
               END,
               'import',
               datetime('now')
        FROM carb_time_items;

        DROP TABLE carb_time_items;

        CREATE INDEX IF NOT EXISTS idx_meal_events_time ON meal_events(time);
        CREATE INDEX IF NOT EXISTS idx_meal_events_reminder ON meal_events(reminder);

        UPDATE sqlite_sequence
            SET seq = (SELECT IFNULL(MAX(id), 0) FROM meal_events)
        WHERE name = 'meal_events';

        COMMIT;
        PRAGMA foreign_keys=ON;
        "#,
    )?;

    success("Migrated carb_time_items to meal_events.");
    Ok(())
}

/// Pre-migration safety copy of the whole database file as a zip.
fn backup_before_migration(db_path: &str) -> Result<()> {
    use chrono::Utc;
    use rusqlite::Error;
    use std::fs::{self, File};
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let backup_name = format!(
        "{}-backup_db_pre_migration.zip",
        Utc::now().format("%Y%m%d_%H%M%S")
    );

    let backup_path = std::path::Path::new(db_path)
        .parent()
        .unwrap_or_else(|| std::path::Path::new("."))
        .join(&backup_name);

    let io_err = |e: std::io::Error| Error::ToSqlConversionFailure(Box::new(e));

    let file = File::create(&backup_path).map_err(io_err)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| io_err(std::io::Error::other(e)))?;

    let db_content = fs::read(db_path).map_err(io_err)?;
    zip.write_all(&db_content).map_err(io_err)?;
    zip.finish().map_err(|e| io_err(std::io::Error::other(e)))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    let meal_events_exists = table_exists(conn, "meal_events")?;
    let legacy_exists = table_exists(conn, "carb_time_items")?;

    // 2) Legacy schema → safety backup before touching anything
    if legacy_exists {
        warning("Legacy schema detected — creating safety backup before migration...");

        let db_path: String = conn
            .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
            .unwrap_or_default();

        if !db_path.is_empty() {
            backup_before_migration(&db_path)?;
        } else {
            warning("Could not determine DB path — backup skipped.");
        }

        migrate_legacy_carb_time_items(conn)?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', 'carb_time_items_to_meal_events',
                     'Migrated legacy reminder booleans to reminder state')",
            [],
        )?;

        return Ok(());
    }

    // 3) Fresh database → create the modern table
    if !meal_events_exists {
        create_meal_events_table(conn)?;
        success("Created meal_events table (modern schema).");
        return Ok(());
    }

    // 4) Already modern → make sure the indexes are in place
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_meal_events_time ON meal_events(time);
        CREATE INDEX IF NOT EXISTS idx_meal_events_reminder ON meal_events(reminder);
        "#,
    )?;

    Ok(())
}
