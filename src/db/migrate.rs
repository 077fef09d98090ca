//! Schema migrations.
//!
//! The schema version lives in `PRAGMA user_version`. Each migration runs
//! once, inside its own transaction, and is recorded in the `log` table as
//! `migration_applied`.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::notice;
use rusqlite::{Connection, Result};

struct Migration {
    version: u32,
    name: &'static str,
    description: &'static str,
    apply: fn(&Connection) -> Result<()>,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "20250301_0001_create_bookings",
    description: "Created bookings table",
    apply: create_bookings_table,
}];

/// Highest schema version this build knows how to produce.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

/// Ensure that the `log` table exists. It is created outside the versioned
/// migrations because every migration records itself there.
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

fn create_bookings_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            from_date   TEXT NOT NULL,
            to_date     TEXT NOT NULL,
            name        TEXT NOT NULL,
            contact     TEXT NOT NULL DEFAULT '',
            notes       TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_bookings_from ON bookings(from_date);
        "#,
    )?;
    Ok(())
}

pub fn schema_version(conn: &Connection) -> Result<u32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

/// Public entry point: run all pending migrations.
///
/// Invoked by `db::initialize::init_db()` and `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    let current = schema_version(conn)?;
    if current > latest_version() {
        return Err(AppError::Migration(format!(
            "database schema v{} is newer than this build (v{})",
            current,
            latest_version()
        )));
    }

    for m in MIGRATIONS.iter().filter(|m| m.version > current) {
        let tx = conn.unchecked_transaction()?;

        (m.apply)(&tx).map_err(|e| AppError::Migration(format!("{}: {}", m.name, e)))?;

        // PRAGMA does not accept bound parameters.
        tx.execute_batch(&format!("PRAGMA user_version = {};", m.version))?;
        tx.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [m.name, m.description],
        )?;

        tx.commit()?;

        notice(format!(
            "Migration applied: {} → schema v{}",
            m.name, m.version
        ));
    }

    Ok(())
}
