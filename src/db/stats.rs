use crate::db::migrate::{latest_version, schema_version};
use crate::db::pool::DbPool;
use crate::db::queries::{booking_date_bounds, count_bookings, load_all_bookings};
use crate::core::interval::is_active;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::today;
use rusqlite::Connection;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    println!(
        "{}• Schema:{} v{} (latest v{})",
        CYAN,
        RESET,
        schema_version(&pool.conn)?,
        latest_version()
    );

    //
    // 2) BOOKINGS
    //
    let count = count_bookings(&pool.conn)?;
    println!("{}• Bookings:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    let now = today();
    let active = load_all_bookings(&pool.conn)?
        .iter()
        .filter(|b| is_active(b, now))
        .count();
    println!("{}• Active today:{} {}", CYAN, RESET, active);

    //
    // 3) DATE RANGE
    //
    println!("{}• Date range:{}", CYAN, RESET);
    match booking_date_bounds(&pool.conn)? {
        Some((first, last)) => {
            println!("    from: {}", first);
            println!("    to:   {}", last);
        }
        None => {
            println!("    from: {GREY}--{RESET}");
            println!("    to:   {GREY}--{RESET}");
        }
    }

    println!();
    Ok(())
}

/// Rows reported by `PRAGMA integrity_check`, minus the lone "ok" of a
/// healthy file.
pub fn integrity_problems(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA integrity_check;")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        let line = r?;
        if line != "ok" {
            out.push(line);
        }
    }
    Ok(out)
}
