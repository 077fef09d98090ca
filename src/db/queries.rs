use crate::errors::{AppError, AppResult};
use crate::models::booking::{Booking, NewBooking};
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const DATE_FMT: &str = "%Y-%m-%d";

fn parse_db_date(raw: String, column: usize) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&raw, DATE_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.clone())),
        )
    })
}

pub fn map_row(row: &Row) -> Result<Booking> {
    let from = parse_db_date(row.get("from_date")?, 1)?;
    let to = parse_db_date(row.get("to_date")?, 2)?;

    Ok(Booking {
        id: row.get("id")?,
        from,
        to,
        name: row.get("name")?,
        contact: row.get("contact")?,
        notes: row.get("notes")?,
    })
}

/// Insert a booking and return the id SQLite assigned to it.
pub fn insert_booking(conn: &Connection, booking: &NewBooking) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO bookings (from_date, to_date, name, contact, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            booking.from.format(DATE_FMT).to_string(),
            booking.to.format(DATE_FMT).to_string(),
            booking.name,
            booking.contact,
            booking.notes,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_booking_by_id(conn: &Connection, id: i64) -> AppResult<Option<Booking>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, from_date, to_date, name, contact, notes
         FROM bookings WHERE id = ?1",
    )?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// All bookings in key order.
pub fn load_all_bookings(conn: &Connection) -> AppResult<Vec<Booking>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, from_date, to_date, name, contact, notes
         FROM bookings ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Returns the number of removed rows (0 when the id did not exist).
pub fn delete_booking(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM bookings WHERE id = ?1", [id])?)
}

pub fn delete_all_bookings(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM bookings", [])?)
}

pub fn count_bookings(conn: &Connection) -> AppResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM bookings", [], |row| row.get(0))?;
    Ok(n as usize)
}

/// Earliest `from` and latest `to` across the table.
pub fn booking_date_bounds(conn: &Connection) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let bounds: (Option<String>, Option<String>) = conn.query_row(
        "SELECT MIN(from_date), MAX(to_date) FROM bookings",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    match bounds {
        (Some(first), Some(last)) => Ok(Some((
            parse_db_date(first, 0)?,
            parse_db_date(last, 1)?,
        ))),
        _ => Ok(None),
    }
}
