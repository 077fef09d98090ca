use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::interval::{filter_upcoming, sort_by_from};
use crate::core::store::{BookingSnapshot, BookingStore};
use crate::errors::{AppError, AppResult};
use crate::models::booking::Booking;
use crate::ui::list;
use crate::utils::date::today;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { all, json } = cmd {
        let store = BookingStore::open(&cfg.database)?;
        let bookings = store.get_all()?;
        print_bookings(bookings, cfg, *all, *json)?;
    }
    Ok(())
}

/// Re-read the store after a committed mutation and show the list again.
pub fn refresh_list(store: &BookingStore, snapshot: &mut BookingSnapshot, cfg: &Config) -> AppResult<()> {
    let bookings = snapshot.get(store)?.to_vec();
    println!();
    print_bookings(bookings, cfg, false, false)
}

/// Render the list view from a fresh `get_all()` result.
pub fn print_bookings(mut bookings: Vec<Booking>, cfg: &Config, all: bool, json: bool) -> AppResult<()> {
    sort_by_from(&mut bookings);

    let now = today();
    let shown: Vec<&Booking> = if all || cfg.show_old_bookings {
        bookings.iter().collect()
    } else {
        filter_upcoming(&bookings, now)
    };

    if json {
        let out = serde_json::to_string_pretty(&shown).map_err(|e| AppError::Other(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    if bookings.is_empty() {
        println!("No bookings");
        return Ok(());
    }

    if shown.is_empty() {
        println!("No upcoming bookings (use --all to include past ones)");
        return Ok(());
    }

    print!("{}", list::render(&shown, now));
    Ok(())
}
