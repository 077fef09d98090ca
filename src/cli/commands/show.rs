use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::interval::{overlapping_bookings, sort_by_from};
use crate::core::store::BookingStore;
use crate::errors::AppResult;
use crate::models::booking::Booking;
use crate::ui::detail;
use crate::utils::date::require_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id, day } = cmd {
        let store = BookingStore::open(&cfg.database)?;

        let booking = match (id, day) {
            (Some(id), _) => store.get_by_id(*id)?,
            (None, Some(day)) => primary_for_day(&store, &require_date(day)?)?,
            (None, None) => None,
        };

        match booking {
            Some(b) => print!("{}", detail::render(&b)),
            None => println!("Not found"),
        }
    }
    Ok(())
}

/// The booking a calendar cell links to: the earliest-starting booking that
/// covers `day`.
fn primary_for_day(store: &BookingStore, day: &chrono::NaiveDate) -> AppResult<Option<Booking>> {
    let mut bookings = store.get_all()?;
    sort_by_from(&mut bookings);
    Ok(overlapping_bookings(*day, &bookings)
        .first()
        .map(|b| (*b).clone()))
}
