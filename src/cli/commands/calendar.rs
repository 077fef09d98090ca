use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::interval::sort_by_from;
use crate::core::store::BookingStore;
use crate::errors::AppResult;
use crate::ui::calendar;
use crate::utils::date::{first_of_month, parse_month, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month } = cmd {
        let store = BookingStore::open(&cfg.database)?;
        print_month(&store, cfg, month.as_deref())?;
    }
    Ok(())
}

pub fn print_month(store: &BookingStore, cfg: &Config, month: Option<&str>) -> AppResult<()> {
    let now = today();
    let month = match month {
        Some(m) => parse_month(m)?,
        None => first_of_month(now),
    };

    let mut bookings = store.get_all()?;
    sort_by_from(&mut bookings);

    print!("{}", calendar::render(month, &bookings, now, cfg.week_start()));
    Ok(())
}
