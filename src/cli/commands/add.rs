use crate::cli::commands::list::refresh_list;
use crate::cli::commands::report_store_failure;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::store::{BookingSnapshot, BookingStore};
use crate::errors::{AppError, AppResult};
use crate::models::booking::NewBooking;
use crate::utils::date::require_date;

/// Record a booking, then re-read the store and show the updated list.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        from,
        to,
        name,
        contact,
        notes,
    } = cmd
    {
        //
        // 1. Input checks (the store itself accepts anything)
        //
        let from = require_date(from)?;
        let to = require_date(to)?;

        if name.trim().is_empty() {
            return Err(AppError::InvalidInput("name must not be empty".into()));
        }

        let booking = NewBooking::new(from, to, name.as_str())
            .with_contact(contact.clone().unwrap_or_default())
            .with_notes(notes.clone().unwrap_or_default());

        //
        // 2. Persist, then refresh from confirmed state
        //
        report_store_failure("Saving the booking", save_and_refresh(cfg, &booking))?;
    }

    Ok(())
}

fn save_and_refresh(cfg: &Config, booking: &NewBooking) -> AppResult<()> {
    let mut store = BookingStore::open(&cfg.database)?;
    let mut snapshot = BookingSnapshot::new();
    store.subscribe(snapshot.invalidator());

    AddLogic::apply(&mut store, booking)?;

    // The change is committed at this point; a failed re-read is its own error.
    report_store_failure("Refreshing the booking list", refresh_list(&store, &mut snapshot, cfg))
}
