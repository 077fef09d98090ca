use crate::core::store::BookingStore;
use crate::errors::AppResult;
use crate::models::booking::NewBooking;
use crate::ui::messages::{success, warning};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(store: &mut BookingStore, booking: &NewBooking) -> AppResult<i64> {
        // Inverted ranges are stored as given.
        if booking.is_inverted() {
            warning(format!(
                "Start date {} is after end date {}; saving anyway.",
                booking.from, booking.to
            ));
        }

        let id = store.create(booking)?;

        success(format!(
            "Booking #{} saved: {} ({} → {})",
            id, booking.name, booking.from, booking.to
        ));
        Ok(id)
    }
}
