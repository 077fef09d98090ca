//! Booking list renderer.

use crate::core::interval::{days_span, is_active};
use crate::models::booking::Booking;
use crate::utils::colors::active_marker;
use crate::utils::date::short_label;
use crate::utils::table::Table;
use chrono::NaiveDate;

pub fn duration_label(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

/// Rows for `bookings` as given; sorting and filtering belong to the caller.
pub fn render(bookings: &[&Booking], today: NaiveDate) -> String {
    let mut table = Table::new(vec!["", "ID", "Name", "Duration", "From", "To"]);

    for b in bookings {
        table.add_row(vec![
            active_marker(is_active(b, today)),
            format!("#{}", b.id),
            b.name.clone(),
            duration_label(days_span(b)),
            short_label(b.from),
            format!("→ {}", short_label(b.to)),
        ]);
    }

    table.render()
}
