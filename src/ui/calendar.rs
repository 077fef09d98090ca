//! Month grid renderer.

use crate::core::interval::{DayCell, marker_slot, month_cells};
use crate::models::booking::Booking;
use crate::utils::colors::{dim, paint_marker};
use crate::utils::date::weekday_header;
use ansi_term::Style;
use chrono::{Datelike, NaiveDate, Weekday};

/// Two-character day label, one marker color per covering booking
/// (the first two bookings when more overlap).
fn render_cell(cell: &DayCell) -> String {
    let label = format!("{:>2}", cell.day.day());

    let text = match cell.booking_ids.as_slice() {
        [] if !cell.in_month => dim(&label),
        [] => label,
        [only] => paint_marker(&label, marker_slot(*only)),
        [first, second, ..] => {
            let mut chars = label.chars();
            let a = chars.next().map(String::from).unwrap_or_default();
            let b: String = chars.collect();
            format!(
                "{}{}",
                paint_marker(&a, marker_slot(*first)),
                paint_marker(&b, marker_slot(*second))
            )
        }
    };

    if cell.is_today {
        Style::new().underline().paint(text).to_string()
    } else {
        text
    }
}

/// Render `month` with `bookings` (in display priority order) as a
/// seven-column grid followed by a legend of the bookings shown.
pub fn render(month: NaiveDate, bookings: &[Booking], today: NaiveDate, week_start: Weekday) -> String {
    let cells = month_cells(month, bookings, today, week_start);
    let mut out = String::new();

    let title = month.format("%B %Y").to_string();
    out.push_str(&format!("{:^20}\n", title));
    out.push_str(&weekday_header(week_start).join(" "));
    out.push('\n');

    for week in cells.chunks(7) {
        let line: Vec<String> = week.iter().map(render_cell).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }

    // Legend: bookings in order of first appearance on the grid.
    let mut shown: Vec<i64> = Vec::new();
    for id in cells.iter().flat_map(|c| c.booking_ids.iter()) {
        if !shown.contains(id) {
            shown.push(*id);
        }
    }

    if !shown.is_empty() {
        out.push('\n');
        for id in shown {
            if let Some(b) = bookings.iter().find(|b| b.id == id) {
                out.push_str(&format!(
                    "{} #{} {} ({} → {})\n",
                    paint_marker("  ", marker_slot(b.id)),
                    b.id,
                    b.name,
                    b.from,
                    b.to
                ));
            }
        }
    }

    out
}
