//! Single booking view: context strip plus the booking's fields.

use crate::core::interval::{StripDay, days_span, detail_strip, marker_slot};
use crate::models::booking::Booking;
use crate::ui::list::duration_label;
use crate::utils::colors::paint_marker;
use crate::utils::date::weekday_name;
use crate::utils::table::pad_right;
use ansi_term::Colour;
use chrono::Datelike;

const LABEL_WIDTH: usize = 10;
const NOTES_WIDTH: usize = 60;

fn render_strip_day(d: &StripDay, slot: usize) -> String {
    let open = if d.is_start { "[" } else { " " };
    let close = if d.is_end { "]" } else { " " };
    let label = format!("{:>2}", d.day.day());
    let label = if d.marked {
        paint_marker(&label, slot)
    } else {
        label
    };
    format!("{}{}{}", open, label, close)
}

fn field(out: &mut String, label: &str, value: &str) {
    let label = Colour::White.bold().paint(label).to_string();
    out.push_str(&pad_right(&label, LABEL_WIDTH));
    out.push_str(value);
    out.push('\n');
}

pub fn render(booking: &Booking) -> String {
    let slot = marker_slot(booking.id);
    let mut out = String::new();

    for month in detail_strip(booking) {
        out.push_str(&Colour::Fixed(244).paint(month.month.format("%B %Y").to_string()).to_string());
        out.push('\n');
        for week in month.days.chunks(7) {
            let line: Vec<String> = week.iter().map(|d| render_strip_day(d, slot)).collect();
            out.push_str(&line.concat());
            out.push('\n');
        }
    }
    out.push('\n');

    field(
        &mut out,
        "Duration",
        &format!(
            "From {}, {} to {}, {} ({})",
            weekday_name(booking.from),
            booking.from.format("%d.%-m."),
            weekday_name(booking.to),
            booking.to.format("%d.%-m."),
            duration_label(days_span(booking))
        ),
    );
    if booking.is_inverted() {
        out.push_str(&pad_right("", LABEL_WIDTH));
        out.push_str(&Colour::Yellow.paint("end date is before start date").to_string());
        out.push('\n');
    }
    field(&mut out, "Name", &booking.name);

    if !booking.contact.is_empty() {
        field(&mut out, "Contact", &booking.contact);
    }

    if !booking.notes.is_empty() {
        let indent = " ".repeat(LABEL_WIDTH);
        let options = textwrap::Options::new(NOTES_WIDTH).subsequent_indent(&indent);
        field(&mut out, "Notes", &textwrap::fill(&booking.notes, options));
    }

    out
}
