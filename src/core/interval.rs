//! Date-interval logic over bookings.
//!
//! Every function here is a pure query over its inputs. Booking ranges are
//! closed (`[from, to]`, both ends inclusive) at day granularity.
//!
//! Inverted ranges (`from > to`) are never rejected. They behave as follows:
//! the start day still counts as covered, no other day does, `is_active` is
//! false and `days_span` is negative.

use crate::models::booking::Booking;
use crate::utils::colors::MARKER_PALETTE;
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Days shown on each side of a booking in the detail strip.
pub const STRIP_PADDING_DAYS: u64 = 8;

/// True iff `now` falls within `[from, to]`.
pub fn is_active(booking: &Booking, now: NaiveDate) -> bool {
    booking.from <= now && now <= booking.to
}

/// Whole days between `from` and `to`. Not clamped.
pub fn days_span(booking: &Booking) -> i64 {
    (booking.to - booking.from).num_days()
}

/// Whether `day` gets a marker for `booking`: inside the range, or the start
/// day itself so a degenerate range still renders.
pub fn covers(booking: &Booking, day: NaiveDate) -> bool {
    is_active(booking, day) || booking.from == day
}

/// Every booking that covers `day`, in the order given.
pub fn overlapping_bookings(day: NaiveDate, bookings: &[Booking]) -> Vec<&Booking> {
    bookings.iter().filter(|b| covers(b, day)).collect()
}

/// Bookings whose `to` is strictly after `now`, order preserved.
pub fn filter_upcoming(bookings: &[Booking], now: NaiveDate) -> Vec<&Booking> {
    bookings.iter().filter(|b| b.to > now).collect()
}

/// Stable ascending sort by start date.
pub fn sort_by_from(bookings: &mut [Booking]) {
    bookings.sort_by_key(|b| b.from);
}

/// Palette slot used to color `id`'s markers.
pub fn marker_slot(id: i64) -> usize {
    id.rem_euclid(MARKER_PALETTE.len() as i64) as usize
}

pub fn start_of_week(day: NaiveDate, week_start: Weekday) -> NaiveDate {
    let back = (7 + day.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    day.checked_sub_days(Days::new(back as u64)).unwrap_or(day)
}

pub fn end_of_week(day: NaiveDate, week_start: Weekday) -> NaiveDate {
    let start = start_of_week(day, week_start);
    start.checked_add_days(Days::new(6)).unwrap_or(start)
}

pub fn last_of_month(month: NaiveDate) -> NaiveDate {
    let first = month.with_day(1).unwrap_or(month);
    first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(first)
}

/// Inclusive day range `[start, end]`; empty when `start > end`.
fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Calendar cells for the month containing `month`, weeks starting Sunday.
pub fn month_grid_days(month: NaiveDate) -> Vec<NaiveDate> {
    month_grid_days_with(month, Weekday::Sun)
}

/// From the start of the week holding the 1st to the end of the week
/// holding the last day of the month.
pub fn month_grid_days_with(month: NaiveDate, week_start: Weekday) -> Vec<NaiveDate> {
    let first = month.with_day(1).unwrap_or(month);
    let last = last_of_month(first);
    days_between(
        start_of_week(first, week_start),
        end_of_week(last, week_start),
    )
}

/// One rendered cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    /// Covering bookings, caller order.
    pub booking_ids: Vec<i64>,
}

impl DayCell {
    /// Link target of the cell: the first covering booking.
    pub fn primary(&self) -> Option<i64> {
        self.booking_ids.first().copied()
    }

    pub fn is_booked(&self) -> bool {
        !self.booking_ids.is_empty()
    }
}

pub fn month_cells(
    month: NaiveDate,
    bookings: &[Booking],
    today: NaiveDate,
    week_start: Weekday,
) -> Vec<DayCell> {
    month_grid_days_with(month, week_start)
        .into_iter()
        .map(|day| DayCell {
            day,
            in_month: day.year() == month.year() && day.month() == month.month(),
            is_today: day == today,
            booking_ids: overlapping_bookings(day, bookings)
                .iter()
                .map(|b| b.id)
                .collect(),
        })
        .collect()
}

/// Grid indexes of the cells a booking starts and ends on, `None` when that
/// day is not on the grid.
pub fn booking_cells(grid: &[NaiveDate], booking: &Booking) -> (Option<usize>, Option<usize>) {
    let find = |d: NaiveDate| grid.iter().position(|g| *g == d);
    (find(booking.from), find(booking.to))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripDay {
    pub day: NaiveDate,
    pub marked: bool,
    pub is_start: bool,
    pub is_end: bool,
}

/// Strip days sharing one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripMonth {
    /// First day of the month.
    pub month: NaiveDate,
    pub days: Vec<StripDay>,
}

/// The detail-view strip: a few days of context around the booking,
/// grouped by month in chronological order.
pub fn detail_strip(booking: &Booking) -> Vec<StripMonth> {
    let lo = booking.from.min(booking.to);
    let hi = booking.from.max(booking.to);
    let start = lo
        .checked_sub_days(Days::new(STRIP_PADDING_DAYS))
        .unwrap_or(lo);
    let end = hi
        .checked_add_days(Days::new(STRIP_PADDING_DAYS))
        .unwrap_or(hi);

    let mut months: Vec<StripMonth> = Vec::new();
    for day in days_between(start, end) {
        let entry = StripDay {
            day,
            marked: covers(booking, day),
            is_start: day == booking.from,
            is_end: day == booking.to,
        };

        let key = day.with_day(1).unwrap_or(day);
        match months.last_mut() {
            Some(m) if m.month == key => m.days.push(entry),
            _ => months.push(StripMonth {
                month: key,
                days: vec![entry],
            }),
        }
    }
    months
}
