use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named reservation of the closed date range `[from, to]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,            // ⇔ bookings.id (INTEGER PRIMARY KEY AUTOINCREMENT)
    pub from: NaiveDate,    // ⇔ bookings.from_date (TEXT "YYYY-MM-DD")
    pub to: NaiveDate,      // ⇔ bookings.to_date (TEXT "YYYY-MM-DD")
    pub name: String,       // ⇔ bookings.name
    pub contact: String,    // ⇔ bookings.contact (TEXT, default '')
    pub notes: String,      // ⇔ bookings.notes (TEXT, default '')
}

/// Booking payload before the store has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub notes: String,
}

impl NewBooking {
    pub fn new(from: NaiveDate, to: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            from,
            to,
            name: name.into(),
            contact: String::new(),
            notes: String::new(),
        }
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn is_inverted(&self) -> bool {
        self.from > self.to
    }

    /// Attach the id handed out by the store.
    pub fn into_booking(self, id: i64) -> Booking {
        Booking {
            id,
            from: self.from,
            to: self.to,
            name: self.name,
            contact: self.contact,
            notes: self.notes,
        }
    }
}

impl Booking {
    /// `from > to` is persisted as-is; callers may want to flag it.
    pub fn is_inverted(&self) -> bool {
        self.from > self.to
    }
}
