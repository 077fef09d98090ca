//! Booking store: the single owner of persisted booking records.
//!
//! Each mutation runs in one SQLite transaction together with its audit-log
//! line, so either both land or neither does. After a successful commit the
//! store notifies its subscribers; views use that to drop stale snapshots.

use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    count_bookings, delete_all_bookings, delete_booking, insert_booking, load_all_bookings,
    load_booking_by_id,
};
use crate::errors::AppResult;
use crate::models::booking::{Booking, NewBooking};
use rusqlite::Connection;
use std::cell::Cell;
use std::rc::Rc;

/// Emitted after a mutation has been committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Created(i64),
    Deleted(i64),
    Cleared,
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

pub struct BookingStore {
    pool: DbPool,
    listeners: Vec<Listener>,
}

impl BookingStore {
    /// Open the database file and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self::from_pool(pool))
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self::from_pool(pool))
    }

    /// Wrap an already initialized pool.
    pub fn from_pool(pool: DbPool) -> Self {
        Self {
            pool,
            listeners: Vec::new(),
        }
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: StoreEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    pub fn create(&mut self, booking: &NewBooking) -> AppResult<i64> {
        let tx = self.pool.conn.transaction()?;
        let id = insert_booking(&tx, booking)?;
        ttlog(
            &tx,
            "add",
            &format!("#{}", id),
            &format!("{} ({} → {})", booking.name, booking.from, booking.to),
        )?;
        tx.commit()?;

        self.emit(StoreEvent::Created(id));
        Ok(id)
    }

    pub fn get_by_id(&self, id: i64) -> AppResult<Option<Booking>> {
        load_booking_by_id(&self.pool.conn, id)
    }

    pub fn get_all(&self) -> AppResult<Vec<Booking>> {
        load_all_bookings(&self.pool.conn)
    }

    pub fn count(&self) -> AppResult<usize> {
        count_bookings(&self.pool.conn)
    }

    /// Remove one booking. A missing id is not an error; the return value
    /// tells whether anything was removed, and no event is emitted for it.
    pub fn delete_by_id(&mut self, id: i64) -> AppResult<bool> {
        let tx = self.pool.conn.transaction()?;
        let removed = delete_booking(&tx, id)? > 0;
        if removed {
            ttlog(&tx, "del", &format!("#{}", id), "Booking deleted")?;
        }
        tx.commit()?;

        if removed {
            self.emit(StoreEvent::Deleted(id));
        }
        Ok(removed)
    }

    /// Remove every booking. Returns how many were removed.
    pub fn delete_all(&mut self) -> AppResult<usize> {
        let tx = self.pool.conn.transaction()?;
        let removed = delete_all_bookings(&tx)?;
        ttlog(
            &tx,
            "del",
            "all",
            &format!("All bookings deleted ({})", removed),
        )?;
        tx.commit()?;

        self.emit(StoreEvent::Cleared);
        Ok(removed)
    }

    pub fn close(self) -> AppResult<()> {
        self.pool.close()
    }
}

/// A view's read-only copy of `get_all()`, refetched once invalidated.
#[derive(Default)]
pub struct BookingSnapshot {
    bookings: Option<Vec<Booking>>,
    stale: Rc<Cell<bool>>,
    loads: usize,
}

impl BookingSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&mut self) {
        self.stale.set(true);
    }

    pub fn is_stale(&self) -> bool {
        self.bookings.is_none() || self.stale.get()
    }

    /// Listener to hand to `BookingStore::subscribe`; marks this snapshot
    /// stale on every store event.
    pub fn invalidator(&self) -> impl FnMut(&StoreEvent) + 'static {
        let stale = Rc::clone(&self.stale);
        move |_| stale.set(true)
    }

    pub fn get(&mut self, store: &BookingStore) -> AppResult<&[Booking]> {
        if self.is_stale() {
            self.bookings = Some(store.get_all()?);
            self.stale.set(false);
            self.loads += 1;
        }
        Ok(self.bookings.as_deref().unwrap_or_default())
    }

    /// Number of fetches performed so far.
    pub fn loads(&self) -> usize {
        self.loads
    }
}
