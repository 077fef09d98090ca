use crate::core::store::BookingStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    One(i64),
    All,
}

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(store: &mut BookingStore, target: DeleteTarget) -> AppResult<()> {
        match target {
            DeleteTarget::One(id) => {
                if store.delete_by_id(id)? {
                    success(format!("Booking #{} has been deleted.", id));
                } else {
                    info(format!("No booking with id {}; nothing deleted.", id));
                }
            }
            DeleteTarget::All => {
                let removed = store.delete_all()?;
                success(format!("All bookings have been deleted ({}).", removed));
            }
        }
        Ok(())
    }
}
