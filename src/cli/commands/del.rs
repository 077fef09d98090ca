use crate::cli::commands::list::refresh_list;
use crate::cli::commands::report_store_failure;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::{DeleteLogic, DeleteTarget};
use crate::core::store::{BookingSnapshot, BookingStore};
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, all, yes } = cmd {
        let target = match (id, *all) {
            (_, true) => DeleteTarget::All,
            (Some(id), false) => DeleteTarget::One(*id),
            (None, false) => return Ok(()),
        };

        //
        // Confirmation prompt
        //
        let prompt = match target {
            DeleteTarget::One(id) => format!("Delete booking #{}? Are you sure?", id),
            DeleteTarget::All => "Delete ALL bookings? This action is irreversible.".to_string(),
        };

        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion, then refresh
        //
        report_store_failure("Deleting", delete_and_refresh(cfg, target))?;
    }

    Ok(())
}

fn delete_and_refresh(cfg: &Config, target: DeleteTarget) -> AppResult<()> {
    let mut store = BookingStore::open(&cfg.database)?;
    let mut snapshot = BookingSnapshot::new();
    store.subscribe(snapshot.invalidator());

    DeleteLogic::apply(&mut store, target)?;

    // The change is committed at this point; a failed re-read is its own error.
    report_store_failure("Refreshing the booking list", refresh_list(&store, &mut snapshot, cfg))
}
