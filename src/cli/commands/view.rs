use crate::cli::commands::{calendar, list};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::BookingStore;
use crate::errors::AppResult;
use crate::models::view::View;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::View { mode, month } = cmd {
        let view = resolve_view(mode.as_deref(), cfg);
        let store = BookingStore::open(&cfg.database)?;

        match view {
            View::Calendar => calendar::print_month(&store, cfg, month.as_deref())?,
            View::List => list::print_bookings(store.get_all()?, cfg, false, false)?,
        }
    }
    Ok(())
}

/// Explicit mode first, then the configured default. Unknown explicit
/// values mean the calendar.
pub fn resolve_view(mode: Option<&str>, cfg: &Config) -> View {
    match mode {
        Some(m) => View::from_code(m).unwrap_or_else(|| {
            warning(format!("Unknown view '{}', showing the calendar.", m));
            View::Calendar
        }),
        None => cfg.default_view(),
    }
}
