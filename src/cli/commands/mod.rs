pub mod add;
pub mod backup;
pub mod calendar;
pub mod config;
pub mod db;
pub mod del;
pub mod init;
pub mod list;
pub mod log;
pub mod show;
pub mod view;

use crate::errors::AppResult;
use crate::ui::messages::error;

/// Store failures during a mutation are reported and swallowed: the command
/// ends normally and the stored state is whatever it was before.
pub(crate) fn report_store_failure(action: &str, result: AppResult<()>) -> AppResult<()> {
    match result {
        Err(e) if e.is_storage() => {
            error(format!("{} failed: {}", action, e));
            Ok(())
        }
        other => other,
    }
}
