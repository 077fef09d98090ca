use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{run_pending_migrations, schema_version};
use crate::db::pool::DbPool;
use crate::db::stats::{integrity_problems, print_db_info};
use crate::errors::AppResult;
use crate::ui::messages::{error, success};

/// `db` maintenance flags, applied in a fixed order on one connection.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;

    // --info reads the bookings table, so it needs the schema too.
    if *migrate || *info {
        run_pending_migrations(&pool.conn)?;
    }
    if *migrate {
        success(format!("Schema is up to date (v{}).", schema_version(&pool.conn)?));
    }

    if *info {
        print_db_info(&pool, &cfg.database)?;
    }

    if *check {
        let problems = integrity_problems(&pool.conn)?;
        if problems.is_empty() {
            success("Integrity check passed.");
        } else {
            for p in &problems {
                error(format!("Integrity: {}", p));
            }
        }
    }

    if *vacuum {
        pool.conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    pool.close()
}
