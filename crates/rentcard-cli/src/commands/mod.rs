//! `db:*` subcommands

pub mod add;
pub mod list;
pub mod rollback;
pub mod version;

use crate::config::CliConfig;
use rentcard_core::Result;
use rentcard_store::SqliteLedger;

/// Open the ledger named by the resolved configuration, creating it if needed
fn open_ledger(config: &CliConfig) -> Result<SqliteLedger> {
    SqliteLedger::open(&config.db_path, &config.db_options)
}

/// Open the ledger for a command that only reads it
///
/// Returns `None` when no database file exists yet, leaving the filesystem
/// untouched.
fn open_existing_ledger(config: &CliConfig) -> Result<Option<SqliteLedger>> {
    if !config.db_path.exists() {
        tracing::debug!(db_path = %config.db_path.display(), "No ledger database yet");
        return Ok(None);
    }
    open_ledger(config).map(Some)
}
