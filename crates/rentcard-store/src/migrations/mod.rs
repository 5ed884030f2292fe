//! Bootstrap migrations for the ledger's own storage
//!
//! These create the `db_versions` table the ledger writes to. They are
//! unrelated to the application versions the ledger records.
//!
//! Provides:
//! - Migration runner with checksum verification
//! - Idempotent application
//! - Embedded SQL migrations

mod checksums;
mod embedded;
mod runner;

pub use embedded::{get_migrations, Migration};
pub use runner::{applied_migrations, apply_migrations, AppliedMigration};
