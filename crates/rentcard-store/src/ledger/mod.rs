//! SQLite-backed version ledger
//!
//! ## Responsibilities
//!
//! - Persist `VersionRecord`s in `db_versions`
//! - Move the active flag atomically (`BEGIN IMMEDIATE` per write)
//! - Resolve rollback labels to the most recent matching record
//!
//! ## Non-Responsibilities
//!
//! - Input validation and invariant checks (handled by `rentcard-core`)
//! - Output formatting (handled by `rentcard-cli`)

mod queries;
pub mod sqlite_ledger;

pub use sqlite_ledger::SqliteLedger;
