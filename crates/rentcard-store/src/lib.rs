//! RentCard Store - SQLite persistence for the version ledger
//!
//! Provides:
//! - Connection helpers (`db`)
//! - Embedded, checksummed bootstrap migrations for the ledger's own tables
//! - `SqliteLedger`, the durable `VersionLedger` backend

pub mod db;
pub mod errors;
pub mod ledger;
pub mod migrations;

// Re-export key types
pub use db::DbOptions;
pub use errors::Result;
pub use ledger::SqliteLedger;
