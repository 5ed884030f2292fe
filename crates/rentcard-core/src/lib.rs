//! RentCard Core - database version ledger kernel
//!
//! This crate provides the storage-independent half of the version ledger:
//! - `VersionRecord` model and validated `NewVersion` input
//! - The `VersionLedger` trait every backend implements
//! - `InMemoryLedger`, a reference backend used for embedding and property tests
//! - The single-active-version invariant check shared by all backends
//! - Error and logging facilities used across the workspace

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod rules;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, LedgerError, Result};
pub use model::{NewVersion, VersionRecord};
pub use ops::{InMemoryLedger, LedgerState, VersionLedger};
