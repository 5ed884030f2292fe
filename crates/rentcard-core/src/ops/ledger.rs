//! The version ledger contract
//!
//! A ledger is an append-only history of schema versions of which at most one
//! is active. `add_version(.., true)` and `rollback_to_version` are the only
//! transitions that move the current-version pointer.

use crate::errors::Result;
use crate::model::VersionRecord;

/// Macro-state of a ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerState {
    /// No record has ever been made active
    Uninitialized,
    /// Exactly one record is active
    Current(VersionRecord),
}

/// Operations every ledger backend provides
pub trait VersionLedger {
    /// Record a new version
    ///
    /// When `is_active` is true every other record is deactivated in the same
    /// atomic step as the insert.
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: empty label or description (nothing is written)
    /// - `Persistence`: storage failure
    fn add_version(
        &mut self,
        version: &str,
        description: &str,
        is_active: bool,
    ) -> Result<VersionRecord>;

    /// The single active record, if any
    ///
    /// # Errors
    ///
    /// - `InvariantViolation`: more than one record is active
    /// - `Persistence`: storage failure
    fn current_version(&self) -> Result<Option<VersionRecord>>;

    /// All records, most recently applied first (ties by id descending)
    ///
    /// # Errors
    ///
    /// - `Persistence`: storage failure
    fn list_versions(&self) -> Result<Vec<VersionRecord>>;

    /// The most recent record carrying `version`, without changing anything
    ///
    /// `version` is trimmed the same way `add_version` trims stored labels.
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: label is empty after trimming
    /// - `Persistence`: storage failure
    fn find_version(&self, version: &str) -> Result<Option<VersionRecord>>;

    /// Make the most recent record labelled `version` the active one
    ///
    /// `applied_at` is preserved. Rolling back to the already-active record
    /// succeeds without writing.
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: label is empty after trimming (ledger unchanged)
    /// - `NotFound`: no record carries the label (ledger unchanged)
    /// - `Persistence`: storage failure
    fn rollback_to_version(&mut self, version: &str) -> Result<VersionRecord>;

    /// Current macro-state of the ledger
    ///
    /// # Errors
    ///
    /// Same as `current_version`.
    fn state(&self) -> Result<LedgerState> {
        Ok(match self.current_version()? {
            Some(record) => LedgerState::Current(record),
            None => LedgerState::Uninitialized,
        })
    }
}
