//! `VersionLedger` over SQLite

use std::path::Path;
use std::time::Instant;

use crate::db::{self, DbOptions};
use crate::errors::{from_rusqlite, Result};
use crate::ledger::queries;
use crate::migrations::apply_migrations;
use rentcard_core::errors::{ExError, LedgerError};
use rentcard_core::model::{now_millis, NewVersion};
use rentcard_core::rules::{invariants, validation};
use rentcard_core::{log_op_end, log_op_error, log_op_start, VersionLedger, VersionRecord};
use rusqlite::{Connection, TransactionBehavior};

/// Durable version ledger
///
/// Owns its connection. Each write runs in a `BEGIN IMMEDIATE` transaction,
/// so concurrent processes serialize on the SQLite write lock, and the
/// partial unique index on `is_active` rejects any second active row.
pub struct SqliteLedger {
    conn: Connection,
}

impl SqliteLedger {
    /// Wrap an open connection, applying pending bootstrap migrations
    ///
    /// # Errors
    ///
    /// Propagates migration failures.
    pub fn new(mut conn: Connection) -> Result<Self> {
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Open (creating if needed) the ledger database at `path`
    ///
    /// # Errors
    ///
    /// - `Io`: the parent directory could not be created
    /// - `Persistence`: open, configure or migration failed
    pub fn open<P: AsRef<Path>>(path: P, options: &DbOptions) -> Result<Self> {
        Self::new(db::open_configured(path, options)?)
    }

    /// Open a fresh in-memory ledger
    ///
    /// # Errors
    ///
    /// Propagates open and migration failures.
    pub fn open_in_memory() -> Result<Self> {
        Self::new(db::open_in_memory()?)
    }

    /// Borrow the underlying connection (read-only inspection in tests and tooling)
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn add_version_tx(&mut self, input: &NewVersion) -> Result<VersionRecord> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(from_rusqlite)?;

        if input.is_active() {
            let demoted = queries::deactivate_all_except(&tx, None)?;
            tracing::debug!(demoted, "Cleared previous active version");
        }

        let applied_at = now_millis();
        let id = queries::insert_version(
            &tx,
            input.version(),
            input.description(),
            applied_at,
            input.is_active(),
        )?;

        tx.commit().map_err(from_rusqlite)?;

        Ok(VersionRecord {
            id,
            version: input.version().to_string(),
            description: input.description().to_string(),
            applied_at,
            is_active: input.is_active(),
        })
    }

    fn rollback_tx(&mut self, version: &str) -> Result<VersionRecord> {
        let version = lookup_label(version, "rollback_to_version")?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(from_rusqlite)?;

        let target = queries::select_latest_by_label(&tx, &version)?
            .ok_or(LedgerError::VersionNotFound { version })?;

        if target.is_active {
            // Dropping the transaction rolls back; nothing was written.
            tracing::debug!(version_id = target.id, "Version already active");
            return Ok(target);
        }

        queries::deactivate_all_except(&tx, Some(target.id))?;
        queries::activate(&tx, target.id)?;
        tx.commit().map_err(from_rusqlite)?;

        Ok(VersionRecord {
            is_active: true,
            ..target
        })
    }
}

/// Normalize a label passed to a lookup the way stored labels are normalized
fn lookup_label(version: &str, op: &'static str) -> Result<String> {
    validation::validate_version_label(version).map_err(|e| ExError::from(e).with_op(op))
}

/// Emit the end or end_error event for `op` and hand the result back
fn finish<T>(op: &'static str, started: Instant, result: Result<T>) -> Result<T> {
    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms);
        }
        Err(err) => {
            log_op_error!(op, err.clone(), duration_ms = duration_ms);
        }
    }
    result
}

impl VersionLedger for SqliteLedger {
    fn add_version(
        &mut self,
        version: &str,
        description: &str,
        is_active: bool,
    ) -> Result<VersionRecord> {
        let started = Instant::now();
        log_op_start!("add_version", version = version, is_active = is_active);

        let result = NewVersion::new(version, description, is_active)
            .map_err(ExError::from)
            .and_then(|input| self.add_version_tx(&input));

        finish("add_version", started, result)
    }

    fn current_version(&self) -> Result<Option<VersionRecord>> {
        let started = Instant::now();
        log_op_start!("current_version");

        let result = queries::select_active(&self.conn)
            .and_then(|active| invariants::single_active(active).map_err(ExError::from));

        finish("current_version", started, result)
    }

    fn list_versions(&self) -> Result<Vec<VersionRecord>> {
        let started = Instant::now();
        log_op_start!("list_versions");

        let result = queries::select_history(&self.conn);
        if let Ok(records) = &result {
            tracing::debug!(ledger_len = records.len(), "Listed versions");
        }

        finish("list_versions", started, result)
    }

    fn find_version(&self, version: &str) -> Result<Option<VersionRecord>> {
        let started = Instant::now();
        log_op_start!("find_version", version = version);

        let result = lookup_label(version, "find_version")
            .and_then(|label| queries::select_latest_by_label(&self.conn, &label));

        finish("find_version", started, result)
    }

    fn rollback_to_version(&mut self, version: &str) -> Result<VersionRecord> {
        let started = Instant::now();
        log_op_start!("rollback_to_version", version = version);

        let result = self.rollback_tx(version);

        finish("rollback_to_version", started, result)
    }
}
