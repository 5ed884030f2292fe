use chrono::{DateTime, Utc};

use crate::errors::{ExError, LedgerError, Result};
use crate::model::{history_order, now_millis, NewVersion, VersionRecord};
use crate::ops::ledger::VersionLedger;
use crate::rules::{invariants, validation};

/// In-memory version ledger
///
/// Vec-backed implementation of `VersionLedger` with the same ordering and
/// activation rules as the SQLite backend. Not thread-safe; designed for
/// single-threaded embedding and tests.
#[derive(Debug, Clone)]
pub struct InMemoryLedger {
    records: Vec<VersionRecord>,
    next_id: i64,
    clock: fn() -> DateTime<Utc>,
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLedger {
    /// Create an empty ledger using the wall clock
    pub fn new() -> Self {
        Self::with_clock(now_millis)
    }

    /// Create an empty ledger stamping records with `clock`
    pub fn with_clock(clock: fn() -> DateTime<Utc>) -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
            clock,
        }
    }

    /// Number of records ever added
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn latest_index_of(&self, version: &str) -> Option<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.version == version)
            .min_by(|(_, a), (_, b)| history_order(a, b))
            .map(|(idx, _)| idx)
    }
}

impl VersionLedger for InMemoryLedger {
    fn add_version(
        &mut self,
        version: &str,
        description: &str,
        is_active: bool,
    ) -> Result<VersionRecord> {
        let input = NewVersion::new(version, description, is_active)?;

        if input.is_active() {
            for record in &mut self.records {
                record.is_active = false;
            }
        }

        let record = VersionRecord {
            id: self.next_id,
            version: input.version().to_string(),
            description: input.description().to_string(),
            applied_at: (self.clock)(),
            is_active: input.is_active(),
        };
        self.next_id += 1;
        self.records.push(record.clone());

        Ok(record)
    }

    fn current_version(&self) -> Result<Option<VersionRecord>> {
        let active: Vec<VersionRecord> =
            self.records.iter().filter(|r| r.is_active).cloned().collect();
        Ok(invariants::single_active(active)?)
    }

    fn list_versions(&self) -> Result<Vec<VersionRecord>> {
        let mut records = self.records.clone();
        records.sort_by(history_order);
        Ok(records)
    }

    fn find_version(&self, version: &str) -> Result<Option<VersionRecord>> {
        let label = validation::validate_version_label(version)
            .map_err(|e| ExError::from(e).with_op("find_version"))?;
        Ok(self
            .latest_index_of(&label)
            .map(|idx| self.records[idx].clone()))
    }

    fn rollback_to_version(&mut self, version: &str) -> Result<VersionRecord> {
        let label = validation::validate_version_label(version)
            .map_err(|e| ExError::from(e).with_op("rollback_to_version"))?;
        let target = self
            .latest_index_of(&label)
            .ok_or(LedgerError::VersionNotFound { version: label })?;

        for (idx, record) in self.records.iter_mut().enumerate() {
            record.is_active = idx == target;
        }

        Ok(self.records[target].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    fn fixed_clock() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000).unwrap()
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut ledger = InMemoryLedger::new();
        let a = ledger.add_version("1.0.0", "a", false).unwrap();
        let b = ledger.add_version("1.0.1", "b", false).unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_invalid_input_writes_nothing() {
        let mut ledger = InMemoryLedger::new();
        let err = ledger.add_version("", "desc", true).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_equal_timestamps_list_by_id_descending() {
        let mut ledger = InMemoryLedger::with_clock(fixed_clock);
        ledger.add_version("a", "first", false).unwrap();
        ledger.add_version("b", "second", false).unwrap();
        ledger.add_version("c", "third", false).unwrap();

        let labels: Vec<String> = ledger
            .list_versions()
            .unwrap()
            .into_iter()
            .map(|r| r.version)
            .collect();
        assert_eq!(labels, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_rollback_resolves_most_recent_duplicate_label() {
        let mut ledger = InMemoryLedger::with_clock(fixed_clock);
        ledger.add_version("2.0.0", "first attempt", false).unwrap();
        let retry = ledger.add_version("2.0.0", "second attempt", false).unwrap();
        ledger.add_version("2.1.0", "later", true).unwrap();

        let current = ledger.rollback_to_version("2.0.0").unwrap();
        assert_eq!(current.id, retry.id);
        assert_eq!(current.description, "second attempt");
    }

    #[test]
    fn test_lookup_labels_are_trimmed_like_stored_labels() {
        let mut ledger = InMemoryLedger::new();
        let stored = ledger.add_version("1.0.3 ", "Add rent cards", false).unwrap();
        ledger.add_version("1.0.4", "Add payments", true).unwrap();

        assert_eq!(stored.version, "1.0.3");
        assert_eq!(ledger.find_version(" 1.0.3").unwrap(), Some(stored.clone()));

        let current = ledger.rollback_to_version("1.0.3 ").unwrap();
        assert_eq!(current.id, stored.id);
        assert!(current.is_active);
    }

    #[test]
    fn test_blank_lookup_label_is_invalid_input() {
        let mut ledger = InMemoryLedger::new();
        ledger.add_version("1.0.0", "Initial", true).unwrap();

        let err = ledger.rollback_to_version("   ").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert_eq!(err.op(), Some("rollback_to_version"));

        let err = ledger.find_version("").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert_eq!(err.op(), Some("find_version"));

        assert_eq!(ledger.current_version().unwrap().unwrap().version, "1.0.0");
    }
}
