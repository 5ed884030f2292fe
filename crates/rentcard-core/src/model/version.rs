use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::rules::validation;

/// VersionRecord - one recorded database schema version
///
/// Records are append-only: once stored, only `is_active` may change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    /// Surrogate key assigned by storage, increasing in insertion order
    pub id: i64,

    /// Caller-supplied label, used as the rollback lookup key (not unique)
    pub version: String,

    /// Free-text note
    pub description: String,

    /// When the record was created (millisecond precision)
    pub applied_at: DateTime<Utc>,

    /// Whether this record is the ledger's current version
    pub is_active: bool,
}

impl VersionRecord {
    /// Format the record as a single human-readable line
    pub fn summary_line(&self) -> String {
        format!(
            "{} - {} (applied {}){}",
            self.version,
            self.description,
            self.applied_at.to_rfc3339(),
            if self.is_active { " [active]" } else { "" }
        )
    }
}

/// Validated input for `VersionLedger::add_version`
///
/// Both fields are trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVersion {
    version: String,
    description: String,
    is_active: bool,
}

impl NewVersion {
    /// Validate caller input
    ///
    /// # Errors
    ///
    /// Returns `InvalidVersionLabel` or `InvalidDescription` when either value
    /// is empty or whitespace-only.
    pub fn new(version: &str, description: &str, is_active: bool) -> Result<Self, LedgerError> {
        let version = validation::validate_version_label(version)?;
        let description = validation::validate_description(description)?;
        Ok(Self {
            version,
            description,
            is_active,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Current UTC time truncated to milliseconds, the precision storage keeps
pub fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::<Utc>::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

/// History order: `applied_at` descending, ties broken by `id` descending
pub fn history_order(a: &VersionRecord, b: &VersionRecord) -> Ordering {
    b.applied_at
        .cmp(&a.applied_at)
        .then_with(|| b.id.cmp(&a.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, applied_ms: i64) -> VersionRecord {
        VersionRecord {
            id,
            version: format!("1.0.{}", id),
            description: "test".to_string(),
            applied_at: DateTime::<Utc>::from_timestamp_millis(applied_ms).unwrap(),
            is_active: false,
        }
    }

    #[test]
    fn test_new_version_trims_input() {
        let input = NewVersion::new("  1.0.0 ", " Initial schema ", true).unwrap();
        assert_eq!(input.version(), "1.0.0");
        assert_eq!(input.description(), "Initial schema");
        assert!(input.is_active());
    }

    #[test]
    fn test_new_version_rejects_blank_label() {
        let err = NewVersion::new("   ", "desc", false).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidVersionLabel { .. }));
    }

    #[test]
    fn test_new_version_rejects_empty_description() {
        let err = NewVersion::new("1.0.0", "", false).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidDescription { .. }));
    }

    #[test]
    fn test_history_order_newest_first_then_id() {
        let mut records = vec![record(1, 1_000), record(3, 2_000), record(2, 2_000)];
        records.sort_by(history_order);

        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_now_millis_has_no_sub_millisecond_part() {
        let now = now_millis();
        assert_eq!(now.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(record(7, 0)).unwrap();
        assert_eq!(json["isActive"], serde_json::json!(false));
        assert!(json.get("appliedAt").is_some());
    }

    #[test]
    fn test_summary_line_marks_active() {
        let mut r = record(1, 0);
        r.is_active = true;
        assert!(r.summary_line().ends_with("[active]"));
    }
}
