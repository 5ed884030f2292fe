#![allow(clippy::unwrap_used, clippy::expect_used)]

use rentcard_core::{ExErrorKind, InMemoryLedger, LedgerState, VersionLedger};

fn active_ids(ledger: &InMemoryLedger) -> Vec<i64> {
    ledger
        .list_versions()
        .unwrap()
        .into_iter()
        .filter(|r| r.is_active)
        .map(|r| r.id)
        .collect()
}

#[test]
fn test_empty_ledger_is_uninitialized() {
    let ledger = InMemoryLedger::new();

    assert_eq!(ledger.current_version().unwrap(), None);
    assert_eq!(ledger.state().unwrap(), LedgerState::Uninitialized);
    assert!(ledger.list_versions().unwrap().is_empty());
}

#[test]
fn test_add_active_version_becomes_current() {
    let mut ledger = InMemoryLedger::new();
    ledger.add_version("1.0.0", "Initial schema", true).unwrap();

    let current = ledger.current_version().unwrap().unwrap();
    assert_eq!(current.version, "1.0.0");
    assert_eq!(current.description, "Initial schema");
    assert!(current.is_active);
}

#[test]
fn test_add_inactive_version_keeps_ledger_uninitialized() {
    let mut ledger = InMemoryLedger::new();
    ledger.add_version("1.0.0", "Staged", false).unwrap();

    assert_eq!(ledger.state().unwrap(), LedgerState::Uninitialized);
}

#[test]
fn test_list_is_most_recent_first() {
    let mut ledger = InMemoryLedger::new();
    for label in ["1.0.0", "1.0.1", "1.0.2"] {
        ledger.add_version(label, "release", true).unwrap();
    }

    let list = ledger.list_versions().unwrap();
    assert_eq!(list[0].version, "1.0.2");
    assert_eq!(list.len(), 3);
    assert_eq!(active_ids(&ledger), vec![list[0].id]);
}

#[test]
fn test_rollback_scenario() {
    // Given: 1.0.3 recorded inactive, 1.0.4 recorded active
    let mut ledger = InMemoryLedger::new();
    ledger.add_version("1.0.3", "Previous", false).unwrap();
    let newer = ledger.add_version("1.0.4", "Latest", true).unwrap();
    assert_eq!(ledger.current_version().unwrap().unwrap().version, "1.0.4");

    // When: rolling back to 1.0.3
    ledger.rollback_to_version("1.0.3").unwrap();

    // Then: 1.0.3 is current and 1.0.4 was deactivated
    let current = ledger.current_version().unwrap().unwrap();
    assert_eq!(current.version, "1.0.3");
    assert!(current.is_active);
    let demoted = ledger
        .list_versions()
        .unwrap()
        .into_iter()
        .find(|r| r.id == newer.id)
        .unwrap();
    assert!(!demoted.is_active);
}

#[test]
fn test_rollback_unknown_label_leaves_state_unchanged() {
    let mut ledger = InMemoryLedger::new();
    ledger.add_version("1.0.0", "a", true).unwrap();
    let before = ledger.list_versions().unwrap();

    let err = ledger.rollback_to_version("nonexistent").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(ledger.list_versions().unwrap(), before);
}

#[test]
fn test_rollback_to_active_version_is_noop() {
    let mut ledger = InMemoryLedger::new();
    ledger.add_version("1.0.0", "a", false).unwrap();
    ledger.add_version("1.0.1", "b", true).unwrap();
    let before = ledger.list_versions().unwrap();

    let current = ledger.rollback_to_version("1.0.1").unwrap();

    assert_eq!(current.version, "1.0.1");
    assert_eq!(ledger.list_versions().unwrap(), before);
}

#[test]
fn test_find_version_does_not_activate() {
    let mut ledger = InMemoryLedger::new();
    ledger.add_version("1.0.0", "a", false).unwrap();

    let found = ledger.find_version("1.0.0").unwrap().unwrap();

    assert!(!found.is_active);
    assert_eq!(ledger.current_version().unwrap(), None);
    assert_eq!(ledger.find_version("2.0.0").unwrap(), None);
}
