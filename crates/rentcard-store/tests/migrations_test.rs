// Integration tests for the bootstrap migration runner

use rentcard_core::ExErrorKind;
use rentcard_store::migrations::{applied_migrations, apply_migrations, get_migrations};
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .unwrap();

    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

fn get_index_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='index' AND tbl_name='db_versions'")
        .unwrap();

    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    let mut conn = setup_test_db();

    let result = apply_migrations(&mut conn);
    assert!(result.is_ok(), "Migrations should succeed: {:?}", result.err());

    // sqlite_sequence is created by SQLite for the AUTOINCREMENT key
    assert_eq!(
        get_table_names(&conn),
        vec!["db_versions", "schema_migrations", "sqlite_sequence"]
    );

    let indexes = get_index_names(&conn);
    for expected in [
        "idx_db_versions_label",
        "idx_db_versions_applied_at",
        "idx_db_versions_single_active",
    ] {
        assert!(
            indexes.contains(&expected.to_string()),
            "Missing index: {}",
            expected
        );
    }
}

#[test]
fn test_migration_idempotency() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();

    let result = apply_migrations(&mut conn);
    assert!(result.is_ok(), "Re-running migrations should succeed");

    let applied = applied_migrations(&conn).unwrap();
    assert_eq!(applied.len(), get_migrations().len());
    let ids: Vec<&str> = applied.iter().map(|m| m.migration_id.as_str()).collect();
    assert_eq!(ids, vec!["001_db_versions", "002_single_active_version"]);
}

#[test]
fn test_checksum_is_recorded() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();

    for migration in applied_migrations(&conn).unwrap() {
        assert_eq!(migration.checksum.len(), 64, "SHA256 checksum should be 64 hex chars");
        assert!(migration.applied_at > 0);
    }
}

#[test]
fn test_checksum_mismatch_is_refused() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();

    conn.execute(
        "UPDATE schema_migrations SET checksum = 'tampered' WHERE migration_id = ?1",
        ["001_db_versions"],
    )
    .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.entity_id(), Some("001_db_versions"));
}
