//! Error handling for rentcard-store
//!
//! Wraps rentcard-core ExError with store-specific helpers

use rentcard_core::errors::{ExError, ExErrorKind};
use rusqlite::ErrorCode;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_entity_id(migration_id)
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_entity_id(migration_id)
        .with_message(format!(
            "Checksum mismatch for migration {}: recorded {}, embedded {}",
            migration_id, expected, actual
        ))
}

/// Create a database error from rusqlite::Error
///
/// Constraint failures and lock contention keep their own kinds so callers
/// can tell a rejected write from a broken datastore.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(failure, _) => match failure.code {
            ErrorCode::ConstraintViolation => ExErrorKind::ConstraintViolation,
            ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked => ExErrorKind::Concurrency,
            _ => ExErrorKind::Persistence,
        },
        _ => ExErrorKind::Persistence,
    };

    ExError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_failure_maps_to_constraint_violation() {
        let err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CONSTRAINT),
            Some("UNIQUE constraint failed".to_string()),
        );
        assert_eq!(from_rusqlite(err).kind(), ExErrorKind::ConstraintViolation);
    }

    #[test]
    fn test_busy_maps_to_concurrency() {
        let err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
            None,
        );
        assert_eq!(from_rusqlite(err).kind(), ExErrorKind::Concurrency);
    }

    #[test]
    fn test_other_errors_map_to_persistence() {
        assert_eq!(
            from_rusqlite(rusqlite::Error::QueryReturnedNoRows).kind(),
            ExErrorKind::Persistence
        );
    }
}
