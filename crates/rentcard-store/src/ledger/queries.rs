//! Row-level queries against `db_versions`
//!
//! Every function takes a `&Connection`, so callers may pass a `Transaction`.

use crate::errors::{from_rusqlite, Result};
use chrono::{DateTime, Utc};
use rentcard_core::VersionRecord;
use rusqlite::{Connection, OptionalExtension, Row};

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<VersionRecord> {
    let applied_ms: i64 = row.get(3)?;
    let applied_at = DateTime::<Utc>::from_timestamp_millis(applied_ms)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(3, applied_ms))?;

    Ok(VersionRecord {
        id: row.get(0)?,
        version: row.get(1)?,
        description: row.get(2)?,
        applied_at,
        is_active: row.get(4)?,
    })
}

/// Insert a record and return its assigned id
pub fn insert_version(
    conn: &Connection,
    version: &str,
    description: &str,
    applied_at: DateTime<Utc>,
    is_active: bool,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO db_versions (version, description, applied_at, is_active)
         VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![
            version,
            description,
            applied_at.timestamp_millis(),
            is_active
        ],
    )
    .map_err(from_rusqlite)?;

    Ok(conn.last_insert_rowid())
}

/// Clear the active flag on every record except `keep_id`; returns rows changed
pub fn deactivate_all_except(conn: &Connection, keep_id: Option<i64>) -> Result<usize> {
    let changed = match keep_id {
        Some(id) => conn.execute(
            "UPDATE db_versions SET is_active = 0 WHERE is_active = 1 AND id != ?1",
            [id],
        ),
        None => conn.execute("UPDATE db_versions SET is_active = 0 WHERE is_active = 1", []),
    }
    .map_err(from_rusqlite)?;

    Ok(changed)
}

/// Set the active flag on one record
pub fn activate(conn: &Connection, id: i64) -> Result<()> {
    conn.execute("UPDATE db_versions SET is_active = 1 WHERE id = ?1", [id])
        .map_err(from_rusqlite)?;
    Ok(())
}

/// Every record currently flagged active
pub fn select_active(conn: &Connection) -> Result<Vec<VersionRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, version, description, applied_at, is_active
             FROM db_versions
             WHERE is_active = 1
             ORDER BY id",
        )
        .map_err(from_rusqlite)?;

    let rows = stmt
        .query_map([], row_to_record)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(rows)
}

/// Full history, most recently applied first
pub fn select_history(conn: &Connection) -> Result<Vec<VersionRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, version, description, applied_at, is_active
             FROM db_versions
             ORDER BY applied_at DESC, id DESC",
        )
        .map_err(from_rusqlite)?;

    let rows = stmt
        .query_map([], row_to_record)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(rows)
}

/// The most recent record carrying `version`
pub fn select_latest_by_label(conn: &Connection, version: &str) -> Result<Option<VersionRecord>> {
    conn.query_row(
        "SELECT id, version, description, applied_at, is_active
         FROM db_versions
         WHERE version = ?1
         ORDER BY applied_at DESC, id DESC
         LIMIT 1",
        [version],
        row_to_record,
    )
    .optional()
    .map_err(from_rusqlite)
}
