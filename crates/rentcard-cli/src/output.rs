//! Rendering of command results for stdout/stderr

use rentcard_core::errors::{ExError, ExErrorKind};
use rentcard_core::VersionRecord;
use serde::Serialize;

/// JSON body printed by `db:rollback --json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollbackOutcome<'a> {
    pub previous: Option<&'a VersionRecord>,
    pub current: &'a VersionRecord,
    pub changed: bool,
    pub dry_run: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    code: &'a str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    invocation_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorBody<'a>,
}

/// Pretty-print any serializable value as JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ExError> {
    serde_json::to_string_pretty(value).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("render_json")
            .with_message(e.to_string())
    })
}

pub fn render_current(current: Option<&VersionRecord>) -> String {
    match current {
        Some(record) => format!(
            "Current version: {}\nDescription: {}\nApplied at: {}",
            record.version,
            record.description,
            record.applied_at.to_rfc3339()
        ),
        None => "No active version".to_string(),
    }
}

pub fn render_history(versions: &[VersionRecord]) -> String {
    if versions.is_empty() {
        return "No versions recorded".to_string();
    }

    let mut lines = vec!["Database versions:".to_string()];
    lines.extend(versions.iter().map(|r| format!("  {}", r.summary_line())));
    lines.join("\n")
}

pub fn render_rollback(
    previous: Option<&VersionRecord>,
    current: &VersionRecord,
    changed: bool,
) -> String {
    if !changed {
        return format!("Version {} is already active", current.version);
    }

    match previous {
        Some(prev) => format!(
            "Rolled back from {} to version {}",
            prev.version, current.version
        ),
        None => format!("Rolled back to version {}", current.version),
    }
}

pub fn render_rollback_preview(previous: Option<&VersionRecord>, target: &VersionRecord) -> String {
    if target.is_active {
        return format!("Version {} is already active", target.version);
    }

    let from = match previous {
        Some(prev) => format!(" from {}", prev.version),
        None => String::new(),
    };
    format!(
        "Would roll back{} to version {} ({}, applied {})",
        from,
        target.version,
        target.description,
        target.applied_at.to_rfc3339()
    )
}

/// Error line for stderr
pub fn render_error(err: &ExError, json: bool) -> String {
    if json {
        let envelope = ErrorEnvelope {
            error: ErrorBody {
                code: err.code(),
                message: err.to_string(),
                invocation_id: err.invocation_id().map(|id| id.as_str()),
            },
        };
        if let Ok(rendered) = serde_json::to_string(&envelope) {
            return rendered;
        }
    }
    format!("Error: {}", err)
}
