use crate::errors::LedgerError;
use crate::model::VersionRecord;

/// Ids of every record currently flagged active
pub fn find_active_ids(records: &[VersionRecord]) -> Vec<i64> {
    records
        .iter()
        .filter(|r| r.is_active)
        .map(|r| r.id)
        .collect()
}

/// Reduce a set of active rows to the single current version
///
/// Zero rows is the uninitialized ledger; more than one is corruption and is
/// reported rather than resolved.
///
/// # Errors
///
/// Returns `MultipleActiveVersions` when more than one record is active.
pub fn single_active(mut active: Vec<VersionRecord>) -> Result<Option<VersionRecord>, LedgerError> {
    match active.len() {
        0 => Ok(None),
        1 => Ok(active.pop()),
        _ => Err(LedgerError::MultipleActiveVersions {
            ids: find_active_ids(&active),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::now_millis;

    fn active(id: i64) -> VersionRecord {
        VersionRecord {
            id,
            version: id.to_string(),
            description: "d".to_string(),
            applied_at: now_millis(),
            is_active: true,
        }
    }

    #[test]
    fn test_empty_is_uninitialized() {
        assert_eq!(single_active(vec![]).unwrap(), None);
    }

    #[test]
    fn test_one_active_is_current() {
        let current = single_active(vec![active(4)]).unwrap().unwrap();
        assert_eq!(current.id, 4);
    }

    #[test]
    fn test_two_active_is_reported() {
        let err = single_active(vec![active(1), active(2)]).unwrap_err();
        assert_eq!(err, LedgerError::MultipleActiveVersions { ids: vec![1, 2] });
    }
}
