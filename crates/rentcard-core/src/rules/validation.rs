use crate::errors::LedgerError;

/// Validate a version label, returning it trimmed
///
/// # Errors
///
/// Returns `InvalidVersionLabel` if the label is empty after trimming.
pub fn validate_version_label(version: &str) -> Result<String, LedgerError> {
    let trimmed = version.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidVersionLabel {
            reason: "version label cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Validate a description, returning it trimmed
///
/// # Errors
///
/// Returns `InvalidDescription` if the description is empty after trimming.
pub fn validate_description(description: &str) -> Result<String, LedgerError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidDescription {
            reason: "description cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_kept_verbatim_inside() {
        assert_eq!(validate_version_label("v 2").unwrap(), "v 2");
    }

    #[test]
    fn test_tabs_and_newlines_count_as_blank() {
        assert!(validate_description("\t\n").is_err());
    }
}
