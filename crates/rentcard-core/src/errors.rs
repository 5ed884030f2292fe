use rentcard_core_types::InvocationId;
use thiserror::Error;

/// Result type alias using the structured ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (and the CLI) can match
/// on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    NotFound,

    // Ledger integrity
    /// A datastore constraint rejected the write (e.g. a second active row)
    ConstraintViolation,
    /// The ledger was observed in a state its operations never produce
    InvariantViolation,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    /// The datastore was locked by another writer past the busy timeout
    Concurrency,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus free-form context
/// for the person reading the CLI output.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    invocation_id: Option<InvocationId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            invocation_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (a version label or row id)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add invocation ID context
    pub fn with_invocation_id(mut self, invocation_id: InvocationId) -> Self {
        self.invocation_id = Some(invocation_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the invocation ID context, if any
    pub fn invocation_id(&self) -> Option<&InvocationId> {
        self.invocation_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised by ledger operations before they reach storage
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    /// No record carries the requested label
    #[error("Version not found: {version}")]
    VersionNotFound { version: String },

    /// Version label is empty or whitespace-only
    #[error("Invalid version label: {reason}")]
    InvalidVersionLabel { reason: String },

    /// Description is empty or whitespace-only
    #[error("Invalid description: {reason}")]
    InvalidDescription { reason: String },

    /// More than one record is flagged active (should never happen)
    #[error("Multiple active versions: {ids:?}")]
    MultipleActiveVersions { ids: Vec<i64> },
}

impl From<LedgerError> for ExError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::VersionNotFound { version } => ExError::new(ExErrorKind::NotFound)
                .with_op("rollback_to_version")
                .with_entity_id(version.clone())
                .with_message(format!("Version {} not found", version)),

            LedgerError::InvalidVersionLabel { reason } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("add_version")
                .with_message(format!("Invalid version label: {}", reason)),

            LedgerError::InvalidDescription { reason } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("add_version")
                .with_message(format!("Invalid description: {}", reason)),

            LedgerError::MultipleActiveVersions { ids } => {
                let rendered: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
                ExError::new(ExErrorKind::InvariantViolation)
                    .with_op("current_version")
                    .with_entity_id(rendered.join(","))
                    .with_message(format!("{} records are flagged active", ids.len()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_stable_code() {
        let err: ExError = LedgerError::VersionNotFound {
            version: "9.9.9".to_string(),
        }
        .into();

        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert_eq!(err.code(), "ERR_NOT_FOUND");
        assert_eq!(err.entity_id(), Some("9.9.9"));
    }

    #[test]
    fn test_multiple_active_maps_to_invariant_violation() {
        let err: ExError = LedgerError::MultipleActiveVersions { ids: vec![2, 5] }.into();

        assert_eq!(err.kind(), ExErrorKind::InvariantViolation);
        assert_eq!(err.entity_id(), Some("2,5"));
    }

    #[test]
    fn test_display_includes_code_op_and_message() {
        let err = ExError::new(ExErrorKind::Persistence)
            .with_op("sqlite")
            .with_message("disk I/O error");

        assert_eq!(
            err.to_string(),
            "[ERR_PERSISTENCE] in operation 'sqlite': disk I/O error"
        );
    }

    #[test]
    fn test_invocation_id_is_carried() {
        let id = InvocationId::from_string("inv-1".to_string());
        let err = ExError::new(ExErrorKind::Internal).with_invocation_id(id.clone());

        assert_eq!(err.invocation_id(), Some(&id));
    }
}
