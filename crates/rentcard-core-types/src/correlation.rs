//! Correlation types for tying log lines and errors to one CLI invocation

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single CLI invocation or embedded ledger call
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvocationId(String);

impl InvocationId {
    /// Generate a new InvocationId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InvocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context carried from the command boundary into ledger calls
#[derive(Debug, Clone)]
pub struct InvocationContext {
    pub invocation_id: InvocationId,
    pub command: Option<String>,
}

impl InvocationContext {
    /// Create a new context with a fresh InvocationId
    pub fn new() -> Self {
        Self {
            invocation_id: InvocationId::new(),
            command: None,
        }
    }

    /// Name the command this context belongs to
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new()
    }
}
