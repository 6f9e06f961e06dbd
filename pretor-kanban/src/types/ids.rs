//! Identifier newtypes

use pretor_common::generate_ulid;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique, immutable task identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generate a fresh task id
    pub fn new() -> Self {
        Self(generate_ulid().to_string())
    }

    /// Wrap an existing id string (e.g. one read from the data store)
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Token identifying one move invocation.
///
/// Used to detect whether a later move superseded an in-flight one before
/// its persistence call resolved; stale completions are ignored by
/// comparing against the latest token recorded per task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpId(Ulid);

impl OpId {
    /// Generate a fresh operation token
    pub fn new() -> Self {
        Self(generate_ulid())
    }
}

impl Default for OpId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OpId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_round_trip() {
        let id = TaskId::from_string("abc123");
        assert_eq!(id.as_str(), "abc123");
        assert_eq!(id.to_string(), "abc123");
        assert_eq!(TaskId::from("abc123"), id);
    }

    #[test]
    fn test_fresh_ids_differ() {
        assert_ne!(TaskId::new(), TaskId::new());
        assert_ne!(OpId::new(), OpId::new());
    }

    #[test]
    fn test_op_ids_order_by_creation() {
        let first = OpId::new();
        let second = OpId::new();
        assert!(second.to_string() > first.to_string());
    }
}
