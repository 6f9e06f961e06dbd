//! Board lanes and the status state machine

use serde::{Deserialize, Serialize};

/// The three fixed board lanes.
///
/// A legacy fourth value (`"review"`) still exists in old rows; it is
/// normalized to [`Status::InProgress`] at every read boundary. Unknown
/// values normalize to [`Status::Todo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// All lanes in board order
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    /// Map a raw status string to a lane.
    pub fn normalize(raw: &str) -> Self {
        match raw {
            "todo" => Self::Todo,
            "in_progress" | "review" => Self::InProgress,
            "done" => Self::Done,
            _ => Self::Todo,
        }
    }

    /// Wire form of the lane
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Column title shown on the board
    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "A Fazer",
            Self::InProgress => "Em Andamento",
            Self::Done => "Concluído",
        }
    }

    /// Index of this lane in [`Status::ALL`]
    pub fn lane_index(&self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// The lane one step toward completion, if any
    pub fn next(&self) -> Option<Status> {
        match self {
            Self::Todo => Some(Self::InProgress),
            Self::InProgress => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// The lane one step back toward the start, if any
    pub fn prev(&self) -> Option<Status> {
        match self {
            Self::Todo => None,
            Self::InProgress => Some(Self::Todo),
            Self::Done => Some(Self::InProgress),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Deserialization routes through `normalize` so legacy and malformed rows
// land in a valid lane instead of failing the whole read.
impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Status::normalize(&raw))
    }
}

/// Direction for the arrow-button and action-sheet surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
}

/// Task priority shown on board cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Display label for board cards
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "Alta",
            Self::Medium => "Média",
            Self::Low => "Baixa",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_known_values() {
        assert_eq!(Status::normalize("todo"), Status::Todo);
        assert_eq!(Status::normalize("in_progress"), Status::InProgress);
        assert_eq!(Status::normalize("done"), Status::Done);
    }

    #[test]
    fn test_normalize_legacy_review() {
        assert_eq!(Status::normalize("review"), Status::InProgress);
    }

    #[test]
    fn test_normalize_unknown_defaults_to_todo() {
        assert_eq!(Status::normalize(""), Status::Todo);
        assert_eq!(Status::normalize("archived"), Status::Todo);
    }

    #[test]
    fn test_deserialize_normalizes() {
        let status: Status = serde_json::from_str("\"review\"").unwrap();
        assert_eq!(status, Status::InProgress);

        let status: Status = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(status, Status::Done);
    }

    #[test]
    fn test_serialize_wire_form() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"in_progress\""
        );
    }

    #[test]
    fn test_adjacency() {
        assert_eq!(Status::Todo.next(), Some(Status::InProgress));
        assert_eq!(Status::InProgress.next(), Some(Status::Done));
        assert_eq!(Status::Done.next(), None);

        assert_eq!(Status::Todo.prev(), None);
        assert_eq!(Status::Done.prev(), Some(Status::InProgress));
    }

    #[test]
    fn test_lane_index_matches_all() {
        for (idx, status) in Status::ALL.iter().enumerate() {
            assert_eq!(status.lane_index(), idx);
        }
    }
}
