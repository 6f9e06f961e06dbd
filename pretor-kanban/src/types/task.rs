//! Task type: one card on the board

use super::ids::TaskId;
use super::status::{Priority, Status};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A task/card on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,

    /// Lane the task sits in; legacy values are normalized on read
    pub status: Status,

    #[serde(default)]
    pub priority: Priority,

    /// Team member the task is assigned to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    /// Case/process this task belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Order within the lane; rewritten to a dense 0..n-1 sequence by every
    /// move-engine operation that touches the lane
    pub position_index: usize,

    pub created_at: DateTime<Utc>,
    /// Set by the engine on every row it rewrites
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task at the top of the todo lane
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: String::new(),
            status: Status::Todo,
            priority: Priority::Medium,
            assignee: None,
            case_id: None,
            due_date: None,
            position_index: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Assign to a team member
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Link to a case/process
    pub fn with_case(mut self, case_id: impl Into<String>) -> Self {
        self.case_id = Some(case_id.into());
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Place in a lane at a position (used when seeding a snapshot)
    pub fn in_lane(mut self, status: Status, position_index: usize) -> Self {
        self.status = status;
        self.position_index = position_index;
        self
    }
}
