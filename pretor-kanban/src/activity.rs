//! Task activity log and stage metrics
//!
//! Status changes are appended to an activity feed by the surrounding
//! application; this module derives the card badges from that feed: when a
//! task entered its current lane, when work started, when it finished, and
//! how long it has been sitting where it is.

use crate::types::{Status, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What an activity entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    Created,
    StatusChanged,
    Updated,
}

/// One entry in a task's activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskActivity {
    pub id: String,
    pub task_id: TaskId,
    pub action: ActivityAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
    /// Who performed the action, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    pub created_at: DateTime<Utc>,
}

fn status_changes_into<'a>(
    task_id: &'a TaskId,
    status: Status,
    activities: &'a [TaskActivity],
) -> impl Iterator<Item = &'a TaskActivity> {
    activities.iter().filter(move |a| {
        &a.task_id == task_id
            && a.action == ActivityAction::StatusChanged
            && a.new_value.as_deref().map(Status::normalize) == Some(status)
    })
}

/// When the task most recently entered the given lane.
pub fn stage_entry_date(
    task_id: &TaskId,
    status: Status,
    activities: &[TaskActivity],
) -> Option<DateTime<Utc>> {
    status_changes_into(task_id, status, activities)
        .map(|a| a.created_at)
        .max()
}

/// When the task first moved into `in_progress`.
pub fn started_at(task_id: &TaskId, activities: &[TaskActivity]) -> Option<DateTime<Utc>> {
    status_changes_into(task_id, Status::InProgress, activities)
        .map(|a| a.created_at)
        .min()
}

/// When the task most recently moved into `done`.
pub fn completed_at(task_id: &TaskId, activities: &[TaskActivity]) -> Option<DateTime<Utc>> {
    status_changes_into(task_id, Status::Done, activities)
        .map(|a| a.created_at)
        .max()
}

/// How long a task has been in its lane, as shown on the card badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageAge {
    /// Whole calendar days since the lane was entered
    pub days: i64,
    /// Badge text ("Hoje", "Há 1 dia", "Há N dias")
    pub label: String,
}

/// Calendar-day age of a lane entry relative to `now`.
pub fn time_in_stage(entered_at: DateTime<Utc>, now: DateTime<Utc>) -> StageAge {
    let days = (now.date_naive() - entered_at.date_naive()).num_days();
    let label = match days {
        0 => "Hoje".to_string(),
        1 => "Há 1 dia".to_string(),
        n => format!("Há {} dias", n),
    };
    StageAge { days, label }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, day, hour, 0, 0).unwrap()
    }

    fn status_change(task_id: &TaskId, to: &str, created_at: DateTime<Utc>) -> TaskActivity {
        TaskActivity {
            id: pretor_common::generate_ulid().to_string(),
            task_id: task_id.clone(),
            action: ActivityAction::StatusChanged,
            old_value: None,
            new_value: Some(to.to_string()),
            actor: None,
            created_at,
        }
    }

    #[test]
    fn test_stage_entry_is_latest_change_into_lane() {
        let id = TaskId::new();
        let feed = vec![
            status_change(&id, "in_progress", at(1, 9)),
            status_change(&id, "todo", at(2, 9)),
            status_change(&id, "in_progress", at(3, 9)),
        ];

        assert_eq!(
            stage_entry_date(&id, Status::InProgress, &feed),
            Some(at(3, 9))
        );
    }

    #[test]
    fn test_started_at_is_first_move_into_in_progress() {
        let id = TaskId::new();
        let feed = vec![
            status_change(&id, "in_progress", at(4, 10)),
            status_change(&id, "in_progress", at(2, 10)),
        ];

        assert_eq!(started_at(&id, &feed), Some(at(2, 10)));
    }

    #[test]
    fn test_completed_at_is_latest_move_into_done() {
        let id = TaskId::new();
        let feed = vec![
            status_change(&id, "done", at(5, 8)),
            status_change(&id, "todo", at(6, 8)),
            status_change(&id, "done", at(7, 8)),
        ];

        assert_eq!(completed_at(&id, &feed), Some(at(7, 8)));
    }

    #[test]
    fn test_legacy_review_counts_as_in_progress_entry() {
        let id = TaskId::new();
        let feed = vec![status_change(&id, "review", at(2, 14))];

        assert_eq!(
            stage_entry_date(&id, Status::InProgress, &feed),
            Some(at(2, 14))
        );
    }

    #[test]
    fn test_other_tasks_are_ignored() {
        let id = TaskId::new();
        let other = TaskId::new();
        let feed = vec![status_change(&other, "done", at(3, 8))];

        assert_eq!(completed_at(&id, &feed), None);
        assert_eq!(started_at(&id, &feed), None);
    }

    #[test]
    fn test_time_in_stage_labels() {
        assert_eq!(time_in_stage(at(5, 9), at(5, 18)).label, "Hoje");
        assert_eq!(time_in_stage(at(5, 23), at(6, 1)).label, "Há 1 dia");
        let age = time_in_stage(at(1, 9), at(9, 9));
        assert_eq!(age.days, 8);
        assert_eq!(age.label, "Há 8 dias");
    }
}
