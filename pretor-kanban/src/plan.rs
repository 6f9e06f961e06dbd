//! Pure move-plan reducer
//!
//! [`build_move_plan`] is the single source of truth for move legality and
//! ordering. It never mutates the input snapshot: every call returns a
//! freshly built snapshot plus the minimal set of row updates to persist,
//! and the caller owns the swap-in. No I/O, no awaiting.

use crate::types::{Status, Task, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The minimal persistence tuple for one rewritten row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowUpdate {
    pub id: TaskId,
    pub status: Status,
    pub position_index: usize,
    pub updated_at: DateTime<Utc>,
}

/// Where a task came from and where it went, enough to reverse the move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub task_id: TaskId,
    pub from_status: Status,
    pub from_index: usize,
    pub to_status: Status,
    pub to_index: usize,
}

/// Output of the reducer: the next snapshot, the rows that changed, and a
/// record usable to reverse the operation. Ephemeral, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct MovePlan {
    pub next_tasks: Vec<Task>,
    pub updates: Vec<RowUpdate>,
    pub record: MoveRecord,
}

/// Partition a snapshot into the three lanes, each sorted by position.
fn partition(tasks: &[Task]) -> [Vec<Task>; 3] {
    let mut lanes: [Vec<Task>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    for task in tasks {
        lanes[task.status.lane_index()].push(task.clone());
    }
    for lane in &mut lanes {
        lane.sort_by_key(|t| t.position_index);
    }
    lanes
}

fn locate(lanes: &[Vec<Task>; 3], task_id: &TaskId) -> Option<(Status, usize)> {
    for status in Status::ALL {
        if let Some(index) = lanes[status.lane_index()]
            .iter()
            .position(|t| &t.id == task_id)
        {
            return Some((status, index));
        }
    }
    None
}

/// Build the plan for moving `task_id` to `target_status`.
///
/// `target_index` omitted appends to the end of the target lane. A
/// requested index is clamped to the lane bounds; within the same lane a
/// requested index greater than the origin is shifted down by one, because
/// drag libraries report the destination as if the item were not yet
/// removed. Returns `None` when the move resolves to no change or the task
/// is not in the snapshot.
pub fn build_move_plan(
    tasks: &[Task],
    task_id: &TaskId,
    target_status: Status,
    target_index: Option<usize>,
    now: DateTime<Utc>,
) -> Option<MovePlan> {
    let mut lanes = partition(tasks);
    let (from_status, from_index) = locate(&lanes, task_id)?;

    let source_lane = from_status.lane_index();
    let target_lane = target_status.lane_index();
    let same_lane = source_lane == target_lane;

    let task = lanes[source_lane].remove(from_index);

    let to_index = match target_index {
        None => lanes[target_lane].len(),
        Some(requested) => {
            // Clamp against the lane as the caller saw it, moved task included
            let bound = if same_lane {
                lanes[target_lane].len() + 1
            } else {
                lanes[target_lane].len()
            };
            let mut resolved = requested.min(bound);
            if same_lane && resolved > from_index {
                resolved -= 1;
            }
            resolved
        }
    };

    if same_lane && to_index == from_index {
        return None;
    }

    lanes[target_lane].insert(to_index, task);

    let mut next_tasks = Vec::with_capacity(tasks.len());
    let mut updates = Vec::new();
    for status in Status::ALL {
        for (index, task) in lanes[status.lane_index()].iter().enumerate() {
            let mut task = task.clone();
            if task.status != status || task.position_index != index {
                task.status = status;
                task.position_index = index;
                task.updated_at = now;
                updates.push(RowUpdate {
                    id: task.id.clone(),
                    status,
                    position_index: index,
                    updated_at: now,
                });
            }
            next_tasks.push(task);
        }
    }

    Some(MovePlan {
        next_tasks,
        updates,
        record: MoveRecord {
            task_id: task_id.clone(),
            from_status,
            from_index,
            to_status: target_status,
            to_index,
        },
    })
}
