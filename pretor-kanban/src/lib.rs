//! Kanban move engine
//!
//! This crate keeps a three-lane task board (todo / in_progress / done)
//! consistent under concurrent, possibly-failing move operations. The pure
//! reducer in [`plan`] computes full next-snapshots with dense per-lane
//! positions; [`BoardEngine`] wraps it with the optimistic-apply protocol:
//! swap the UI snapshot immediately, persist asynchronously through an
//! external data store, roll back when a write fails and the operation has
//! not been superseded, and offer best-effort undo.
//!
//! Persistence, realtime fan-out and toast rendering are external
//! collaborators behind the [`TaskStore`] and [`Notifier`] traits; this
//! crate performs no I/O of its own.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use pretor_kanban::{BoardEngine, MoveDirection, Notifier, Task, TaskStore};
//!
//! # async fn example(store: impl TaskStore, notifier: impl Notifier) {
//! let engine = BoardEngine::new(store, notifier);
//! engine.replace_tasks(vec![Task::new("Protocolar recurso")]);
//!
//! let task_id = engine.tasks()[0].id.clone();
//! engine.move_adjacent(&task_id, MoveDirection::Right).await;
//! # }
//! ```

pub mod activity;
mod engine;
mod error;
pub mod plan;
pub mod types;

pub use activity::{
    completed_at, stage_entry_date, started_at, time_in_stage, ActivityAction, StageAge,
    TaskActivity,
};
pub use engine::{
    BoardEngine, MoveOutcome, MoveRequest, MoveSource, Notice, Notifier, TaskMoveRecord, TaskStore,
};
pub use error::{BoardError, Result};
pub use plan::{build_move_plan, MovePlan, MoveRecord, RowUpdate};
pub use types::{MoveDirection, OpId, Priority, Status, Task, TaskId};
