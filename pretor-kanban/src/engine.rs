//! Optimistic move application
//!
//! [`BoardEngine`] wraps the pure reducer with the apply protocol: swap the
//! new snapshot in immediately, persist the changed rows asynchronously,
//! roll back if the write fails and the operation has not been superseded,
//! and surface undo for the interaction surfaces that offer it.
//!
//! The snapshot is a single shared value behind a mutex; plans are always
//! built against the latest snapshot at the moment a move is invoked, and
//! the lock is never held across the persistence await. Operations are not
//! queued: two near-simultaneous moves each read-modify-write the current
//! snapshot, and the per-task operation token decides whose failure may
//! still roll back.

use crate::error::Result;
use crate::plan::{build_move_plan, MoveRecord, RowUpdate};
use crate::types::{MoveDirection, OpId, Status, Task, TaskId};
use async_trait::async_trait;
use chrono::Utc;
use pretor_common::Pretty;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

/// Persistence collaborator: upserts the changed rows of one move.
///
/// The engine only depends on success or failure; the response payload, the
/// transport and any retry policy beyond the user re-dragging are the
/// implementor's concern.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn persist(&self, updates: &[RowUpdate]) -> Result<()>;
}

#[async_trait]
impl<S: TaskStore> TaskStore for std::sync::Arc<S> {
    async fn persist(&self, updates: &[RowUpdate]) -> Result<()> {
        (**self).persist(updates).await
    }
}

/// Notification surface: abstract intents, rendered by the UI layer.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

impl<N: Notifier> Notifier for std::sync::Arc<N> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}

/// Intents emitted by the engine toward the notification surface
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// A move can be reversed for a short while
    UndoAvailable { record: MoveRecord },
    /// A user-meaningful transition persisted successfully
    MoveCompleted { message: String },
    /// A write failed and the board snapped back
    MoveFailed { message: String },
}

/// Which interaction surface triggered a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// Pointer drag-and-drop; may target any lane and index
    Drag,
    /// Directional arrow buttons; one lane at a time
    Arrows,
    /// Mobile action sheet; one lane at a time
    Sheet,
    /// The complete shortcut; jumps straight to done
    Complete,
    /// Reversal of a previous move
    Undo,
}

impl MoveSource {
    /// Drag completions stay silent to avoid toast noise during fast
    /// sequential drags; terminal transitions confirm.
    fn notifies_on_success(self) -> bool {
        matches!(self, Self::Complete | Self::Undo)
    }

    fn default_success_message(self) -> &'static str {
        match self {
            Self::Complete => "Tarefa concluída",
            Self::Undo => "Movimentação desfeita",
            _ => "Tarefa movida",
        }
    }
}

/// One move invocation
#[derive(Debug, Clone)]
pub struct MoveRequest {
    pub task_id: TaskId,
    pub to_status: Status,
    pub target_index: Option<usize>,
    pub source: MoveSource,
    pub enable_undo: bool,
    pub success_message: Option<String>,
}

impl MoveRequest {
    /// New request appending to the end of the target lane, no undo
    pub fn new(task_id: impl Into<TaskId>, to_status: Status, source: MoveSource) -> Self {
        Self {
            task_id: task_id.into(),
            to_status,
            target_index: None,
            source,
            enable_undo: false,
            success_message: None,
        }
    }

    /// Target a specific index in the destination lane
    pub fn with_target_index(mut self, index: usize) -> Self {
        self.target_index = Some(index);
        self
    }

    /// Offer the undo affordance after the optimistic apply
    pub fn with_undo(mut self, enable: bool) -> Self {
        self.enable_undo = enable;
        self
    }

    /// Override the success confirmation text
    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }
}

/// A remembered move, reversible until a later operation supersedes it
#[derive(Debug, Clone, PartialEq)]
pub struct TaskMoveRecord {
    pub op_id: OpId,
    pub record: MoveRecord,
}

/// Outcome of a move invocation as seen by the caller
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// The move applied optimistically and the write persisted
    Applied(MoveRecord),
    /// The move resolved to no change (or the task is unknown)
    NoOp,
    /// An adjacency-restricted surface hit the start/end of the flow
    AtBoundary(Status),
    /// The write failed and the board was restored
    RolledBack,
    /// The write failed but a newer operation already owns the task
    Superseded,
}

#[derive(Default)]
struct BoardState {
    tasks: Vec<Task>,
    /// Latest operation token per task; an entry is removed once its
    /// operation settles, so a surviving entry marks an in-flight write
    latest_ops: HashMap<TaskId, OpId>,
    pending_undo: Option<TaskMoveRecord>,
}

/// The move engine: one shared snapshot, optimistic apply, best-effort undo
pub struct BoardEngine<S, N> {
    state: Mutex<BoardState>,
    store: S,
    notifier: N,
}

impl<S: TaskStore, N: Notifier> BoardEngine<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            state: Mutex::new(BoardState::default()),
            store,
            notifier,
        }
    }

    fn state(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the whole snapshot (initial load, realtime reconciliation).
    ///
    /// Clears in-flight operation tokens and the undo slot: both refer to
    /// a snapshot that no longer exists.
    pub fn replace_tasks(&self, tasks: Vec<Task>) {
        let mut state = self.state();
        state.tasks = tasks;
        state.latest_ops.clear();
        state.pending_undo = None;
    }

    /// Current snapshot
    pub fn tasks(&self) -> Vec<Task> {
        self.state().tasks.clone()
    }

    /// Tasks in one lane, ordered by position
    pub fn lane(&self, status: Status) -> Vec<Task> {
        let mut lane: Vec<Task> = self
            .state()
            .tasks
            .iter()
            .filter(|t| t.status == status)
            .cloned()
            .collect();
        lane.sort_by_key(|t| t.position_index);
        lane
    }

    /// The move that can currently be undone, if any
    pub fn pending_undo(&self) -> Option<TaskMoveRecord> {
        self.state().pending_undo.clone()
    }

    /// Apply one move: optimistic swap, async persist, rollback on failure.
    pub async fn apply_move(&self, request: MoveRequest) -> MoveOutcome {
        let op_id = OpId::new();

        let (updates, record) = {
            let mut state = self.state();
            let plan = match build_move_plan(
                &state.tasks,
                &request.task_id,
                request.to_status,
                request.target_index,
                Utc::now(),
            ) {
                Some(plan) => plan,
                None => return MoveOutcome::NoOp,
            };

            state.tasks = plan.next_tasks;
            state.latest_ops.insert(request.task_id.clone(), op_id);

            // Any remembered undo for this task is superseded by this move
            if state
                .pending_undo
                .as_ref()
                .is_some_and(|u| u.record.task_id == request.task_id)
            {
                state.pending_undo = None;
            }

            if request.enable_undo {
                state.pending_undo = Some(TaskMoveRecord {
                    op_id,
                    record: plan.record.clone(),
                });
            }

            (plan.updates, plan.record)
        };

        if request.enable_undo {
            self.notifier.notify(Notice::UndoAvailable {
                record: record.clone(),
            });
        }

        debug!(
            task = %request.task_id,
            op = %op_id,
            to = %request.to_status,
            "persisting move: {}",
            Pretty(&updates)
        );

        match self.store.persist(&updates).await {
            Ok(()) => {
                {
                    let mut state = self.state();
                    if state.latest_ops.get(&request.task_id) == Some(&op_id) {
                        state.latest_ops.remove(&request.task_id);
                    }
                }
                if request.source.notifies_on_success() {
                    let message = request
                        .success_message
                        .clone()
                        .unwrap_or_else(|| request.source.default_success_message().to_string());
                    self.notifier.notify(Notice::MoveCompleted { message });
                }
                MoveOutcome::Applied(record)
            }
            Err(err) => {
                let mut state = self.state();
                if state.latest_ops.get(&request.task_id) != Some(&op_id) {
                    // A newer operation owns this task's fate now
                    debug!(task = %request.task_id, op = %op_id, "stale persistence failure ignored");
                    return MoveOutcome::Superseded;
                }
                state.latest_ops.remove(&request.task_id);

                if let Some(rollback) = build_move_plan(
                    &state.tasks,
                    &request.task_id,
                    record.from_status,
                    Some(record.from_index),
                    Utc::now(),
                ) {
                    state.tasks = rollback.next_tasks;
                }
                if state
                    .pending_undo
                    .as_ref()
                    .is_some_and(|u| u.op_id == op_id)
                {
                    state.pending_undo = None;
                }
                drop(state);

                warn!(
                    task = %request.task_id,
                    severity = %err.severity(),
                    error = %err,
                    "move persistence failed, snapshot restored"
                );
                self.notifier.notify(Notice::MoveFailed {
                    message: "Não foi possível mover a tarefa. Tente novamente.".to_string(),
                });
                MoveOutcome::RolledBack
            }
        }
    }

    /// Drag-and-drop: any lane, explicit index, silent success, no undo.
    pub async fn drag_to(
        &self,
        task_id: &TaskId,
        to_status: Status,
        target_index: usize,
    ) -> MoveOutcome {
        self.apply_move(
            MoveRequest::new(task_id.clone(), to_status, MoveSource::Drag)
                .with_target_index(target_index),
        )
        .await
    }

    /// Arrow buttons: one step along todo ↔ in_progress ↔ done, no undo.
    pub async fn move_adjacent(&self, task_id: &TaskId, direction: MoveDirection) -> MoveOutcome {
        match self.adjacent_target(task_id, direction) {
            AdjacentTarget::NotFound => MoveOutcome::NoOp,
            AdjacentTarget::Boundary(status) => MoveOutcome::AtBoundary(status),
            AdjacentTarget::Lane(target) => {
                self.apply_move(MoveRequest::new(
                    task_id.clone(),
                    target,
                    MoveSource::Arrows,
                ))
                .await
            }
        }
    }

    /// Mobile action sheet: same adjacency as the arrows, but undo-eligible.
    pub async fn move_from_sheet(
        &self,
        task_id: &TaskId,
        direction: MoveDirection,
    ) -> MoveOutcome {
        match self.adjacent_target(task_id, direction) {
            AdjacentTarget::NotFound => MoveOutcome::NoOp,
            AdjacentTarget::Boundary(status) => MoveOutcome::AtBoundary(status),
            AdjacentTarget::Lane(target) => {
                self.apply_move(
                    MoveRequest::new(task_id.clone(), target, MoveSource::Sheet).with_undo(true),
                )
                .await
            }
        }
    }

    /// Complete shortcut: straight to done from any lane, undo-eligible.
    pub async fn complete(&self, task_id: &TaskId) -> MoveOutcome {
        let current = self.status_of(task_id);
        match current {
            None => MoveOutcome::NoOp,
            Some(Status::Done) => MoveOutcome::AtBoundary(Status::Done),
            Some(_) => {
                self.apply_move(
                    MoveRequest::new(task_id.clone(), Status::Done, MoveSource::Complete)
                        .with_undo(true),
                )
                .await
            }
        }
    }

    /// Reverse the remembered move by replaying it through the reducer.
    ///
    /// Undo is itself a plain move targeting the original lane and index,
    /// never undo-eligible, so undos cannot chain.
    pub async fn undo(&self) -> MoveOutcome {
        let Some(pending) = self.state().pending_undo.take() else {
            return MoveOutcome::NoOp;
        };
        let record = pending.record;
        self.apply_move(
            MoveRequest::new(record.task_id.clone(), record.from_status, MoveSource::Undo)
                .with_target_index(record.from_index),
        )
        .await
    }

    fn status_of(&self, task_id: &TaskId) -> Option<Status> {
        self.state()
            .tasks
            .iter()
            .find(|t| &t.id == task_id)
            .map(|t| t.status)
    }

    fn adjacent_target(&self, task_id: &TaskId, direction: MoveDirection) -> AdjacentTarget {
        let Some(current) = self.status_of(task_id) else {
            return AdjacentTarget::NotFound;
        };
        let target = match direction {
            MoveDirection::Right => current.next(),
            MoveDirection::Left => current.prev(),
        };
        match target {
            Some(status) => AdjacentTarget::Lane(status),
            None => AdjacentTarget::Boundary(current),
        }
    }
}

enum AdjacentTarget {
    Lane(Status),
    Boundary(Status),
    NotFound,
}
