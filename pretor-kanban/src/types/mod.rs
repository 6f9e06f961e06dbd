//! Core types for the move engine

mod ids;
mod status;
mod task;

pub use ids::{OpId, TaskId};
pub use status::{MoveDirection, Priority, Status};
pub use task::Task;
