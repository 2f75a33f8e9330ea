//! Error types for task domain validation and parsing.

use super::{BookingId, SlotId, TaskId, TaskStatus};
use crate::profile::domain::UserId;
use thiserror::Error;

/// Errors returned while mutating task domain aggregates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The requested status change is not in the transition table.
    #[error("invalid transition for task {task_id}: {from} -> {to}")]
    InvalidTransition {
        /// The task whose transition was rejected.
        task_id: TaskId,
        /// The current status.
        from: TaskStatus,
        /// The rejected target status.
        to: TaskStatus,
    },

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The slot is unavailable or already booked.
    #[error("slot {0} is unavailable or already booked")]
    SlotUnavailable(SlotId),

    /// The slot interval is empty or inverted.
    #[error("slot end time must come after its start time")]
    EmptySlotInterval,

    /// The booking is already cancelled.
    #[error("booking {0} is already cancelled")]
    BookingAlreadyCancelled(BookingId),

    /// The acting user is not the provider assigned to the task.
    #[error("user {user_id} is not the provider assigned to task {task_id}")]
    NotAssignedProvider {
        /// The task in question.
        task_id: TaskId,
        /// The acting user.
        user_id: UserId,
    },

    /// The acting user is neither the client nor the assigned provider.
    #[error("user {user_id} is not a participant in task {task_id}")]
    NotParticipant {
        /// The task in question.
        task_id: TaskId,
        /// The acting user.
        user_id: UserId,
    },
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
