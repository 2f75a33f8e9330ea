//! Domain model for task lifecycle management.
//!
//! The task domain models the posted-job state machine, slot booking with
//! single-holder semantics, and the booking records tying the two together,
//! while keeping all infrastructure concerns outside of the domain
//! boundary.

mod booking;
mod error;
mod ids;
mod slot;
mod status;
mod task;

pub use booking::{Booking, BookingStatus};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{BookingId, SlotId, TaskId};
pub use slot::TimeSlot;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
