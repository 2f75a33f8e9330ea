//! Port contracts for task persistence, scheduling, and notifications.

pub mod notifier;
pub mod repository;
pub mod scheduling;

pub use notifier::{Notification, NotificationError, NotificationKind, NotificationSink};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use scheduling::{
    BookingRepository, BookingRepositoryError, BookingRepositoryResult, SlotRepository,
    SlotRepositoryError, SlotRepositoryResult,
};
