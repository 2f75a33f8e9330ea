//! In-memory adapters for task ports, used by tests and local development.

mod booking;
mod notifier;
mod slot;
mod task;

pub use booking::InMemoryBookingRepository;
pub use notifier::RecordingNotificationSink;
pub use slot::InMemorySlotRepository;
pub use task::InMemoryTaskRepository;
