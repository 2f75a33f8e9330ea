//! Service layer orchestrating the task lifecycle.

pub mod lifecycle;
pub mod notifications;

pub use lifecycle::{
    CompletionOutcome, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
};
pub use notifications::NotificationComposer;
