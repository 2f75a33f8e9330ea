//! Notification sink port.
//!
//! Notifications are fire-and-forget: services log delivery failures at
//! `warn` and never let them block or roll back the state transition that
//! produced them.

use crate::profile::domain::UserId;
use crate::task::domain::TaskId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Category of lifecycle event a notification describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A provider applied to the recipient's task.
    TaskAccepted,
    /// A provider declined the recipient's task.
    TaskDeclined,
    /// The client confirmed the recipient as provider.
    ProviderSelected,
    /// The provider started work.
    TaskStarted,
    /// The task was completed.
    TaskCompleted,
    /// The task was cancelled.
    TaskCancelled,
    /// The task entered dispute.
    TaskDisputed,
    /// Other validated status change.
    StatusChanged,
}

impl NotificationKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TaskAccepted => "task_accepted",
            Self::TaskDeclined => "task_declined",
            Self::ProviderSelected => "provider_selected",
            Self::TaskStarted => "task_started",
            Self::TaskCompleted => "task_completed",
            Self::TaskCancelled => "task_cancelled",
            Self::TaskDisputed => "task_disputed",
            Self::StatusChanged => "status_changed",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Rendered notification payload for one recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Short headline.
    pub title: String,
    /// Rendered body text.
    pub message: String,
    /// Event category.
    pub kind: NotificationKind,
    /// The task the event concerns.
    pub task_id: TaskId,
}

/// Notification delivery contract.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Delivers a notification to one user.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError`] when delivery fails; callers log and
    /// move on.
    async fn notify(&self, user_id: UserId, notification: Notification)
    -> Result<(), NotificationError>;
}

/// Errors returned by notification sink implementations.
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    /// The delivery channel failed.
    #[error("notification delivery failed: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),

    /// The notification template could not be rendered.
    #[error("notification rendering failed: {0}")]
    Rendering(String),
}

impl NotificationError {
    /// Wraps a delivery error.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}
